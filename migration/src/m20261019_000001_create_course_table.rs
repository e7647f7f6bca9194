use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string_len(Course::Name, 50))
                    .col(string_len(Course::Level, 10))
                    .col(string_len(Course::Section, 10))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    #[sea_orm(iden = "cursos")]
    Table,
    Id,
    #[sea_orm(iden = "nombre")]
    Name,
    #[sea_orm(iden = "nivel")]
    Level,
    #[sea_orm(iden = "letra")]
    Section,
}
