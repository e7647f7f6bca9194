use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000002_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len(User::Name, 100))
                    .col(string_len_uniq(User::Email, 120))
                    .col(string_len(User::Password, 255))
                    .col(string_len(User::Role, 10))
                    .col(integer_null(User::StudentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_usuarios_estudiante_id")
                            .from(User::Table, User::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "usuarios")]
    Table,
    Id,
    #[sea_orm(iden = "nombre")]
    Name,
    Email,
    Password,
    #[sea_orm(iden = "rol")]
    Role,
    #[sea_orm(iden = "estudiante_id")]
    StudentId,
}
