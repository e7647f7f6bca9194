use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261019_000002_create_student_table::Student, m20261019_000003_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Observation::Table)
                    .if_not_exists()
                    .col(pk_auto(Observation::Id))
                    .col(integer(Observation::StudentId))
                    .col(integer(Observation::TeacherId))
                    .col(date(Observation::Date))
                    .col(string_len(Observation::Kind, 20))
                    .col(text(Observation::Detail))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_observaciones_estudiante_id")
                            .from(Observation::Table, Observation::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_observaciones_docente_id")
                            .from(Observation::Table, Observation::TeacherId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Observation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Observation {
    #[sea_orm(iden = "observaciones")]
    Table,
    Id,
    #[sea_orm(iden = "estudiante_id")]
    StudentId,
    #[sea_orm(iden = "docente_id")]
    TeacherId,
    #[sea_orm(iden = "fecha")]
    Date,
    #[sea_orm(iden = "tipo")]
    Kind,
    #[sea_orm(iden = "detalle")]
    Detail,
}
