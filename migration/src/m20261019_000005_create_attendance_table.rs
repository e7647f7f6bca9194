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
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendance::Id))
                    .col(integer(Attendance::StudentId))
                    .col(date(Attendance::Date))
                    .col(string_len(Attendance::Status, 20))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asistencia_estudiante_id")
                            .from(Attendance::Table, Attendance::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One mark per student per day
        manager
            .create_index(
                Index::create()
                    .name("idx_asistencia_unique")
                    .table(Attendance::Table)
                    .col(Attendance::StudentId)
                    .col(Attendance::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendance {
    #[sea_orm(iden = "asistencia")]
    Table,
    Id,
    #[sea_orm(iden = "estudiante_id")]
    StudentId,
    #[sea_orm(iden = "fecha")]
    Date,
    #[sea_orm(iden = "estado")]
    Status,
}
