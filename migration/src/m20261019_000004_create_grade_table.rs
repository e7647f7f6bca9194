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
                    .table(Grade::Table)
                    .if_not_exists()
                    .col(pk_auto(Grade::Id))
                    .col(integer(Grade::StudentId))
                    .col(string_len(Grade::Subject, 50))
                    .col(string_len(Grade::Period, 20))
                    .col(double(Grade::Score))
                    .col(
                        timestamp(Grade::RecordedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calificaciones_estudiante_id")
                            .from(Grade::Table, Grade::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One grade per student, subject and period
        manager
            .create_index(
                Index::create()
                    .name("idx_calificaciones_unique")
                    .table(Grade::Table)
                    .col(Grade::StudentId)
                    .col(Grade::Subject)
                    .col(Grade::Period)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Grade::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Grade {
    #[sea_orm(iden = "calificaciones")]
    Table,
    Id,
    #[sea_orm(iden = "estudiante_id")]
    StudentId,
    #[sea_orm(iden = "asignatura")]
    Subject,
    #[sea_orm(iden = "periodo")]
    Period,
    #[sea_orm(iden = "nota")]
    Score,
    #[sea_orm(iden = "fecha_registro")]
    RecordedAt,
}
