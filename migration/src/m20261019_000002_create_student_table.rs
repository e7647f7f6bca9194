use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000001_create_course_table::Course;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_len(Student::Name, 100))
                    .col(integer(Student::CourseId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_estudiantes_curso_id")
                            .from(Student::Table, Student::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_estudiantes_curso_id")
                    .table(Student::Table)
                    .col(Student::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    #[sea_orm(iden = "estudiantes")]
    Table,
    Id,
    #[sea_orm(iden = "nombre")]
    Name,
    #[sea_orm(iden = "curso_id")]
    CourseId,
}
