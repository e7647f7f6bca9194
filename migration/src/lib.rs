pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_course_table;
mod m20261019_000002_create_student_table;
mod m20261019_000003_create_user_table;
mod m20261019_000004_create_grade_table;
mod m20261019_000005_create_attendance_table;
mod m20261019_000006_create_observation_table;
mod m20261019_000007_create_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_course_table::Migration),
            Box::new(m20261019_000002_create_student_table::Migration),
            Box::new(m20261019_000003_create_user_table::Migration),
            Box::new(m20261019_000004_create_grade_table::Migration),
            Box::new(m20261019_000005_create_attendance_table::Migration),
            Box::new(m20261019_000006_create_observation_table::Migration),
            Box::new(m20261019_000007_create_message_table::Migration),
        ]
    }
}
