//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a course with one enrolled student.
///
/// # Returns
/// - `Ok((course, student))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_course(
    db: &DatabaseConnection,
) -> Result<(entity::course::Model, entity::student::Model), DbErr> {
    let course = crate::factory::course::create_course(db).await?;
    let student = crate::factory::student::create_student(db, course.id).await?;

    Ok((course, student))
}

/// Creates a course, a student in it and a `familia` account linked to the student.
///
/// # Returns
/// - `Ok((course, student, family))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_family_with_student(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::course::Model,
        entity::student::Model,
        entity::user::Model,
    ),
    DbErr,
> {
    let (course, student) = create_student_with_course(db).await?;
    let family = crate::factory::user::UserFactory::new(db)
        .familia(student.id)
        .build()
        .await?;

    Ok((course, student, family))
}
