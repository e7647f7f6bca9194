use super::*;

/// Tests deleting an existing course.
///
/// Expected: Ok(true) and the course is gone
#[tokio::test]
async fn deletes_existing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;

    let repo = CourseRepository::new(db);
    assert!(repo.delete(course.id).await?);
    assert!(repo.find_by_id(course.id).await?.is_none());

    Ok(())
}

/// Tests deleting a course that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    assert!(!repo.delete(42).await?);

    Ok(())
}
