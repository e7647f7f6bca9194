use super::*;

/// Tests counting enrolled students per course.
///
/// Verifies that the grouped query reports each course's student count, including
/// courses with no students, ordered by level then section.
///
/// Expected: Ok with counts [2, 0]
#[tokio::test]
async fn counts_students_per_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seventh = factory::course::CourseFactory::new(db)
        .level("7")
        .section("A")
        .build()
        .await?;
    let eighth = factory::course::CourseFactory::new(db)
        .level("8")
        .section("A")
        .build()
        .await?;
    factory::create_student(db, seventh.id).await?;
    factory::create_student(db, seventh.id).await?;

    let repo = CourseRepository::new(db);
    let summaries = repo.get_summaries(None).await?;

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].course.id, seventh.id);
    assert_eq!(summaries[0].student_count, 2);
    assert_eq!(summaries[1].course.id, eighth.id);
    assert_eq!(summaries[1].student_count, 0);

    Ok(())
}

/// Tests limiting the number of summaries.
///
/// Expected: Ok with only the first course
#[tokio::test]
async fn applies_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::course::CourseFactory::new(db).section("A").build().await?;
    factory::course::CourseFactory::new(db).section("B").build().await?;

    let repo = CourseRepository::new(db);
    let summaries = repo.get_summaries(Some(1)).await?;

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].course.id, first.id);

    Ok(())
}
