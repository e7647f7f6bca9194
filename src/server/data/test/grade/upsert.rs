use super::*;

/// Tests inserting a grade under a new key.
///
/// Expected: Ok((grade, true))
#[tokio::test]
async fn creates_grade_for_new_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;

    let repo = GradeRepository::new(db);
    let (grade, created) = repo
        .upsert(entry(student.id, "Lenguaje", "2025-P1", 4.2), Utc::now())
        .await?;

    assert!(created);
    assert_eq!(grade.student_id, student.id);
    assert_eq!(grade.score, 4.2);

    Ok(())
}

/// Tests that saving the same key twice keeps one row.
///
/// Verifies that the second save updates the score and timestamp of the existing
/// grade instead of inserting a duplicate.
///
/// Expected: Ok((grade, false)) with the same ID and a single stored row
#[tokio::test]
async fn updates_existing_key_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;
    let earlier = Utc::now() - Duration::days(3);

    let repo = GradeRepository::new(db);
    let (first, _) = repo
        .upsert(entry(student.id, "Lenguaje", "2025-P1", 3.0), earlier)
        .await?;
    let (second, created) = repo
        .upsert(entry(student.id, "Lenguaje", "2025-P1", 4.8), Utc::now())
        .await?;

    assert!(!created);
    assert_eq!(second.id, first.id);
    assert_eq!(second.score, 4.8);
    assert!(second.recorded_at > first.recorded_at);
    assert_eq!(entity::prelude::Grade::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a different period is a different key.
///
/// Expected: Two rows for the same student and subject
#[tokio::test]
async fn treats_other_period_as_new_grade() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;

    let repo = GradeRepository::new(db);
    repo.upsert(entry(student.id, "Lenguaje", "2025-P1", 3.0), Utc::now())
        .await?;
    let (_, created) = repo
        .upsert(entry(student.id, "Lenguaje", "2025-P2", 3.5), Utc::now())
        .await?;

    assert!(created);
    assert_eq!(entity::prelude::Grade::find().count(db).await?, 2);

    Ok(())
}
