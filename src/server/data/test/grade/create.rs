use super::*;

/// Tests inserting a second grade under an existing key directly.
///
/// Verifies that the schema itself refuses the duplicate, independent of the checks
/// done by `upsert` and the grade service.
///
/// Expected: Err(DbErr), one stored row
#[tokio::test]
async fn rejects_duplicate_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;
    let repo = GradeRepository::new(db);
    repo.create(entry(student.id, "Lenguaje", "2025-P1", 3.0), Utc::now())
        .await?;

    let result = repo
        .create(entry(student.id, "Lenguaje", "2025-P1", 4.0), Utc::now())
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Grade::find().count(db).await?, 1);

    Ok(())
}

/// Tests inserting grades that share a subject but not a period.
///
/// Expected: Ok, two stored rows
#[tokio::test]
async fn allows_same_subject_in_other_period() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;
    let repo = GradeRepository::new(db);
    repo.create(entry(student.id, "Lenguaje", "2025-P1", 3.0), Utc::now())
        .await?;
    repo.create(entry(student.id, "Lenguaje", "2025-P2", 4.0), Utc::now())
        .await?;

    assert_eq!(entity::prelude::Grade::find().count(db).await?, 2);

    Ok(())
}
