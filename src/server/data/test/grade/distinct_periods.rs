use super::*;

/// Tests listing each period label once, sorted.
///
/// Expected: Ok(["2025-P1", "2025-P2"])
#[tokio::test]
async fn lists_sorted_unique_periods() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;
    factory::grade::GradeFactory::new(db, student.id)
        .subject("Arte")
        .period("2025-P2")
        .build()
        .await?;
    factory::grade::GradeFactory::new(db, student.id)
        .subject("Arte")
        .period("2025-P1")
        .build()
        .await?;
    factory::grade::GradeFactory::new(db, student.id)
        .subject("Música")
        .period("2025-P1")
        .build()
        .await?;

    let repo = GradeRepository::new(db);

    assert_eq!(repo.distinct_periods().await?, vec!["2025-P1", "2025-P2"]);
    assert_eq!(repo.distinct_subjects().await?, vec!["Arte", "Música"]);

    Ok(())
}
