use super::*;

/// Tests counting observations dated on or after a day.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_from_inclusive_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, student) = factory::helpers::create_student_with_course(db).await?;
    let sibling = factory::create_student(db, course.id).await?;
    let teacher = factory::create_user(db).await?;
    for d in [1, 10, 15] {
        factory::observation::ObservationFactory::new(db, student.id, teacher.id)
            .date(day(d))
            .build()
            .await?;
    }
    factory::observation::ObservationFactory::new(db, sibling.id, teacher.id)
        .date(day(15))
        .build()
        .await?;

    let repo = ObservationRepository::new(db);
    assert_eq!(repo.count_since(student.id, day(10)).await?, 2);

    Ok(())
}
