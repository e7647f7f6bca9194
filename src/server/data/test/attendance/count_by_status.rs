use super::*;

/// Tests grouping a course's marks for one day by status.
///
/// Verifies that only marks of the course's students on the requested day are counted
/// and that statuses with no marks are left out.
///
/// Expected: Ok([(Presente, 2), (Ausente, 1)])
#[tokio::test]
async fn counts_marks_per_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let a = factory::create_student(db, course.id).await?;
    let b = factory::create_student(db, course.id).await?;
    let c = factory::create_student(db, course.id).await?;
    let (_, outsider) = factory::helpers::create_student_with_course(db).await?;

    for student_id in [a.id, b.id, outsider.id] {
        factory::attendance::AttendanceFactory::new(db, student_id)
            .date(day(10))
            .build()
            .await?;
    }
    factory::attendance::AttendanceFactory::new(db, c.id)
        .date(day(10))
        .status(AttendanceStatus::Absent)
        .build()
        .await?;
    factory::attendance::AttendanceFactory::new(db, c.id)
        .date(day(11))
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);
    let counts = repo.count_by_status(course.id, day(10)).await?;

    assert_eq!(
        counts,
        vec![(AttendanceStatus::Present, 2), (AttendanceStatus::Absent, 1)]
    );

    Ok(())
}

/// Tests a day with no marks.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_unmarked_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, _) = factory::helpers::create_student_with_course(db).await?;

    let repo = AttendanceRepository::new(db);
    assert!(repo.count_by_status(course.id, day(10)).await?.is_empty());

    Ok(())
}
