use super::*;

/// Tests restricting a student's marks to a half-open date range.
///
/// Verifies that the lower bound is included and the upper bound excluded.
///
/// Expected: Ok with the marks of days 1 and 15 only
#[tokio::test]
async fn includes_start_and_excludes_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;
    for date in [
        NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
        day(1),
        day(15),
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
    ] {
        factory::attendance::AttendanceFactory::new(db, student.id)
            .date(date)
            .build()
            .await?;
    }

    let repo = AttendanceRepository::new(db);
    let marks = repo
        .get_by_student_between(
            student.id,
            day(1),
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        )
        .await?;

    let mut dates: Vec<_> = marks.iter().map(|m| m.date).collect();
    dates.sort();
    assert_eq!(dates, vec![day(1), day(15)]);

    Ok(())
}
