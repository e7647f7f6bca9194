use super::*;

/// Tests storing two marks for the same student and day.
///
/// Expected: Err(DbErr) on the second insert, one stored row
#[tokio::test]
async fn rejects_second_mark_same_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;
    factory::attendance::AttendanceFactory::new(db, student.id)
        .date(day(12))
        .build()
        .await?;

    let result = factory::attendance::AttendanceFactory::new(db, student.id)
        .date(day(12))
        .status(AttendanceStatus::Late)
        .build()
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Attendance::find().count(db).await?, 1);

    Ok(())
}
