use super::*;

/// Tests that marking the same student and day twice keeps one row.
///
/// Verifies that the second mark replaces the status of the first instead of
/// inserting another record.
///
/// Expected: Ok((record, false)) with the new status and one stored row
#[tokio::test]
async fn replaces_status_for_same_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;

    let repo = AttendanceRepository::new(db);
    let (first, created) = repo
        .upsert(AttendanceEntry {
            student_id: student.id,
            date: day(10),
            status: AttendanceStatus::Absent,
        })
        .await?;
    assert!(created);

    let (second, created) = repo
        .upsert(AttendanceEntry {
            student_id: student.id,
            date: day(10),
            status: AttendanceStatus::Excused,
        })
        .await?;

    assert!(!created);
    assert_eq!(second.id, first.id);
    assert_eq!(second.status, AttendanceStatus::Excused);
    assert_eq!(entity::prelude::Attendance::find().count(db).await?, 1);

    Ok(())
}

/// Tests that another day produces a new mark.
///
/// Expected: Ok((record, true))
#[tokio::test]
async fn inserts_new_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;
    factory::attendance::AttendanceFactory::new(db, student.id)
        .date(day(10))
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);
    let (_, created) = repo
        .upsert(AttendanceEntry {
            student_id: student.id,
            date: day(11),
            status: AttendanceStatus::Present,
        })
        .await?;

    assert!(created);
    assert_eq!(entity::prelude::Attendance::find().count(db).await?, 2);

    Ok(())
}
