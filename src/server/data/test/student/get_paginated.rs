use super::*;

/// Tests listing students of one course with their course attached.
///
/// Verifies that the course filter excludes other courses and that each row carries
/// the related course.
///
/// Expected: Ok with the two students of the filtered course
#[tokio::test]
async fn filters_by_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let other = factory::create_course(db).await?;
    factory::student::StudentFactory::new(db, course.id).name("Bruno").build().await?;
    factory::student::StudentFactory::new(db, course.id).name("Alicia").build().await?;
    factory::create_student(db, other.id).await?;

    let repo = StudentRepository::new(db);
    let (students, total) = repo
        .get_paginated(Some(course.id), PageRequest::new(None, None, 20))
        .await?;

    assert_eq!(total, 2);
    assert_eq!(students[0].student.name, "Alicia");
    assert_eq!(students[1].student.name, "Bruno");
    assert!(students
        .iter()
        .all(|s| s.course.as_ref().map(|c| c.id) == Some(course.id)));

    Ok(())
}

/// Tests the unfiltered listing across courses.
///
/// Expected: Ok with total 3 and page size 2
#[tokio::test]
async fn lists_all_students_without_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, _) = factory::helpers::create_student_with_course(db).await?;
    factory::create_student(db, course.id).await?;
    factory::helpers::create_student_with_course(db).await?;

    let repo = StudentRepository::new(db);
    let (students, total) = repo
        .get_paginated(None, PageRequest::new(Some(1), Some(2), 20))
        .await?;

    assert_eq!(total, 3);
    assert_eq!(students.len(), 2);

    Ok(())
}
