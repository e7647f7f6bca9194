use super::*;

/// Tests searching the grades of one course.
///
/// Verifies that grades of students in other courses are excluded and that each
/// result carries the student's name, ordered by name.
///
/// Expected: Ok with the two grades of the course
#[tokio::test]
async fn returns_grades_of_course_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let zoe = factory::student::StudentFactory::new(db, course.id).name("Zoe").build().await?;
    let ana = factory::student::StudentFactory::new(db, course.id).name("Ana").build().await?;
    let (_, outsider) = factory::helpers::create_student_with_course(db).await?;

    factory::create_grade(db, zoe.id).await?;
    factory::create_grade(db, ana.id).await?;
    factory::create_grade(db, outsider.id).await?;

    let repo = GradeRepository::new(db);
    let grades = repo.search_by_course(course.id, None, None).await?;

    assert_eq!(grades.len(), 2);
    assert_eq!(grades[0].student_name.as_deref(), Some("Ana"));
    assert_eq!(grades[1].student_name.as_deref(), Some("Zoe"));

    Ok(())
}

/// Tests narrowing the search to a subject and period.
///
/// Expected: Ok with only the matching grade
#[tokio::test]
async fn filters_by_subject_and_period() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, student) = factory::helpers::create_student_with_course(db).await?;
    factory::grade::GradeFactory::new(db, student.id)
        .subject("Historia")
        .period("2025-P1")
        .build()
        .await?;
    let wanted = factory::grade::GradeFactory::new(db, student.id)
        .subject("Historia")
        .period("2025-P2")
        .build()
        .await?;
    factory::grade::GradeFactory::new(db, student.id)
        .subject("Ciencias")
        .period("2025-P2")
        .build()
        .await?;

    let repo = GradeRepository::new(db);
    let grades = repo
        .search_by_course(course.id, Some("Historia"), Some("2025-P2"))
        .await?;

    assert_eq!(grades.len(), 1);
    assert_eq!(grades[0].grade.id, wanted.id);

    Ok(())
}
