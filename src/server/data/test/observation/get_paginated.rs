use super::*;

/// Tests that both date bounds of the filter are inclusive.
///
/// Verifies that observations dated exactly on `from` and on `to` are returned while
/// those outside the range are not, newest first.
///
/// Expected: Ok with the observations of days 5 and 20
#[tokio::test]
async fn date_bounds_are_inclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;
    let teacher = factory::create_user(db).await?;
    for d in [4, 5, 20, 21] {
        factory::observation::ObservationFactory::new(db, student.id, teacher.id)
            .date(day(d))
            .build()
            .await?;
    }

    let repo = ObservationRepository::new(db);
    let (observations, total) = repo
        .get_paginated(
            ObservationFilter {
                from: Some(day(5)),
                to: Some(day(20)),
                ..Default::default()
            },
            PageRequest::new(None, None, 20),
        )
        .await?;

    assert_eq!(total, 2);
    assert_eq!(observations[0].observation.date, day(20));
    assert_eq!(observations[1].observation.date, day(5));

    Ok(())
}

/// Tests filtering by type and resolving author and student names.
///
/// Expected: Ok with the single disciplinary observation, names attached
#[tokio::test]
async fn filters_by_type_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let student = factory::student::StudentFactory::new(db, course.id)
        .name("Tomás")
        .build()
        .await?;
    let teacher = factory::user::UserFactory::new(db).name("Prof. Rojas").build().await?;
    factory::create_observation(db, student.id, teacher.id).await?;
    factory::observation::ObservationFactory::new(db, student.id, teacher.id)
        .kind(ObservationType::Disciplinary)
        .build()
        .await?;

    let repo = ObservationRepository::new(db);
    let (observations, total) = repo
        .get_paginated(
            ObservationFilter {
                kind: Some(ObservationType::Disciplinary),
                ..Default::default()
            },
            PageRequest::new(None, None, 20),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(observations[0].student_name.as_deref(), Some("Tomás"));
    assert_eq!(observations[0].teacher_name.as_deref(), Some("Prof. Rojas"));

    Ok(())
}
