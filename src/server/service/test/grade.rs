use super::*;
use crate::server::{
    model::grade::{GradeEntry, UpdateGradeParams},
    service::grade::GradeService,
};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use serde_json::json;

/// Tests a batch containing valid, malformed and unknown-student entries.
///
/// Verifies that the malformed entry and the entry for a missing student are skipped
/// while the valid ones are stored in the same call.
///
/// Expected: Ok(created 2, updated 0, skipped 2)
#[tokio::test]
async fn save_batch_skips_bad_entries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;

    let outcome = GradeService::new(db)
        .save_batch(vec![
            json!({"estudianteId": student.id, "asignatura": "Lenguaje", "periodo": "2025-P1", "nota": 4.0}),
            json!({"estudianteId": student.id, "asignatura": "Historia", "periodo": "2025-P1", "nota": 3.2}),
            json!({"estudianteId": student.id, "asignatura": "Arte"}),
            json!({"estudianteId": 9999, "asignatura": "Arte", "periodo": "2025-P1", "nota": 5.0}),
        ])
        .await?;

    assert_eq!(outcome.created, 2);
    assert_eq!(outcome.updated, 0);
    assert_eq!(outcome.skipped, 2);
    assert_eq!(entity::prelude::Grade::find().count(db).await?, 2);

    Ok(())
}

/// Tests saving the same batch twice.
///
/// Verifies that the second save updates in place instead of duplicating grades.
///
/// Expected: second outcome has updated 1, created 0; one stored row with the new score
#[tokio::test]
async fn save_batch_is_idempotent_per_key() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;
    let service = GradeService::new(db);

    service
        .save_batch(vec![json!({
            "estudianteId": student.id, "asignatura": "Lenguaje", "periodo": "2025-P1", "nota": 3.0
        })])
        .await?;
    let second = service
        .save_batch(vec![json!({
            "estudianteId": student.id, "asignatura": "Lenguaje", "periodo": "2025-P1", "nota": 4.5
        })])
        .await?;

    assert_eq!(second.created, 0);
    assert_eq!(second.updated, 1);
    let grades = service.get_by_student(student.id).await?;
    assert_eq!(grades.len(), 1);
    assert_eq!(grades[0].score, 4.5);

    Ok(())
}

/// Tests submitting an empty batch.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn save_batch_rejects_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GradeService::new(db).save_batch(Vec::new()).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests creating a grade whose key already exists.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn create_rejects_duplicate_key() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;
    factory::create_grade(db, student.id).await?;

    let result = GradeService::new(db)
        .create(GradeEntry {
            student_id: student.id,
            subject: "Matemáticas".to_string(),
            period: "2025-P1".to_string(),
            score: 2.0,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests creating a grade outside the 0.0 to 5.0 scale.
///
/// Expected: Err(BadRequest) and nothing stored
#[tokio::test]
async fn create_rejects_out_of_range_score() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;

    let result = GradeService::new(db)
        .create(GradeEntry {
            student_id: student.id,
            subject: "Lenguaje".to_string(),
            period: "2025-P1".to_string(),
            score: 5.5,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Grade::find().count(db).await?, 0);

    Ok(())
}

/// Tests listing grades of a student that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn get_by_student_requires_existing_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GradeService::new(db).get_by_student(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests renaming a grade's subject onto a key another grade already holds.
///
/// Verifies that the student keeps one grade per subject and period, and that the
/// grade being edited is left untouched.
///
/// Expected: Err(Conflict), both original rows unchanged
#[tokio::test]
async fn update_rejects_key_collision() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;
    factory::grade::GradeFactory::new(db, student.id)
        .subject("Lenguaje")
        .period("2025-P1")
        .build()
        .await?;
    let history = factory::grade::GradeFactory::new(db, student.id)
        .subject("Historia")
        .period("2025-P1")
        .build()
        .await?;

    let result = GradeService::new(db)
        .update(
            history.id,
            UpdateGradeParams {
                subject: Some("Lenguaje".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let stored = entity::prelude::Grade::find_by_id(history.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.subject, "Historia");
    assert_eq!(entity::prelude::Grade::find().count(db).await?, 2);

    Ok(())
}

/// Tests updating a grade while keeping its own subject and period.
///
/// Expected: Ok with the new score
#[tokio::test]
async fn update_keeps_own_key() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;
    let grade = factory::grade::GradeFactory::new(db, student.id)
        .subject("Lenguaje")
        .period("2025-P1")
        .score(3.0)
        .build()
        .await?;

    let updated = GradeService::new(db)
        .update(
            grade.id,
            UpdateGradeParams {
                subject: Some("Lenguaje".to_string()),
                score: Some(4.2),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.subject, "Lenguaje");
    assert_eq!(updated.score, 4.2);

    Ok(())
}

/// Tests a batch where a later entry fails at the database.
///
/// Verifies that the entry written before the failure is rolled back with the rest of
/// the batch. A trigger rejects inserts for the subject "Rechazada".
///
/// Expected: Err(DbErr) and no stored grades
#[tokio::test]
async fn save_batch_rolls_back_on_database_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;
    db.execute_unprepared(
        "CREATE TRIGGER reject_grade BEFORE INSERT ON calificaciones \
         WHEN NEW.asignatura = 'Rechazada' \
         BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
    )
    .await?;

    let result = GradeService::new(db)
        .save_batch(vec![
            json!({"estudianteId": student.id, "asignatura": "Lenguaje", "periodo": "2025-P1", "nota": 4.0}),
            json!({"estudianteId": student.id, "asignatura": "Rechazada", "periodo": "2025-P1", "nota": 3.0}),
        ])
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(entity::prelude::Grade::find().count(db).await?, 0);

    Ok(())
}
