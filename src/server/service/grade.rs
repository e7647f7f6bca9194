//! Grade service.
//!
//! Besides single-record CRUD this owns the batch save: every entry is upserted on its
//! natural key inside one transaction, malformed entries are skipped and counted.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::Value;

use crate::server::{
    data::grade::GradeRepository,
    error::AppError,
    model::{
        grade::{
            score_in_range, BatchOutcome, Grade, GradeEntry, GradeFilter, GradeWithStudent,
            UpdateGradeParams, MAX_SCORE, MIN_SCORE,
        },
        pagination::{Page, PageRequest},
    },
    service::student::{ensure_student_exists, KnownStudents},
};

pub struct GradeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GradeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Grades of a course, optionally narrowed to a subject and period.
    pub async fn search_by_course(
        &self,
        course_id: i32,
        subject: Option<&str>,
        period: Option<&str>,
    ) -> Result<Vec<GradeWithStudent>, AppError> {
        Ok(GradeRepository::new(self.db)
            .search_by_course(course_id, subject, period)
            .await?)
    }

    pub async fn get_paginated(
        &self,
        filter: GradeFilter,
        page: PageRequest,
    ) -> Result<Page<GradeWithStudent>, AppError> {
        let (grades, total) = GradeRepository::new(self.db)
            .get_paginated(filter, page)
            .await?;

        Ok(Page::new(grades, total, page))
    }

    /// All grades of one student, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Grade>)` - Grades, empty when none recorded
    /// - `Err(AppError::NotFound)` - Student does not exist
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<Grade>, AppError> {
        ensure_student_exists(self.db, student_id).await?;

        Ok(GradeRepository::new(self.db)
            .get_by_student(student_id)
            .await?)
    }

    /// Records a single grade.
    ///
    /// # Returns
    /// - `Ok(Grade)` - Created grade
    /// - `Err(AppError::BadRequest)` - Score outside the allowed range
    /// - `Err(AppError::NotFound)` - Student does not exist
    /// - `Err(AppError::Conflict)` - A grade already exists for the student, subject and period
    pub async fn create(&self, entry: GradeEntry) -> Result<Grade, AppError> {
        ensure_score_in_range(entry.score)?;

        let txn = self.db.begin().await?;
        ensure_student_exists(&txn, entry.student_id).await?;

        let grade_repo = GradeRepository::new(&txn);
        if grade_repo
            .find_by_key(entry.student_id, &entry.subject, &entry.period)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Ya existe una calificación de {} para el periodo {}",
                entry.subject, entry.period
            )));
        }

        let grade = grade_repo.create(entry, Utc::now()).await?;
        txn.commit().await?;

        Ok(grade)
    }

    /// Applies a partial update and refreshes the recorded timestamp.
    ///
    /// # Returns
    /// - `Ok(Grade)` - Updated grade
    /// - `Err(AppError::BadRequest)` - Score outside the allowed range
    /// - `Err(AppError::NotFound)` - Grade does not exist
    /// - `Err(AppError::Conflict)` - The new subject and period collide with another grade
    ///   of the same student
    pub async fn update(&self, id: i32, params: UpdateGradeParams) -> Result<Grade, AppError> {
        if let Some(score) = params.score {
            ensure_score_in_range(score)?;
        }

        let txn = self.db.begin().await?;
        let grade_repo = GradeRepository::new(&txn);

        let Some(existing) = grade_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Calificación no encontrada".to_string()));
        };

        let subject = params.subject.as_deref().unwrap_or(&existing.subject);
        let period = params.period.as_deref().unwrap_or(&existing.period);
        if let Some(other) = grade_repo
            .find_by_key(existing.student_id, subject, period)
            .await?
        {
            if other.id != id {
                return Err(AppError::Conflict(format!(
                    "Ya existe una calificación de {} para el periodo {}",
                    subject, period
                )));
            }
        }

        let grade = grade_repo
            .update(id, params, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Calificación no encontrada".to_string()))?;
        txn.commit().await?;

        Ok(grade)
    }

    /// Upserts a batch of grade entries in one transaction.
    ///
    /// Entries that do not parse, carry an out-of-range score or reference an unknown
    /// student are skipped. A database error rolls back the whole batch.
    ///
    /// # Returns
    /// - `Ok(BatchOutcome)` - Created, updated and skipped counts
    /// - `Err(AppError::BadRequest)` - Empty batch
    /// - `Err(AppError::DbErr)` - Database error, nothing was saved
    pub async fn save_batch(&self, entries: Vec<Value>) -> Result<BatchOutcome, AppError> {
        if entries.is_empty() {
            return Err(AppError::BadRequest(
                "No hay calificaciones para guardar".to_string(),
            ));
        }

        let now = Utc::now();
        let txn = self.db.begin().await?;
        let grade_repo = GradeRepository::new(&txn);
        let mut students = KnownStudents::new(&txn);
        let mut outcome = BatchOutcome::default();

        for (index, value) in entries.into_iter().enumerate() {
            let Some(entry) = GradeEntry::from_value(value) else {
                tracing::debug!("Skipping malformed grade entry at index {}", index);
                outcome.skipped += 1;
                continue;
            };

            if !students.contains(entry.student_id).await? {
                tracing::debug!(
                    "Skipping grade entry at index {} for unknown student {}",
                    index,
                    entry.student_id
                );
                outcome.skipped += 1;
                continue;
            }

            let (_, created) = grade_repo.upsert(entry, now).await?;
            if created {
                outcome.created += 1;
            } else {
                outcome.updated += 1;
            }
        }

        txn.commit().await?;

        tracing::info!(
            "Saved grade batch: {} created, {} updated, {} skipped",
            outcome.created,
            outcome.updated,
            outcome.skipped
        );

        Ok(outcome)
    }

    pub async fn get_periods(&self) -> Result<Vec<String>, AppError> {
        Ok(GradeRepository::new(self.db).distinct_periods().await?)
    }

    pub async fn get_subjects(&self) -> Result<Vec<String>, AppError> {
        Ok(GradeRepository::new(self.db).distinct_subjects().await?)
    }
}

fn ensure_score_in_range(score: f64) -> Result<(), AppError> {
    if score_in_range(score) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "La nota debe estar entre {:.1} y {:.1}",
            MIN_SCORE, MAX_SCORE
        )))
    }
}
