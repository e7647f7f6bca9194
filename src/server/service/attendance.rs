//! Attendance service: daily marks per course, batch saving and daily statistics.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::Value;

use crate::server::{
    data::{attendance::AttendanceRepository, course::CourseRepository, student::StudentRepository},
    error::AppError,
    model::{
        attendance::{
            AttendanceEntry, AttendanceFilter, AttendanceRecord, AttendanceStats,
            AttendanceWithStudent,
        },
        grade::BatchOutcome,
        pagination::{Page, PageRequest},
    },
    service::student::{ensure_student_exists, KnownStudents},
};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks recorded for a course on one day, ordered by student name.
    pub async fn get_by_course_and_date(
        &self,
        course_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceWithStudent>, AppError> {
        Ok(AttendanceRepository::new(self.db)
            .get_by_course_and_date(course_id, date)
            .await?)
    }

    pub async fn get_paginated(
        &self,
        filter: AttendanceFilter,
        page: PageRequest,
    ) -> Result<Page<AttendanceWithStudent>, AppError> {
        let (records, total) = AttendanceRepository::new(self.db)
            .get_paginated(filter, page)
            .await?;

        Ok(Page::new(records, total, page))
    }

    /// Full attendance history of one student, newest first.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<AttendanceRecord>, AppError> {
        ensure_student_exists(self.db, student_id).await?;

        Ok(AttendanceRepository::new(self.db)
            .get_by_student(student_id)
            .await?)
    }

    /// Upserts a batch of attendance marks in one transaction.
    ///
    /// Entries missing a field, carrying an unknown status or a bad date, or referencing an
    /// unknown student are skipped. A database error rolls back the whole batch.
    ///
    /// # Returns
    /// - `Ok(BatchOutcome)` - Created, updated and skipped counts
    /// - `Err(AppError::BadRequest)` - Empty batch
    /// - `Err(AppError::DbErr)` - Database error, nothing was saved
    pub async fn save_batch(&self, entries: Vec<Value>) -> Result<BatchOutcome, AppError> {
        if entries.is_empty() {
            return Err(AppError::BadRequest(
                "No hay registros de asistencia para guardar".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let attendance_repo = AttendanceRepository::new(&txn);
        let mut students = KnownStudents::new(&txn);
        let mut outcome = BatchOutcome::default();

        for (index, value) in entries.into_iter().enumerate() {
            let Some(entry) = AttendanceEntry::from_value(value) else {
                tracing::debug!("Skipping malformed attendance entry at index {}", index);
                outcome.skipped += 1;
                continue;
            };

            if !students.contains(entry.student_id).await? {
                tracing::debug!(
                    "Skipping attendance entry at index {} for unknown student {}",
                    index,
                    entry.student_id
                );
                outcome.skipped += 1;
                continue;
            }

            let (_, created) = attendance_repo.upsert(entry).await?;
            if created {
                outcome.created += 1;
            } else {
                outcome.updated += 1;
            }
        }

        txn.commit().await?;

        tracing::info!(
            "Saved attendance batch: {} created, {} updated, {} skipped",
            outcome.created,
            outcome.updated,
            outcome.skipped
        );

        Ok(outcome)
    }

    /// Counts marks per status for a course on one day.
    ///
    /// Pending is the number of enrolled students without a mark, never negative.
    ///
    /// # Returns
    /// - `Ok(AttendanceStats)` - Enrolment total and per-status counts
    /// - `Err(AppError::NotFound)` - Course does not exist
    pub async fn get_stats(&self, course_id: i32, date: NaiveDate) -> Result<AttendanceStats, AppError> {
        if CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Curso no encontrado".to_string()));
        }

        let total_students = StudentRepository::new(self.db)
            .count_by_course(course_id)
            .await?;
        let by_status = AttendanceRepository::new(self.db)
            .count_by_status(course_id, date)
            .await?;

        Ok(AttendanceStats {
            total_students,
            by_status,
        })
    }
}
