//! Attendance data repository.
//!
//! A student has at most one mark per calendar day. `upsert` overwrites the status of an
//! existing mark instead of inserting a second one.

use chrono::NaiveDate;
use entity::attendance::AttendanceStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    attendance::{AttendanceEntry, AttendanceFilter, AttendanceRecord, AttendanceWithStudent},
    pagination::PageRequest,
};

pub struct AttendanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_key(
        &self,
        student_id: i32,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, DbErr> {
        let entity = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::StudentId.eq(student_id))
            .filter(entity::attendance::Column::Date.eq(date))
            .one(self.db)
            .await?;

        Ok(entity.map(AttendanceRecord::from_entity))
    }

    /// Marks recorded for a course on one day, ordered by student name.
    pub async fn get_by_course_and_date(
        &self,
        course_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceWithStudent>, DbErr> {
        let results = entity::prelude::Attendance::find()
            .find_also_related(entity::prelude::Student)
            .filter(entity::student::Column::CourseId.eq(course_id))
            .filter(entity::attendance::Column::Date.eq(date))
            .order_by_asc(entity::student::Column::Name)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(AttendanceWithStudent::from_entity)
            .collect())
    }

    /// Returns a page of marks, newest date first.
    pub async fn get_paginated(
        &self,
        filter: AttendanceFilter,
        page: PageRequest,
    ) -> Result<(Vec<AttendanceWithStudent>, u64), DbErr> {
        let mut query =
            entity::prelude::Attendance::find().find_also_related(entity::prelude::Student);
        if let Some(student_id) = filter.student_id {
            query = query.filter(entity::attendance::Column::StudentId.eq(student_id));
        }
        if let Some(date) = filter.date {
            query = query.filter(entity::attendance::Column::Date.eq(date));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::attendance::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::attendance::Column::Date)
            .order_by_asc(entity::student::Column::Name)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let results = paginator.fetch_page(page.index()).await?;

        Ok((
            results
                .into_iter()
                .map(AttendanceWithStudent::from_entity)
                .collect(),
            total,
        ))
    }

    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<AttendanceRecord>, DbErr> {
        let entities = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::StudentId.eq(student_id))
            .order_by_desc(entity::attendance::Column::Date)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(AttendanceRecord::from_entity).collect())
    }

    /// Marks of a student with `from <= date < until`.
    pub async fn get_by_student_between(
        &self,
        student_id: i32,
        from: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, DbErr> {
        let entities = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::StudentId.eq(student_id))
            .filter(entity::attendance::Column::Date.gte(from))
            .filter(entity::attendance::Column::Date.lt(until))
            .order_by_asc(entity::attendance::Column::Date)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(AttendanceRecord::from_entity).collect())
    }

    /// Inserts a mark or replaces the status of the existing one for the same day.
    ///
    /// # Returns
    /// - `Ok((AttendanceRecord, true))` - A new mark was inserted
    /// - `Ok((AttendanceRecord, false))` - An existing mark was updated
    /// - `Err(DbErr)` - Database error
    pub async fn upsert(&self, entry: AttendanceEntry) -> Result<(AttendanceRecord, bool), DbErr> {
        match self.find_by_key(entry.student_id, entry.date).await? {
            Some(existing) => {
                let updated = entity::attendance::ActiveModel {
                    id: ActiveValue::Unchanged(existing.id),
                    status: ActiveValue::Set(entry.status),
                    ..Default::default()
                }
                .update(self.db)
                .await?;

                Ok((AttendanceRecord::from_entity(updated), false))
            }
            None => {
                let inserted = entity::attendance::ActiveModel {
                    student_id: ActiveValue::Set(entry.student_id),
                    date: ActiveValue::Set(entry.date),
                    status: ActiveValue::Set(entry.status),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;

                Ok((AttendanceRecord::from_entity(inserted), true))
            }
        }
    }

    /// Number of marks per status for a course on one day. Statuses with no marks are absent
    /// from the result.
    pub async fn count_by_status(
        &self,
        course_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<(AttendanceStatus, u64)>, DbErr> {
        let rows: Vec<(AttendanceStatus, i64)> = entity::prelude::Attendance::find()
            .select_only()
            .column(entity::attendance::Column::Status)
            .column_as(entity::attendance::Column::Id.count(), "total")
            .join(JoinType::InnerJoin, entity::attendance::Relation::Student.def())
            .filter(entity::student::Column::CourseId.eq(course_id))
            .filter(entity::attendance::Column::Date.eq(date))
            .group_by(entity::attendance::Column::Status)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts: Vec<(AttendanceStatus, u64)> = rows
            .into_iter()
            .map(|(status, total)| (status, total.max(0) as u64))
            .collect();
        counts.sort_by_key(|(status, _)| *status);

        Ok(counts)
    }
}
