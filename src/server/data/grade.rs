//! Grade data repository.
//!
//! Grades are keyed naturally by `(student, subject, period)`. `upsert` resolves that key
//! before writing, so callers running it inside a transaction never create duplicates.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    grade::{Grade, GradeEntry, GradeFilter, GradeWithStudent, UpdateGradeParams},
    pagination::PageRequest,
};

pub struct GradeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GradeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Grade>, DbErr> {
        let entity = entity::prelude::Grade::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Grade::from_entity))
    }

    /// Finds the grade stored under a natural key.
    pub async fn find_by_key(
        &self,
        student_id: i32,
        subject: &str,
        period: &str,
    ) -> Result<Option<Grade>, DbErr> {
        let entity = entity::prelude::Grade::find()
            .filter(entity::grade::Column::StudentId.eq(student_id))
            .filter(entity::grade::Column::Subject.eq(subject))
            .filter(entity::grade::Column::Period.eq(period))
            .one(self.db)
            .await?;

        Ok(entity.map(Grade::from_entity))
    }

    /// Grades of every student in a course, optionally narrowed to a subject and period,
    /// ordered by student name.
    pub async fn search_by_course(
        &self,
        course_id: i32,
        subject: Option<&str>,
        period: Option<&str>,
    ) -> Result<Vec<GradeWithStudent>, DbErr> {
        let mut query = entity::prelude::Grade::find()
            .find_also_related(entity::prelude::Student)
            .filter(entity::student::Column::CourseId.eq(course_id));
        if let Some(subject) = subject {
            query = query.filter(entity::grade::Column::Subject.eq(subject));
        }
        if let Some(period) = period {
            query = query.filter(entity::grade::Column::Period.eq(period));
        }

        let results = query
            .order_by_asc(entity::student::Column::Name)
            .order_by_asc(entity::grade::Column::Subject)
            .order_by_asc(entity::grade::Column::Id)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(GradeWithStudent::from_entity)
            .collect())
    }

    /// Returns a page of grades, newest first.
    ///
    /// # Returns
    /// - `Ok((Vec<GradeWithStudent>, total))` - Grades on the page and total matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: GradeFilter,
        page: PageRequest,
    ) -> Result<(Vec<GradeWithStudent>, u64), DbErr> {
        let mut query = entity::prelude::Grade::find().find_also_related(entity::prelude::Student);
        if let Some(student_id) = filter.student_id {
            query = query.filter(entity::grade::Column::StudentId.eq(student_id));
        }
        if let Some(subject) = filter.subject {
            query = query.filter(entity::grade::Column::Subject.eq(subject));
        }
        if let Some(period) = filter.period {
            query = query.filter(entity::grade::Column::Period.eq(period));
        }

        let paginator = query
            .order_by_desc(entity::grade::Column::RecordedAt)
            .order_by_desc(entity::grade::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let results = paginator.fetch_page(page.index()).await?;

        Ok((
            results
                .into_iter()
                .map(GradeWithStudent::from_entity)
                .collect(),
            total,
        ))
    }

    /// All grades of one student, newest first then by subject.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<Grade>, DbErr> {
        let entities = entity::prelude::Grade::find()
            .filter(entity::grade::Column::StudentId.eq(student_id))
            .order_by_desc(entity::grade::Column::RecordedAt)
            .order_by_asc(entity::grade::Column::Subject)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Grade::from_entity).collect())
    }

    pub async fn create(&self, entry: GradeEntry, recorded_at: DateTime<Utc>) -> Result<Grade, DbErr> {
        let entity = entity::grade::ActiveModel {
            student_id: ActiveValue::Set(entry.student_id),
            subject: ActiveValue::Set(entry.subject),
            period: ActiveValue::Set(entry.period),
            score: ActiveValue::Set(entry.score),
            recorded_at: ActiveValue::Set(recorded_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Grade::from_entity(entity))
    }

    /// Applies a partial update and refreshes the recorded timestamp.
    ///
    /// # Returns
    /// - `Ok(Some(Grade))` - Updated grade
    /// - `Ok(None)` - Grade not found
    pub async fn update(
        &self,
        id: i32,
        params: UpdateGradeParams,
        recorded_at: DateTime<Utc>,
    ) -> Result<Option<Grade>, DbErr> {
        let Some(existing) = entity::prelude::Grade::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::grade::ActiveModel = existing.into();
        if let Some(subject) = params.subject {
            active.subject = ActiveValue::Set(subject);
        }
        if let Some(period) = params.period {
            active.period = ActiveValue::Set(period);
        }
        if let Some(score) = params.score {
            active.score = ActiveValue::Set(score);
        }
        active.recorded_at = ActiveValue::Set(recorded_at);

        let entity = active.update(self.db).await?;

        Ok(Some(Grade::from_entity(entity)))
    }

    /// Inserts a grade or overwrites the score of the one stored under the same key.
    ///
    /// # Returns
    /// - `Ok((Grade, true))` - A new grade was inserted
    /// - `Ok((Grade, false))` - An existing grade was updated
    /// - `Err(DbErr)` - Database error
    pub async fn upsert(
        &self,
        entry: GradeEntry,
        recorded_at: DateTime<Utc>,
    ) -> Result<(Grade, bool), DbErr> {
        let existing = self
            .find_by_key(entry.student_id, &entry.subject, &entry.period)
            .await?;

        match existing {
            Some(grade) => {
                let updated = entity::grade::ActiveModel {
                    id: ActiveValue::Unchanged(grade.id),
                    score: ActiveValue::Set(entry.score),
                    recorded_at: ActiveValue::Set(recorded_at),
                    ..Default::default()
                }
                .update(self.db)
                .await?;

                Ok((Grade::from_entity(updated), false))
            }
            None => Ok((self.create(entry, recorded_at).await?, true)),
        }
    }

    /// Sorted distinct period labels.
    pub async fn distinct_periods(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Grade::find()
            .select_only()
            .column(entity::grade::Column::Period)
            .distinct()
            .order_by_asc(entity::grade::Column::Period)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Sorted distinct subject names.
    pub async fn distinct_subjects(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Grade::find()
            .select_only()
            .column(entity::grade::Column::Subject)
            .distinct()
            .order_by_asc(entity::grade::Column::Subject)
            .into_tuple()
            .all(self.db)
            .await
    }
}
