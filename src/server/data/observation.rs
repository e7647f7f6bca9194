//! Observation data repository.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::user::UserRepository,
    model::{
        observation::{
            CreateObservationParams, Observation, ObservationFilter, ObservationWithNames,
            UpdateObservationParams,
        },
        pagination::PageRequest,
    },
};

type ObservationRow = (entity::observation::Model, Option<entity::student::Model>);

pub struct ObservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ObservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Observation>, DbErr> {
        let entity = entity::prelude::Observation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Observation::from_entity))
    }

    /// Finds an observation together with the student and author names.
    pub async fn find_with_names(&self, id: i32) -> Result<Option<ObservationWithNames>, DbErr> {
        let row = entity::prelude::Observation::find_by_id(id)
            .find_also_related(entity::prelude::Student)
            .one(self.db)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(self.attach_teacher_names(vec![row]).await?.pop())
    }

    /// Observations about students of one course, newest first.
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<ObservationWithNames>, DbErr> {
        let rows = entity::prelude::Observation::find()
            .find_also_related(entity::prelude::Student)
            .filter(entity::student::Column::CourseId.eq(course_id))
            .order_by_desc(entity::observation::Column::Date)
            .order_by_desc(entity::observation::Column::Id)
            .all(self.db)
            .await?;

        self.attach_teacher_names(rows).await
    }

    /// Observations about one student, newest first.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<ObservationWithNames>, DbErr> {
        let rows = entity::prelude::Observation::find()
            .find_also_related(entity::prelude::Student)
            .filter(entity::observation::Column::StudentId.eq(student_id))
            .order_by_desc(entity::observation::Column::Date)
            .order_by_desc(entity::observation::Column::Id)
            .all(self.db)
            .await?;

        self.attach_teacher_names(rows).await
    }

    /// Returns a page of observations, newest first.
    ///
    /// `from` and `to` are both inclusive.
    pub async fn get_paginated(
        &self,
        filter: ObservationFilter,
        page: PageRequest,
    ) -> Result<(Vec<ObservationWithNames>, u64), DbErr> {
        let mut query =
            entity::prelude::Observation::find().find_also_related(entity::prelude::Student);
        if let Some(student_id) = filter.student_id {
            query = query.filter(entity::observation::Column::StudentId.eq(student_id));
        }
        if let Some(kind) = filter.kind {
            query = query.filter(entity::observation::Column::Kind.eq(kind));
        }
        if let Some(from) = filter.from {
            query = query.filter(entity::observation::Column::Date.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(entity::observation::Column::Date.lte(to));
        }

        let paginator = query
            .order_by_desc(entity::observation::Column::Date)
            .order_by_desc(entity::observation::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.index()).await?;

        Ok((self.attach_teacher_names(rows).await?, total))
    }

    /// Counts observations about a student dated on or after `since`.
    pub async fn count_since(&self, student_id: i32, since: NaiveDate) -> Result<u64, DbErr> {
        entity::prelude::Observation::find()
            .filter(entity::observation::Column::StudentId.eq(student_id))
            .filter(entity::observation::Column::Date.gte(since))
            .count(self.db)
            .await
    }

    pub async fn create(&self, params: CreateObservationParams) -> Result<Observation, DbErr> {
        let entity = entity::observation::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            teacher_id: ActiveValue::Set(params.teacher_id),
            date: ActiveValue::Set(params.date),
            kind: ActiveValue::Set(params.kind),
            detail: ActiveValue::Set(params.detail),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Observation::from_entity(entity))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Observation))` - Updated observation
    /// - `Ok(None)` - Observation not found
    pub async fn update(
        &self,
        id: i32,
        params: UpdateObservationParams,
    ) -> Result<Option<Observation>, DbErr> {
        let Some(existing) = entity::prelude::Observation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::observation::ActiveModel = existing.into();
        if let Some(date) = params.date {
            active.date = ActiveValue::Set(date);
        }
        if let Some(kind) = params.kind {
            active.kind = ActiveValue::Set(kind);
        }
        if let Some(detail) = params.detail {
            active.detail = ActiveValue::Set(detail);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Observation::from_entity(entity)))
    }

    async fn attach_teacher_names(
        &self,
        rows: Vec<ObservationRow>,
    ) -> Result<Vec<ObservationWithNames>, DbErr> {
        let mut teacher_ids: Vec<i32> = rows.iter().map(|(o, _)| o.teacher_id).collect();
        teacher_ids.sort_unstable();
        teacher_ids.dedup();

        let names = UserRepository::new(self.db).get_names(teacher_ids).await?;

        Ok(rows
            .into_iter()
            .map(|(observation, student)| ObservationWithNames {
                teacher_name: names.get(&observation.teacher_id).cloned(),
                student_name: student.map(|s| s.name),
                observation: Observation::from_entity(observation),
            })
            .collect())
    }
}
