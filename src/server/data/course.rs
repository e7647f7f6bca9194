//! Course data repository.
//!
//! Besides plain CRUD, produces the roster listing: every course with the number of enrolled
//! students, computed in one grouped outer join so empty courses report zero.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::model::course::{Course, CourseSummary, CreateCourseParams, UpdateCourseParams};

type CourseCountRow = (i32, String, String, String, i64);

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a course by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Lists courses with their student counts, ordered by level then section.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of courses to return, `None` for all
    pub async fn get_summaries(&self, limit: Option<u64>) -> Result<Vec<CourseSummary>, DbErr> {
        let mut query = Self::summary_query();
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let rows: Vec<CourseCountRow> = query.into_tuple().all(self.db).await?;

        Ok(rows.into_iter().map(summary_from_row).collect())
    }

    /// Counts all courses.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Course::find().count(self.db).await
    }

    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, DbErr> {
        let entity = entity::course::ActiveModel {
            name: ActiveValue::Set(params.name),
            level: ActiveValue::Set(params.level),
            section: ActiveValue::Set(params.section),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Updated course
    /// - `Ok(None)` - Course not found
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCourseParams,
    ) -> Result<Option<Course>, DbErr> {
        let Some(existing) = entity::prelude::Course::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::course::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(level) = params.level {
            active.level = ActiveValue::Set(level);
        }
        if let Some(section) = params.section {
            active.section = ActiveValue::Set(section);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Course::from_entity(entity)))
    }

    /// Deletes a course.
    ///
    /// Callers must make sure no student is enrolled first.
    ///
    /// # Returns
    /// - `Ok(true)` - Course deleted
    /// - `Ok(false)` - Course not found
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    fn summary_query() -> Select<entity::course::Entity> {
        use entity::course::Column;

        entity::prelude::Course::find()
            .select_only()
            .column(Column::Id)
            .column(Column::Name)
            .column(Column::Level)
            .column(Column::Section)
            .column_as(entity::student::Column::Id.count(), "student_count")
            .join(JoinType::LeftJoin, entity::course::Relation::Student.def())
            .group_by(Column::Id)
            .group_by(Column::Name)
            .group_by(Column::Level)
            .group_by(Column::Section)
            .order_by_asc(Column::Level)
            .order_by_asc(Column::Section)
            .order_by_asc(Column::Id)
    }
}

fn summary_from_row((id, name, level, section, count): CourseCountRow) -> CourseSummary {
    CourseSummary {
        course: Course {
            id,
            name,
            level,
            section,
        },
        student_count: count.max(0) as u64,
    }
}
