use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    pagination::PageRequest,
    student::{CreateStudentParams, Student, StudentWithCourse},
};

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Finds a student together with the course they are enrolled in.
    pub async fn find_with_course(&self, id: i32) -> Result<Option<StudentWithCourse>, DbErr> {
        let result = entity::prelude::Student::find_by_id(id)
            .find_also_related(entity::prelude::Course)
            .one(self.db)
            .await?;

        Ok(result.map(StudentWithCourse::from_entity))
    }

    /// Lists the roster of a course ordered by student name.
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<StudentWithCourse>, DbErr> {
        let results = entity::prelude::Student::find()
            .find_also_related(entity::prelude::Course)
            .filter(entity::student::Column::CourseId.eq(course_id))
            .order_by_asc(entity::student::Column::Name)
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(StudentWithCourse::from_entity)
            .collect())
    }

    /// Returns a page of students ordered by name, optionally restricted to one course.
    ///
    /// # Returns
    /// - `Ok((Vec<StudentWithCourse>, total))` - Students on the page and total matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        course_id: Option<i32>,
        page: PageRequest,
    ) -> Result<(Vec<StudentWithCourse>, u64), DbErr> {
        let mut query = entity::prelude::Student::find().find_also_related(entity::prelude::Course);
        if let Some(course_id) = course_id {
            query = query.filter(entity::student::Column::CourseId.eq(course_id));
        }

        let paginator = query
            .order_by_asc(entity::student::Column::Name)
            .order_by_asc(entity::student::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let results = paginator.fetch_page(page.index()).await?;

        Ok((
            results
                .into_iter()
                .map(StudentWithCourse::from_entity)
                .collect(),
            total,
        ))
    }

    /// Counts students enrolled in a course.
    pub async fn count_by_course(&self, course_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::CourseId.eq(course_id))
            .count(self.db)
            .await
    }

    /// Counts all students.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Student::find().count(self.db).await
    }

    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            name: ActiveValue::Set(params.name),
            course_id: ActiveValue::Set(params.course_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }
}
