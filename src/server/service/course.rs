//! Course service: roster listing and course administration.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{course::CourseRepository, student::StudentRepository},
    error::AppError,
    model::course::{
        Course, CourseDetail, CourseSummary, CreateCourseParams, UpdateCourseParams,
    },
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All courses with their enrolment counts, ordered by level then section.
    pub async fn get_summaries(&self) -> Result<Vec<CourseSummary>, AppError> {
        Ok(CourseRepository::new(self.db).get_summaries(None).await?)
    }

    /// Gets a course together with its students ordered by name.
    ///
    /// # Returns
    /// - `Ok(CourseDetail)` - Course and roster
    /// - `Err(AppError::NotFound)` - Course does not exist
    pub async fn get_detail(&self, id: i32) -> Result<CourseDetail, AppError> {
        let course = self.get_by_id(id).await?;

        let students = StudentRepository::new(self.db)
            .get_by_course(id)
            .await?
            .into_iter()
            .map(|s| s.student)
            .collect();

        Ok(CourseDetail { course, students })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Course, AppError> {
        CourseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Curso no encontrado".to_string()))
    }

    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, AppError> {
        let course = CourseRepository::new(self.db).create(params).await?;

        tracing::info!("Created course {} ({})", course.id, course.grade_label());

        Ok(course)
    }

    pub async fn update(&self, id: i32, params: UpdateCourseParams) -> Result<Course, AppError> {
        CourseRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Curso no encontrado".to_string()))
    }

    /// Deletes a course that has no enrolled students.
    ///
    /// The enrolment check and the delete share one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Course deleted
    /// - `Err(AppError::NotFound)` - Course does not exist
    /// - `Err(AppError::Conflict)` - Students are still enrolled
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let course_repo = CourseRepository::new(&txn);

        if course_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Curso no encontrado".to_string()));
        }

        let enrolled = StudentRepository::new(&txn).count_by_course(id).await?;
        if enrolled > 0 {
            return Err(AppError::Conflict(format!(
                "No se puede eliminar. El curso tiene {} estudiantes",
                enrolled
            )));
        }

        course_repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!("Deleted course {}", id);

        Ok(())
    }
}
