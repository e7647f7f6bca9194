//! Student service.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::server::{
    data::{course::CourseRepository, student::StudentRepository},
    error::AppError,
    model::{
        pagination::{Page, PageRequest},
        student::{CreateStudentParams, Student, StudentWithCourse},
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Students enrolled in a course, ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<StudentWithCourse>)` - Roster, empty when the course has no students
    /// - `Err(AppError::NotFound)` - Course does not exist
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<StudentWithCourse>, AppError> {
        if CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Curso no encontrado".to_string()));
        }

        Ok(StudentRepository::new(self.db).get_by_course(course_id).await?)
    }

    pub async fn get_paginated(
        &self,
        course_id: Option<i32>,
        page: PageRequest,
    ) -> Result<Page<StudentWithCourse>, AppError> {
        let (students, total) = StudentRepository::new(self.db)
            .get_paginated(course_id, page)
            .await?;

        Ok(Page::new(students, total, page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<StudentWithCourse, AppError> {
        StudentRepository::new(self.db)
            .find_with_course(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Estudiante no encontrado".to_string()))
    }

    /// Enrols a student in an existing course.
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        if CourseRepository::new(self.db)
            .find_by_id(params.course_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Curso no encontrado".to_string()));
        }

        let student = StudentRepository::new(self.db).create(params).await?;

        tracing::info!("Enrolled student {} in course {}", student.id, student.course_id);

        Ok(student)
    }
}

/// Fails with `NotFound` unless the student exists.
pub async fn ensure_student_exists<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
) -> Result<(), AppError> {
    match StudentRepository::new(db).find_by_id(student_id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound("Estudiante no encontrado".to_string())),
    }
}

/// Remembers which student IDs exist while a batch is processed.
pub struct KnownStudents<'a, C: ConnectionTrait> {
    repo: StudentRepository<'a, C>,
    seen: HashMap<i32, bool>,
}

impl<'a, C: ConnectionTrait> KnownStudents<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            repo: StudentRepository::new(db),
            seen: HashMap::new(),
        }
    }

    pub async fn contains(&mut self, student_id: i32) -> Result<bool, DbErr> {
        if let Some(exists) = self.seen.get(&student_id) {
            return Ok(*exists);
        }

        let exists = self.repo.find_by_id(student_id).await?.is_some();
        self.seen.insert(student_id, exists);

        Ok(exists)
    }
}
