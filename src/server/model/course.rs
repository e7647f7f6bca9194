//! Course domain models and parameters.

use crate::{
    model::course::{CourseDetailDto, CourseDto, CourseSummaryDto},
    server::model::student::Student,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub level: String,
    pub section: String,
}

impl Course {
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            level: entity.level,
            section: entity.section,
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            nombre: self.name,
            nivel: self.level,
            letra: self.section,
        }
    }

    /// Grade label shown to families, e.g. `7A`.
    pub fn grade_label(&self) -> String {
        format!("{}{}", self.level, self.section)
    }
}

/// Course with its enrolled student count.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    pub course: Course,
    pub student_count: u64,
}

impl CourseSummary {
    pub fn into_dto(self) -> CourseSummaryDto {
        CourseSummaryDto {
            id: self.course.id,
            nombre: self.course.name,
            nivel: self.course.level,
            letra: self.course.section,
            total_estudiantes: self.student_count,
        }
    }
}

/// Course with its full roster.
#[derive(Debug, Clone)]
pub struct CourseDetail {
    pub course: Course,
    pub students: Vec<Student>,
}

impl CourseDetail {
    pub fn into_dto(self) -> CourseDetailDto {
        let total = self.students.len() as u64;
        CourseDetailDto {
            curso: self.course.into_dto(),
            estudiantes: self.students.into_iter().map(Student::into_dto).collect(),
            total_estudiantes: total,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub name: String,
    pub level: String,
    pub section: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCourseParams {
    pub name: Option<String>,
    pub level: Option<String>,
    pub section: Option<String>,
}
