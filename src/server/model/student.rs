//! Student domain models and parameters.

use crate::{
    model::student::{CourseStudentDto, StudentDto},
    server::model::course::Course,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub course_id: i32,
}

impl Student {
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            course_id: entity.course_id,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            nombre: self.name,
            curso_id: self.course_id,
            curso: None,
        }
    }
}

/// Student joined with the course it is enrolled in.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentWithCourse {
    pub student: Student,
    pub course: Option<Course>,
}

impl StudentWithCourse {
    pub fn from_entity(
        (student, course): (entity::student::Model, Option<entity::course::Model>),
    ) -> Self {
        Self {
            student: Student::from_entity(student),
            course: course.map(Course::from_entity),
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            curso: self.course.map(Course::into_dto),
            ..self.student.into_dto()
        }
    }

    /// Flat roster row with the course labels inlined.
    pub fn into_course_dto(self) -> CourseStudentDto {
        let (curso_nombre, nivel, letra) = match self.course {
            Some(course) => (course.name, course.level, course.section),
            None => (String::new(), String::new(), String::new()),
        };
        CourseStudentDto {
            id: self.student.id,
            nombre: self.student.name,
            curso_id: self.student.course_id,
            curso_nombre,
            nivel,
            letra,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub name: String,
    pub course_id: i32,
}
