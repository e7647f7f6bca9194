//! Dashboard aggregates.
//!
//! Both dashboards take `today` from the caller so month boundaries and the 30 day
//! observation window are deterministic.

use chrono::{Datelike, Duration, NaiveDate};
use entity::{attendance::AttendanceStatus, user::Role};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        attendance::AttendanceRepository, course::CourseRepository, grade::GradeRepository,
        message::MessageRepository, observation::ObservationRepository,
        student::StudentRepository, user::UserRepository,
    },
    error::AppError,
    model::dashboard::{ChildSummary, FamilyDashboard, TeacherDashboard, FULL_ATTENDANCE},
    service::task_feed::TaskFeed,
};

/// Courses listed on the teacher dashboard.
const DASHBOARD_COURSES: u64 = 5;
/// Unread messages previewed on the teacher dashboard.
const DASHBOARD_UNREAD: u64 = 3;
/// Trailing window for the family dashboard observation count.
const OBSERVATION_WINDOW_DAYS: i64 = 30;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the teacher dashboard.
    ///
    /// Lists the first courses of the roster and previews the newest unread messages;
    /// statistics are totals over the whole school, not over the previews.
    ///
    /// # Returns
    /// - `Ok(TeacherDashboard)` - Dashboard payload
    /// - `Err(AppError::NotFound)` - Teacher does not exist or is a family account
    pub async fn teacher(
        &self,
        teacher_id: i32,
        task_feed: &dyn TaskFeed,
    ) -> Result<TeacherDashboard, AppError> {
        let teacher = UserRepository::new(self.db).find_by_id(teacher_id).await?;
        if !matches!(teacher, Some(ref t) if t.role != Role::Familia) {
            return Err(AppError::NotFound("Docente no encontrado".to_string()));
        }

        let course_repo = CourseRepository::new(self.db);
        let message_repo = MessageRepository::new(self.db);

        let courses = course_repo.get_summaries(Some(DASHBOARD_COURSES)).await?;
        let unread_messages = message_repo
            .get_unread_for(teacher_id, DASHBOARD_UNREAD)
            .await?;

        Ok(TeacherDashboard {
            courses,
            unread_messages,
            tasks: task_feed.pending_tasks(teacher_id),
            total_courses: course_repo.count().await?,
            unread_count: message_repo.count_unread(teacher_id).await?,
            total_students: StudentRepository::new(self.db).count().await?,
        })
    }

    /// Builds the family dashboard for a `familia` account.
    ///
    /// An account without a linked student, or linked to a student that no longer exists,
    /// gets an empty dashboard.
    ///
    /// # Returns
    /// - `Ok(FamilyDashboard)` - Summaries of the linked children
    /// - `Err(AppError::NotFound)` - Account does not exist or is not a family account
    pub async fn family(&self, family_id: i32, today: NaiveDate) -> Result<FamilyDashboard, AppError> {
        let family = UserRepository::new(self.db)
            .find_by_id(family_id)
            .await?
            .filter(|u| u.role == Role::Familia)
            .ok_or_else(|| AppError::NotFound("Familia no encontrada".to_string()))?;

        let Some(student_id) = family.student_id else {
            return Ok(FamilyDashboard { children: vec![] });
        };

        let Some(student) = StudentRepository::new(self.db)
            .find_with_course(student_id)
            .await?
        else {
            return Ok(FamilyDashboard { children: vec![] });
        };

        let grades = GradeRepository::new(self.db)
            .get_by_student(student_id)
            .await?;
        let grade_count = grades.len() as u64;
        let average = if grades.is_empty() {
            0.0
        } else {
            grades.iter().map(|g| g.score).sum::<f64>() / grades.len() as f64
        };

        let (month_start, next_month_start) = month_bounds(today);
        let marks = AttendanceRepository::new(self.db)
            .get_by_student_between(student_id, month_start, next_month_start)
            .await?;
        let total_days = marks.len() as u64;
        let days_present = marks
            .iter()
            .filter(|m| m.status == AttendanceStatus::Present)
            .count() as u64;
        let attendance_percentage = if total_days == 0 {
            FULL_ATTENDANCE
        } else {
            days_present as f64 / total_days as f64 * 100.0
        };

        let recent_observations = ObservationRepository::new(self.db)
            .count_since(student_id, today - Duration::days(OBSERVATION_WINDOW_DAYS))
            .await?;

        Ok(FamilyDashboard {
            children: vec![ChildSummary {
                student: student.student,
                course: student.course,
                average,
                grade_count,
                attendance_percentage,
                days_present,
                total_days,
                recent_observations,
            }],
        })
    }
}

/// First day of `date`'s month and first day of the following month.
fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).unwrap_or(date);
    let (year, month) = if start.month() == 12 {
        (start.year() + 1, 1)
    } else {
        (start.year(), start.month() + 1)
    };
    let next = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(start + Duration::days(31));

    (start, next)
}
