use crate::server::{data::grade::GradeRepository, model::grade::GradeEntry};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod distinct_periods;
mod search_by_course;
mod upsert;

fn entry(student_id: i32, subject: &str, period: &str, score: f64) -> GradeEntry {
    GradeEntry {
        student_id,
        subject: subject.to_string(),
        period: period.to_string(),
        score,
    }
}
