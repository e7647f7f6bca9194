use crate::server::{data::attendance::AttendanceRepository, model::attendance::AttendanceEntry};
use chrono::NaiveDate;
use entity::attendance::AttendanceStatus;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_by_status;
mod get_by_student_between;
mod unique_key;
mod upsert;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}
