use crate::server::{
    data::observation::ObservationRepository,
    model::{observation::ObservationFilter, pagination::PageRequest},
};
use chrono::NaiveDate;
use entity::observation::ObservationType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_since;
mod get_paginated;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
}
