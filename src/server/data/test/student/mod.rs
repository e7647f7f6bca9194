use crate::server::{data::student::StudentRepository, model::pagination::PageRequest};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
