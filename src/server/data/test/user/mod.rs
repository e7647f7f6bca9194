use crate::server::{data::user::UserRepository, model::pagination::PageRequest};
use entity::user::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod get_all_paginated;
mod get_names;
