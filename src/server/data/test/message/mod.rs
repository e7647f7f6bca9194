use crate::server::{
    data::message::MessageRepository,
    model::{message::Mailbox, pagination::PageRequest},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_conversation;
mod get_mailbox_paginated;
mod mark_read;
