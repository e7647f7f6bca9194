//! Message factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating messages between two users.
///
/// Defaults: subject `"Asunto {id}"`, body `"Mensaje de prueba"`, sent now, unread.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    sender_id: i32,
    recipient_id: i32,
    subject: String,
    body: String,
    sent_at: DateTime<Utc>,
    read: bool,
}

impl<'a> MessageFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, sender_id: i32, recipient_id: i32) -> Self {
        Self {
            db,
            sender_id,
            recipient_id,
            subject: format!("Asunto {}", next_id()),
            body: "Mensaje de prueba".to_string(),
            sent_at: Utc::now(),
            read: false,
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.sent_at = sent_at;
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            sender_id: ActiveValue::Set(self.sender_id),
            recipient_id: ActiveValue::Set(self.recipient_id),
            subject: ActiveValue::Set(self.subject),
            body: ActiveValue::Set(self.body),
            sent_at: ActiveValue::Set(self.sent_at),
            read: ActiveValue::Set(self.read),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread message with default values.
pub async fn create_message(
    db: &DatabaseConnection,
    sender_id: i32,
    recipient_id: i32,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, sender_id, recipient_id).build().await
}
