//! Message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::message::{ConversationDto, MessageDto},
    server::{error::AppError, model::user::User},
};

/// Subject used when the sender leaves it blank.
pub const DEFAULT_SUBJECT: &str = "Sin asunto";

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub sender_id: i32,
    pub recipient_id: i32,
    pub subject: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            sender_id: entity.sender_id,
            recipient_id: entity.recipient_id,
            subject: entity.subject,
            body: entity.body,
            sent_at: entity.sent_at,
            read: entity.read,
        }
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            emisor_id: self.sender_id,
            receptor_id: self.recipient_id,
            asunto: self.subject,
            cuerpo: self.body,
            fecha: self.sent_at,
            leido: self.read,
            emisor_nombre: None,
            receptor_nombre: None,
            es_mio: None,
        }
    }
}

/// Message enriched with participant names.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageWithNames {
    pub message: Message,
    pub sender_name: Option<String>,
    pub recipient_name: Option<String>,
}

impl MessageWithNames {
    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            emisor_nombre: self.sender_name,
            receptor_nombre: self.recipient_name,
            ..self.message.into_dto()
        }
    }

    /// Same as `into_dto`, flagging whether `viewer_id` sent the message.
    pub fn into_dto_for(self, viewer_id: i32) -> MessageDto {
        let mine = self.message.sender_id == viewer_id;
        MessageDto {
            es_mio: Some(mine),
            ..self.into_dto()
        }
    }
}

#[derive(Debug, Clone)]
pub struct SendMessageParams {
    pub sender_id: i32,
    pub recipient_id: i32,
    pub subject: String,
    pub body: String,
}

/// Which side of a user's mailbox to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mailbox {
    #[default]
    All,
    Received,
    Sent,
}

impl Mailbox {
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::trim) {
            None | Some("") | Some("todos") => Ok(Self::All),
            Some("recibidos") => Ok(Self::Received),
            Some("enviados") => Ok(Self::Sent),
            Some(other) => Err(AppError::BadRequest(format!(
                "Tipo de bandeja inválido '{}'. Valores permitidos: recibidos, enviados, todos",
                other
            ))),
        }
    }
}

/// Thread between the viewer and another user, oldest message first.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub viewer_id: i32,
    pub other: User,
    pub messages: Vec<MessageWithNames>,
}

impl Conversation {
    pub fn into_dto(self) -> ConversationDto {
        let viewer_id = self.viewer_id;
        let total = self.messages.len() as u64;
        ConversationDto {
            mensajes: self
                .messages
                .into_iter()
                .map(|m| m.into_dto_for(viewer_id))
                .collect(),
            usuario: self.other.into_dto(),
            total_mensajes: total,
        }
    }
}

/// Message as submitted by a caller. The sender must be the caller when given.
#[derive(Debug, Clone)]
pub struct ComposeMessageParams {
    pub sender_id: Option<i32>,
    pub recipient_id: i32,
    pub subject: Option<String>,
    pub body: String,
}
