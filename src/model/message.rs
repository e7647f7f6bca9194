use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub emisor_id: i32,
    pub receptor_id: i32,
    pub asunto: String,
    pub cuerpo: String,
    pub fecha: DateTime<Utc>,
    pub leido: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emisor_nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receptor_nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub es_mio: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SendMessageDto {
    /// Must match the caller when present.
    #[serde(rename = "emisorId", alias = "emisor_id")]
    pub emisor_id: Option<i32>,
    #[serde(rename = "receptorId", alias = "receptor_id")]
    pub receptor_id: Option<i32>,
    pub asunto: Option<String>,
    pub cuerpo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConversationDto {
    pub mensajes: Vec<MessageDto>,
    pub usuario: UserDto,
    pub total_mensajes: u64,
}
