use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PaginatedDto},
        message::{ConversationDto, MessageDto, SendMessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            message::{ComposeMessageParams, Mailbox},
            pagination::PageRequest,
        },
        service::message::MessageService,
        state::AppState,
        util::parse::required_text,
    },
};

pub static MESSAGE_TAG: &str = "message";

const DEFAULT_PER_PAGE: u64 = 20;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MailboxQuery {
    /// recibidos, enviados or todos (default)
    pub tipo: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// Page through the caller's mailbox, newest first.
#[utoipa::path(
    get,
    path = "/api/mensajes",
    tag = MESSAGE_TAG,
    params(MailboxQuery),
    responses(
        (status = 200, description = "Page of messages", body = ApiResponse<PaginatedDto<MessageDto>>),
        (status = 400, description = "Unknown mailbox", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_mailbox(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<MailboxQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let mailbox = Mailbox::parse(query.tipo.as_deref())?;
    let page = PageRequest::new(query.page, query.per_page, DEFAULT_PER_PAGE);

    let messages = MessageService::new(&state.db)
        .get_mailbox(&caller, mailbox, page)
        .await?;
    let viewer_id = caller.id;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            messages.into_dto(|m| m.into_dto_for(viewer_id)),
        )),
    ))
}

/// All messages sent or received by a user, newest first, with sender and recipient names.
///
/// # Access Control
/// - The user themself, or `admin`
#[utoipa::path(
    get,
    path = "/api/mensajes/{usuario_id}",
    tag = MESSAGE_TAG,
    params(("usuario_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Messages", body = ApiResponse<Vec<MessageDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the user or an admin", body = ErrorDto)
    ),
)]
pub async fn get_user_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let messages = MessageService::new(&state.db)
        .get_for_user(&caller, user_id)
        .await?;
    let dto: Vec<MessageDto> = messages
        .into_iter()
        .map(|m| m.into_dto_for(user_id))
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

/// Send a message from the caller.
///
/// `emisorId` may be omitted; when present it must be the caller. `asunto` defaults to
/// "Sin asunto".
///
/// # Returns
/// - `201 Created` - Message stored unread
/// - `400 Bad Request` - Missing recipient or body, or recipient is the caller
/// - `403 Forbidden` - `emisorId` is not the caller
/// - `404 Not Found` - Recipient not found
#[utoipa::path(
    post,
    path = "/api/mensajes/enviar",
    tag = MESSAGE_TAG,
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = ApiResponse<MessageDto>),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Sender is not the caller", body = ErrorDto),
        (status = 404, description = "Recipient not found", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let params = ComposeMessageParams {
        sender_id: payload.emisor_id,
        recipient_id: payload
            .receptor_id
            .ok_or_else(|| AppError::BadRequest("El campo receptorId es requerido".to_string()))?,
        subject: payload.asunto,
        body: required_text(payload.cuerpo, "cuerpo")?,
    };

    let message = MessageService::new(&state.db)
        .send(&caller, params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(message.into_dto()).with_message("Mensaje enviado correctamente")),
    ))
}

/// Mark a message as read.
///
/// # Access Control
/// - The recipient only
#[utoipa::path(
    put,
    path = "/api/mensajes/marcar-leido/{id}",
    tag = MESSAGE_TAG,
    params(("id" = i32, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Message marked as read", body = ApiResponse<MessageDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the recipient", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto)
    ),
)]
pub async fn mark_message_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let message = MessageService::new(&state.db)
        .mark_read(&caller, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(message.into_dto()).with_message("Mensaje marcado como leído")),
    ))
}

/// Messages between two users, oldest first, each flagged with whether the viewer sent it.
///
/// # Access Control
/// - Either participant, or `admin`
#[utoipa::path(
    get,
    path = "/api/conversacion/{usuario1}/{usuario2}",
    tag = MESSAGE_TAG,
    params(
        ("usuario1" = i32, Path, description = "First participant"),
        ("usuario2" = i32, Path, description = "Second participant")
    ),
    responses(
        (status = 200, description = "Conversation", body = ApiResponse<ConversationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_conversation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((user_a, user_b)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let conversation = MessageService::new(&state.db)
        .get_conversation(&caller, user_a, user_b)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(conversation.into_dto()))))
}
