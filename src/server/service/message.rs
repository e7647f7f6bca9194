//! Message service: mailboxes, sending, read receipts and conversations.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{message::MessageRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        message::{
            ComposeMessageParams, Conversation, Mailbox, Message, MessageWithNames,
            SendMessageParams, DEFAULT_SUBJECT,
        },
        pagination::{Page, PageRequest},
        user::User,
    },
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every message sent or received by `user_id`, newest first.
    ///
    /// Only the user themself or an admin may read the listing.
    pub async fn get_for_user(
        &self,
        caller: &User,
        user_id: i32,
    ) -> Result<Vec<MessageWithNames>, AppError> {
        if caller.id != user_id && !caller.is_admin() {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("attempted to read messages of user {}", user_id),
            )
            .into());
        }

        Ok(MessageRepository::new(self.db).get_for_user(user_id).await?)
    }

    /// One page of the caller's mailbox.
    pub async fn get_mailbox(
        &self,
        caller: &User,
        mailbox: Mailbox,
        page: PageRequest,
    ) -> Result<Page<MessageWithNames>, AppError> {
        let (messages, total) = MessageRepository::new(self.db)
            .get_mailbox_paginated(caller.id, mailbox, page)
            .await?;

        Ok(Page::new(messages, total, page))
    }

    /// Sends a message from the caller.
    ///
    /// # Returns
    /// - `Ok(MessageWithNames)` - Stored message, unread
    /// - `Err(AppError::AuthErr(AccessDenied))` - Sender given and not the caller
    /// - `Err(AppError::BadRequest)` - Recipient is the sender
    /// - `Err(AppError::NotFound)` - Recipient does not exist
    pub async fn send(
        &self,
        caller: &User,
        params: ComposeMessageParams,
    ) -> Result<MessageWithNames, AppError> {
        if let Some(sender_id) = params.sender_id {
            if sender_id != caller.id {
                return Err(AuthError::AccessDenied(
                    caller.id,
                    format!("attempted to send a message as user {}", sender_id),
                )
                .into());
            }
        }

        if params.recipient_id == caller.id {
            return Err(AppError::BadRequest(
                "No puedes enviarte mensajes a ti mismo".to_string(),
            ));
        }

        let Some(recipient) = UserRepository::new(self.db)
            .find_by_id(params.recipient_id)
            .await?
        else {
            return Err(AppError::NotFound("Destinatario no encontrado".to_string()));
        };

        let subject = params
            .subject
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());

        let message = MessageRepository::new(self.db)
            .create(
                SendMessageParams {
                    sender_id: caller.id,
                    recipient_id: recipient.id,
                    subject,
                    body: params.body,
                },
                Utc::now(),
            )
            .await?;

        tracing::info!(
            "User {} sent message {} to user {}",
            caller.id,
            message.id,
            recipient.id
        );

        Ok(MessageWithNames {
            message,
            sender_name: Some(caller.name.clone()),
            recipient_name: Some(recipient.name),
        })
    }

    /// Marks a message as read. Only its recipient may do so.
    ///
    /// # Returns
    /// - `Ok(Message)` - Message, now read
    /// - `Err(AppError::NotFound)` - Message does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is not the recipient
    pub async fn mark_read(&self, caller: &User, id: i32) -> Result<Message, AppError> {
        let message_repo = MessageRepository::new(self.db);

        let Some(message) = message_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Mensaje no encontrado".to_string()));
        };

        if message.recipient_id != caller.id {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("attempted to mark message {} addressed to user {}", id, message.recipient_id),
            )
            .into());
        }

        message_repo
            .mark_read(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mensaje no encontrado".to_string()))
    }

    /// Messages between two users, oldest first.
    ///
    /// Participants see the conversation from their own side. An admin who is not a
    /// participant sees it from the side of `user_a`.
    pub async fn get_conversation(
        &self,
        caller: &User,
        user_a: i32,
        user_b: i32,
    ) -> Result<Conversation, AppError> {
        let (viewer_id, other_id) = if caller.id == user_a {
            (user_a, user_b)
        } else if caller.id == user_b {
            (user_b, user_a)
        } else if caller.is_admin() {
            (user_a, user_b)
        } else {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("attempted to read conversation between {} and {}", user_a, user_b),
            )
            .into());
        };

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_id(viewer_id).await?.is_none() {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }
        let Some(other) = user_repo.find_by_id(other_id).await? else {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        };

        let messages = MessageRepository::new(self.db)
            .get_conversation(viewer_id, other_id)
            .await?;

        Ok(Conversation {
            viewer_id,
            other,
            messages,
        })
    }
}
