//! Message data repository.
//!
//! Sender and recipient names are resolved in a second query through
//! [`UserRepository::get_names`] since both columns reference the same table.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::user::UserRepository,
    model::{
        message::{Mailbox, Message, MessageWithNames, SendMessageParams},
        pagination::PageRequest,
    },
};

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Message>, DbErr> {
        let entity = entity::prelude::Message::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Message::from_entity))
    }

    /// Every message sent or received by a user, newest first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<MessageWithNames>, DbErr> {
        let entities = entity::prelude::Message::find()
            .filter(mailbox_condition(user_id, Mailbox::All))
            .order_by_desc(entity::message::Column::SentAt)
            .order_by_desc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        self.attach_names(entities).await
    }

    /// Returns a page of a user's mailbox, newest first.
    ///
    /// # Returns
    /// - `Ok((Vec<MessageWithNames>, total))` - Messages on the page and total in the mailbox
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_mailbox_paginated(
        &self,
        user_id: i32,
        mailbox: Mailbox,
        page: PageRequest,
    ) -> Result<(Vec<MessageWithNames>, u64), DbErr> {
        let paginator = entity::prelude::Message::find()
            .filter(mailbox_condition(user_id, mailbox))
            .order_by_desc(entity::message::Column::SentAt)
            .order_by_desc(entity::message::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;

        Ok((self.attach_names(entities).await?, total))
    }

    /// Messages exchanged between two users in either direction, oldest first.
    pub async fn get_conversation(
        &self,
        user_a: i32,
        user_b: i32,
    ) -> Result<Vec<MessageWithNames>, DbErr> {
        let a_to_b = Condition::all()
            .add(entity::message::Column::SenderId.eq(user_a))
            .add(entity::message::Column::RecipientId.eq(user_b));
        let b_to_a = Condition::all()
            .add(entity::message::Column::SenderId.eq(user_b))
            .add(entity::message::Column::RecipientId.eq(user_a));

        let entities = entity::prelude::Message::find()
            .filter(Condition::any().add(a_to_b).add(b_to_a))
            .order_by_asc(entity::message::Column::SentAt)
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        self.attach_names(entities).await
    }

    /// Most recent unread messages addressed to a user.
    pub async fn get_unread_for(
        &self,
        recipient_id: i32,
        limit: u64,
    ) -> Result<Vec<MessageWithNames>, DbErr> {
        let entities = entity::prelude::Message::find()
            .filter(entity::message::Column::RecipientId.eq(recipient_id))
            .filter(entity::message::Column::Read.eq(false))
            .order_by_desc(entity::message::Column::SentAt)
            .order_by_desc(entity::message::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.attach_names(entities).await
    }

    pub async fn count_unread(&self, recipient_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::RecipientId.eq(recipient_id))
            .filter(entity::message::Column::Read.eq(false))
            .count(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: SendMessageParams,
        sent_at: DateTime<Utc>,
    ) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            sender_id: ActiveValue::Set(params.sender_id),
            recipient_id: ActiveValue::Set(params.recipient_id),
            subject: ActiveValue::Set(params.subject),
            body: ActiveValue::Set(params.body),
            sent_at: ActiveValue::Set(sent_at),
            read: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    /// Flags a message as read. Marking an already read message is a no-op.
    ///
    /// # Returns
    /// - `Ok(Some(Message))` - Message after the update
    /// - `Ok(None)` - Message not found
    pub async fn mark_read(&self, id: i32) -> Result<Option<Message>, DbErr> {
        let Some(existing) = entity::prelude::Message::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if existing.read {
            return Ok(Some(Message::from_entity(existing)));
        }

        let mut active: entity::message::ActiveModel = existing.into();
        active.read = ActiveValue::Set(true);
        let entity = active.update(self.db).await?;

        Ok(Some(Message::from_entity(entity)))
    }

    async fn attach_names(
        &self,
        entities: Vec<entity::message::Model>,
    ) -> Result<Vec<MessageWithNames>, DbErr> {
        let mut user_ids: Vec<i32> = entities
            .iter()
            .flat_map(|m| [m.sender_id, m.recipient_id])
            .collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let names = UserRepository::new(self.db).get_names(user_ids).await?;

        Ok(entities
            .into_iter()
            .map(|m| MessageWithNames {
                sender_name: names.get(&m.sender_id).cloned(),
                recipient_name: names.get(&m.recipient_id).cloned(),
                message: Message::from_entity(m),
            })
            .collect())
    }
}

fn mailbox_condition(user_id: i32, mailbox: Mailbox) -> Condition {
    match mailbox {
        Mailbox::Received => Condition::all().add(entity::message::Column::RecipientId.eq(user_id)),
        Mailbox::Sent => Condition::all().add(entity::message::Column::SenderId.eq(user_id)),
        Mailbox::All => Condition::any()
            .add(entity::message::Column::SenderId.eq(user_id))
            .add(entity::message::Column::RecipientId.eq(user_id)),
    }
}
