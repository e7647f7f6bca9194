use sea_orm::entity::prelude::*;

/// Direct message between two users. `read` only ever transitions from false to true.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mensajes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "emisor_id")]
    pub sender_id: i32,
    #[sea_orm(column_name = "receptor_id")]
    pub recipient_id: i32,
    #[sea_orm(column_name = "asunto")]
    pub subject: String,
    #[sea_orm(column_name = "cuerpo", column_type = "Text")]
    pub body: String,
    #[sea_orm(column_name = "fecha")]
    pub sent_at: DateTimeUtc,
    #[sea_orm(column_name = "leido")]
    pub read: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SenderId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Sender,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RecipientId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Recipient,
}

impl ActiveModelBehavior for ActiveModel {}
