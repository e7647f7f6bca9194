use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000003_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(pk_auto(Message::Id))
                    .col(integer(Message::SenderId))
                    .col(integer(Message::RecipientId))
                    .col(string_len(Message::Subject, 100))
                    .col(text(Message::Body))
                    .col(
                        timestamp(Message::SentAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(boolean(Message::Read).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mensajes_emisor_id")
                            .from(Message::Table, Message::SenderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mensajes_receptor_id")
                            .from(Message::Table, Message::RecipientId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mensajes_receptor_leido")
                    .table(Message::Table)
                    .col(Message::RecipientId)
                    .col(Message::Read)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Message {
    #[sea_orm(iden = "mensajes")]
    Table,
    Id,
    #[sea_orm(iden = "emisor_id")]
    SenderId,
    #[sea_orm(iden = "receptor_id")]
    RecipientId,
    #[sea_orm(iden = "asunto")]
    Subject,
    #[sea_orm(iden = "cuerpo")]
    Body,
    #[sea_orm(iden = "fecha")]
    SentAt,
    #[sea_orm(iden = "leido")]
    Read,
}
