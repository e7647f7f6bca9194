use super::*;
use crate::server::{
    model::message::{ComposeMessageParams, DEFAULT_SUBJECT},
    service::message::MessageService,
};

fn compose(recipient_id: i32) -> ComposeMessageParams {
    ComposeMessageParams {
        sender_id: None,
        recipient_id,
        subject: None,
        body: "¿Podemos reunirnos el jueves?".to_string(),
    }
}

/// Tests sending a message with no subject.
///
/// Expected: Ok with the default subject, unread, names attached
#[tokio::test]
async fn send_defaults_subject() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = as_user(factory::create_user(db).await?);
    let recipient = factory::create_user(db).await?;

    let sent = MessageService::new(db)
        .send(&sender, compose(recipient.id))
        .await?;

    assert_eq!(sent.message.subject, DEFAULT_SUBJECT);
    assert_eq!(sent.message.sender_id, sender.id);
    assert!(!sent.message.read);
    assert_eq!(sent.recipient_name.as_deref(), Some(recipient.name.as_str()));

    Ok(())
}

/// Tests sending as someone else.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn send_refuses_spoofed_sender() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = as_user(factory::create_user(db).await?);
    let victim = factory::create_user(db).await?;
    let recipient = factory::create_user(db).await?;

    let result = MessageService::new(db)
        .send(
            &caller,
            ComposeMessageParams {
                sender_id: Some(victim.id),
                ..compose(recipient.id)
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests sending to oneself and to a missing user.
///
/// Expected: Err(BadRequest) then Err(NotFound)
#[tokio::test]
async fn send_validates_recipient() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = as_user(factory::create_user(db).await?);
    let service = MessageService::new(db);

    let to_self = service.send(&caller, compose(caller.id)).await;
    assert!(matches!(to_self, Err(AppError::BadRequest(_))));

    let to_missing = service.send(&caller, compose(5000)).await;
    assert!(matches!(to_missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that only the recipient can mark a message as read.
///
/// Expected: Err(AccessDenied) for the sender, Ok(read) for the recipient
#[tokio::test]
async fn mark_read_only_by_recipient() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = as_user(factory::create_user(db).await?);
    let recipient = as_user(factory::create_user(db).await?);
    let message = factory::create_message(db, sender.id, recipient.id).await?;

    let service = MessageService::new(db);

    let denied = service.mark_read(&sender, message.id).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let read = service.mark_read(&recipient, message.id).await?;
    assert!(read.read);

    Ok(())
}

/// Tests reading a conversation as an outsider and as an admin.
///
/// Verifies that a third user is refused while an admin sees the thread from the side
/// of the first user.
///
/// Expected: Err(AccessDenied) for the outsider, Ok with 2 messages for the admin
#[tokio::test]
async fn conversation_access_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let outsider = as_user(factory::create_user(db).await?);
    let admin = as_user(factory::user::UserFactory::new(db).admin().build().await?);
    factory::create_message(db, a.id, b.id).await?;
    factory::create_message(db, b.id, a.id).await?;

    let service = MessageService::new(db);

    let denied = service.get_conversation(&outsider, a.id, b.id).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let conversation = service.get_conversation(&admin, a.id, b.id).await?;
    assert_eq!(conversation.viewer_id, a.id);
    assert_eq!(conversation.other.id, b.id);
    assert_eq!(conversation.messages.len(), 2);

    Ok(())
}
