use super::*;

/// Tests flagging an unread message.
///
/// Expected: Ok(Some) with read set and the unread count dropping to zero
#[tokio::test]
async fn marks_message_as_read() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user(db).await?;
    let recipient = factory::create_user(db).await?;
    let message = factory::create_message(db, sender.id, recipient.id).await?;

    let repo = MessageRepository::new(db);
    assert_eq!(repo.count_unread(recipient.id).await?, 1);

    let updated = repo.mark_read(message.id).await?.unwrap();

    assert!(updated.read);
    assert_eq!(updated.body, message.body);
    assert_eq!(repo.count_unread(recipient.id).await?, 0);

    Ok(())
}

/// Tests marking a message that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    assert!(repo.mark_read(7).await?.is_none());

    Ok(())
}
