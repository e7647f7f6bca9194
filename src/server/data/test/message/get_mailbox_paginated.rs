use super::*;

/// Tests splitting a user's mailbox into received and sent.
///
/// Verifies that each mailbox only holds messages on the matching side and that the
/// full mailbox holds both.
///
/// Expected: received 2, sent 1, all 3
#[tokio::test]
async fn separates_received_and_sent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let peer = factory::create_user(db).await?;
    factory::create_message(db, peer.id, user.id).await?;
    factory::create_message(db, peer.id, user.id).await?;
    factory::create_message(db, user.id, peer.id).await?;

    let repo = MessageRepository::new(db);
    let page = PageRequest::new(None, None, 20);

    let (received, received_total) = repo
        .get_mailbox_paginated(user.id, Mailbox::Received, page)
        .await?;
    let (_, sent_total) = repo.get_mailbox_paginated(user.id, Mailbox::Sent, page).await?;
    let (_, all_total) = repo.get_mailbox_paginated(user.id, Mailbox::All, page).await?;

    assert_eq!(received_total, 2);
    assert!(received.iter().all(|m| m.message.recipient_id == user.id));
    assert_eq!(sent_total, 1);
    assert_eq!(all_total, 3);

    Ok(())
}
