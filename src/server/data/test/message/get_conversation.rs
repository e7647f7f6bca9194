use super::*;

/// Tests collecting both directions of a conversation, oldest first.
///
/// Verifies that messages with third parties are excluded and that sender and
/// recipient names are resolved.
///
/// Expected: Ok with the two exchanged messages in send order
#[tokio::test]
async fn returns_both_directions_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::user::UserFactory::new(db).name("Docente").build().await?;
    let (_, _, family) = factory::helpers::create_family_with_student(db).await?;
    let other = factory::create_user(db).await?;
    let now = Utc::now();

    let reply = factory::message::MessageFactory::new(db, family.id, teacher.id)
        .sent_at(now)
        .build()
        .await?;
    let opening = factory::message::MessageFactory::new(db, teacher.id, family.id)
        .sent_at(now - Duration::hours(1))
        .build()
        .await?;
    factory::create_message(db, teacher.id, other.id).await?;

    let repo = MessageRepository::new(db);
    let messages = repo.get_conversation(family.id, teacher.id).await?;

    let ids: Vec<_> = messages.iter().map(|m| m.message.id).collect();
    assert_eq!(ids, vec![opening.id, reply.id]);
    assert_eq!(messages[0].sender_name.as_deref(), Some("Docente"));

    Ok(())
}
