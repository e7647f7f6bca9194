use super::*;

/// Tests paginating all accounts.
///
/// Verifies that the total counts every user while the page only holds `per_page`
/// rows, ordered by name.
///
/// Expected: Ok with 2 of 3 users, total 3
#[tokio::test]
async fn returns_first_page_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Carla").build().await?;
    factory::user::UserFactory::new(db).name("Ana").build().await?;
    factory::user::UserFactory::new(db).name("Beatriz").build().await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_all_paginated(None, PageRequest::new(Some(1), Some(2), 20))
        .await?;

    assert_eq!(total, 3);
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Beatriz"]);

    Ok(())
}

/// Tests filtering the listing by role.
///
/// Verifies that only accounts with the requested role are returned and counted.
///
/// Expected: Ok with the single admin
#[tokio::test]
async fn filters_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db).admin().build().await?;
    factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_all_paginated(Some(Role::Admin), PageRequest::new(None, None, 20))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(users[0].id, admin.id);

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with no items and the real total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_all_paginated(None, PageRequest::new(Some(5), Some(10), 20))
        .await?;

    assert!(users.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
