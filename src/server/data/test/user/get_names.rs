use super::*;

/// Tests resolving display names in one query.
///
/// Verifies that existing IDs map to their names and unknown IDs are left out of
/// the map.
///
/// Expected: Ok with two entries
#[tokio::test]
async fn maps_known_ids_to_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ana = factory::user::UserFactory::new(db).name("Ana").build().await?;
    let luis = factory::user::UserFactory::new(db).name("Luis").build().await?;

    let repo = UserRepository::new(db);
    let names = repo.get_names(vec![ana.id, luis.id, 9999]).await?;

    assert_eq!(names.len(), 2);
    assert_eq!(names.get(&ana.id).map(String::as_str), Some("Ana"));
    assert_eq!(names.get(&luis.id).map(String::as_str), Some("Luis"));
    assert!(!names.contains_key(&9999));

    Ok(())
}

/// Tests that an empty ID list skips the query.
///
/// Expected: Ok(empty map)
#[tokio::test]
async fn returns_empty_map_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(repo.get_names(Vec::new()).await?.is_empty());

    Ok(())
}
