mod common;

use std::collections::HashSet;

use common::{seed_record, setup_test_store};

use armory_backend::types::internal::{Attribute, AttributeBounds};

#[tokio::test]
async fn test_find_items_with_empty_bounds_returns_all_records() {
    let (_db, store) = setup_test_store().await;
    store
        .insert_items(vec![
            seed_record("Dagger", Some("Blade"), [5, 9, 0, 0, 0]),
            seed_record("Greatsword", Some("Blade"), [20, 10, 0, 0, 0]),
            seed_record("Sacred Seal", Some("Seal"), [0, 0, 0, 10, 0]),
        ])
        .await
        .expect("Failed to seed items");

    let found = store
        .find_items(&AttributeBounds::default())
        .await
        .expect("Query failed");

    assert_eq!(found.len(), 3);
}

#[tokio::test]
async fn test_find_items_returns_exactly_the_records_within_every_bound() {
    let (_db, store) = setup_test_store().await;
    store
        .insert_items(vec![
            seed_record("Dagger", Some("Blade"), [5, 9, 0, 0, 0]),
            seed_record("Greatsword", Some("Blade"), [20, 10, 0, 0, 0]),
            seed_record("Staff", Some("Staff"), [6, 0, 18, 0, 0]),
        ])
        .await
        .expect("Failed to seed items");

    let bounds = AttributeBounds::default().with(Attribute::Strength, 10);
    let found = store.find_items(&bounds).await.expect("Query failed");

    let names: HashSet<String> = found.into_iter().map(|model| model.name).collect();
    assert_eq!(
        names,
        HashSet::from(["Dagger".to_string(), "Staff".to_string()])
    );
}

#[tokio::test]
async fn test_find_items_conjoins_multiple_bounds() {
    let (_db, store) = setup_test_store().await;
    store
        .insert_items(vec![
            seed_record("Dagger", Some("Blade"), [5, 9, 0, 0, 0]),
            seed_record("Rapier", Some("Blade"), [7, 17, 0, 0, 0]),
            seed_record("Staff", Some("Staff"), [6, 0, 18, 0, 0]),
        ])
        .await
        .expect("Failed to seed items");

    // Str and Dex both bounded: Rapier fails Dex, Staff fails nothing but
    // Int is unbounded so it still qualifies
    let bounds = AttributeBounds::default()
        .with(Attribute::Strength, 10)
        .with(Attribute::Dexterity, 10);
    let found = store.find_items(&bounds).await.expect("Query failed");

    let names: HashSet<String> = found.into_iter().map(|model| model.name).collect();
    assert_eq!(
        names,
        HashSet::from(["Dagger".to_string(), "Staff".to_string()])
    );
}

#[tokio::test]
async fn test_find_items_unbounded_attribute_imposes_no_restriction() {
    let (_db, store) = setup_test_store().await;
    store
        .insert_items(vec![seed_record(
            "Sacred Seal",
            Some("Seal"),
            [0, 0, 0, 40, 0],
        )])
        .await
        .expect("Failed to seed items");

    // Faith requirement of 40 passes because Faith is not bounded
    let bounds = AttributeBounds::default().with(Attribute::Strength, 10);
    let found = store.find_items(&bounds).await.expect("Query failed");

    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_find_items_with_no_match_returns_empty_not_error() {
    let (_db, store) = setup_test_store().await;
    store
        .insert_items(vec![seed_record(
            "Greatsword",
            Some("Blade"),
            [20, 10, 0, 0, 0],
        )])
        .await
        .expect("Failed to seed items");

    let bounds = AttributeBounds::default().with(Attribute::Strength, 1);
    let found = store.find_items(&bounds).await.expect("Query failed");

    assert!(found.is_empty());
}

#[tokio::test]
async fn test_insert_items_assigns_unique_opaque_ids() {
    let (_db, store) = setup_test_store().await;
    let inserted = store
        .insert_items(vec![
            seed_record("Dagger", Some("Blade"), [5, 9, 0, 0, 0]),
            seed_record("Greatsword", Some("Blade"), [20, 10, 0, 0, 0]),
        ])
        .await
        .expect("Failed to seed items");
    assert_eq!(inserted, 2);

    let found = store
        .find_items(&AttributeBounds::default())
        .await
        .expect("Query failed");

    let ids: HashSet<String> = found.iter().map(|model| model.id.clone()).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.iter().all(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_insert_items_with_empty_dataset_is_a_no_op() {
    let (_db, store) = setup_test_store().await;

    let inserted = store
        .insert_items(Vec::new())
        .await
        .expect("Empty insert should succeed");

    assert_eq!(inserted, 0);
}

#[tokio::test]
async fn test_find_items_against_unmigrated_database_fails() {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    let store = armory_backend::stores::ItemStore::new(db);

    let result = store.find_items(&AttributeBounds::default()).await;

    assert!(result.is_err());
}
