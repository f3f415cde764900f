// Test utilities shared across integration tests
// Only compiled when running tests

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use armory_backend::stores::ItemStore;
use armory_backend::types::dto::items::{RequiredAttributes, SeedRecord};

/// Creates an in-memory test database with migrations applied and a store
/// over it
///
/// Returns (db, item_store); callers can discard the raw connection:
/// ```rust
/// let (_db, store) = setup_test_store().await;
/// ```
pub async fn setup_test_store() -> (DatabaseConnection, ItemStore) {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let store = ItemStore::new(db.clone());

    (db, store)
}

/// Build a seed record with the given name, category and the five
/// requirement thresholds in attribute order
pub fn seed_record(name: &str, category: Option<&str>, requirements: [u32; 5]) -> SeedRecord {
    SeedRecord {
        name: name.to_string(),
        image: format!("https://example.com/{name}.png"),
        description: format!("{name} description"),
        category: category.map(str::to_string),
        weight: 6.0,
        required_attributes: RequiredAttributes {
            strength: requirements[0],
            dexterity: requirements[1],
            intelligence: requirements[2],
            faith: requirements[3],
            arcane: requirements[4],
        },
        attack: Default::default(),
        defence: Default::default(),
        scales_with: None,
    }
}
