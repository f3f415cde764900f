use std::sync::Arc;

use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};

use crate::errors::CatalogError;
use crate::stores::ItemStore;
use crate::types::dto::items::ItemRecord;
use crate::types::internal::{Attribute, AttributeBounds};

/// Item catalog API endpoints
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
}

impl ItemsApi {
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }
}

/// API tags for catalog endpoints
#[derive(Tags)]
enum ApiTags {
    /// Read-only item catalog
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// Find items whose attribute requirements fit within the given bounds
    ///
    /// Every parameter is an optional non-negative upper threshold; omitted
    /// (or blank) parameters impose no restriction. With no parameters at all
    /// the whole catalog is returned.
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn find_items(
        &self,
        #[oai(name = "Str")] strength: Query<Option<String>>,
        #[oai(name = "Dex")] dexterity: Query<Option<String>>,
        #[oai(name = "Int")] intelligence: Query<Option<String>>,
        #[oai(name = "Fai")] faith: Query<Option<String>>,
        #[oai(name = "Arc")] arcane: Query<Option<String>>,
    ) -> Result<Json<Vec<ItemRecord>>, CatalogError> {
        // Validate at the boundary; malformed bounds never reach the store
        let bounds = AttributeBounds::parse([
            (Attribute::Strength, strength.0.as_deref()),
            (Attribute::Dexterity, dexterity.0.as_deref()),
            (Attribute::Intelligence, intelligence.0.as_deref()),
            (Attribute::Faith, faith.0.as_deref()),
            (Attribute::Arcane, arcane.0.as_deref()),
        ])?;

        let models = self
            .item_store
            .find_items(&bounds)
            .await
            .map_err(CatalogError::from_internal_error)?;

        let mut records = Vec::with_capacity(models.len());
        for model in models {
            records.push(
                ItemRecord::try_from(model).map_err(CatalogError::from_internal_error)?,
            );
        }

        Ok(Json(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    use crate::types::dto::items::{RequiredAttributes, SeedRecord};

    fn seed_record(name: &str, category: &str, requirements: [u32; 5]) -> SeedRecord {
        SeedRecord {
            name: name.to_string(),
            image: format!("https://example.com/{name}.png"),
            description: format!("{name} description"),
            category: Some(category.to_string()),
            weight: 4.5,
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

    async fn setup_test_api() -> ItemsApi {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let store = ItemStore::new(db);
        store
            .insert_items(vec![
                seed_record("Dagger", "Blade", [5, 9, 0, 0, 0]),
                seed_record("Greatsword", "Blade", [20, 10, 0, 0, 0]),
            ])
            .await
            .expect("Failed to seed test items");

        ItemsApi::new(Arc::new(store))
    }

    fn no_bound() -> Query<Option<String>> {
        Query(None)
    }

    fn bound(value: &str) -> Query<Option<String>> {
        Query(Some(value.to_string()))
    }

    #[tokio::test]
    async fn test_find_items_with_str_bound_excludes_heavier_requirements() {
        let api = setup_test_api().await;

        let result = api
            .find_items(bound("10"), no_bound(), no_bound(), no_bound(), no_bound())
            .await;

        let records = result.unwrap().0;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Dagger");
    }

    #[tokio::test]
    async fn test_find_items_without_bounds_returns_all() {
        let api = setup_test_api().await;

        let result = api
            .find_items(no_bound(), no_bound(), no_bound(), no_bound(), no_bound())
            .await;

        let records = result.unwrap().0;
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_find_items_blank_bounds_are_ignored() {
        let api = setup_test_api().await;

        let result = api
            .find_items(bound(""), bound(""), no_bound(), no_bound(), no_bound())
            .await;

        let records = result.unwrap().0;
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_find_items_zero_bound_can_return_empty_set() {
        let api = setup_test_api().await;

        // Both seeded items require some strength, so a 0 bound matches none
        let result = api
            .find_items(bound("0"), no_bound(), no_bound(), no_bound(), no_bound())
            .await;

        let records = result.unwrap().0;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_find_items_records_carry_all_five_requirements() {
        let api = setup_test_api().await;

        let records = api
            .find_items(no_bound(), no_bound(), no_bound(), no_bound(), no_bound())
            .await
            .unwrap()
            .0;

        let greatsword = records
            .iter()
            .find(|record| record.name == "Greatsword")
            .expect("Greatsword should be present");
        assert_eq!(greatsword.required_attributes.strength, 20);
        assert_eq!(greatsword.required_attributes.dexterity, 10);
        assert_eq!(greatsword.required_attributes.arcane, 0);
        assert!(!greatsword.id.is_empty());
    }

    #[tokio::test]
    async fn test_find_items_with_non_numeric_bound_returns_400() {
        let api = setup_test_api().await;

        let result = api
            .find_items(bound("lots"), no_bound(), no_bound(), no_bound(), no_bound())
            .await;

        match result {
            Err(CatalogError::InvalidBound(body)) => {
                assert_eq!(body.0.error, "invalid_bound");
                assert_eq!(body.0.status_code, 400);
                assert!(body.0.message.contains("Str"));
            }
            _ => panic!("Expected InvalidBound error"),
        }
    }

    #[tokio::test]
    async fn test_find_items_with_negative_bound_returns_400() {
        let api = setup_test_api().await;

        let result = api
            .find_items(no_bound(), bound("-3"), no_bound(), no_bound(), no_bound())
            .await;

        assert!(matches!(result, Err(CatalogError::InvalidBound(_))));
    }

    #[tokio::test]
    async fn test_find_items_store_failure_returns_500() {
        // A connection with no schema makes every query fail
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        let api = ItemsApi::new(Arc::new(ItemStore::new(db)));

        let result = api
            .find_items(no_bound(), no_bound(), no_bound(), no_bound(), no_bound())
            .await;

        match result {
            Err(CatalogError::StoreUnavailable(body)) => {
                assert_eq!(body.0.error, "store_unavailable");
                assert_eq!(body.0.status_code, 500);
                assert!(!body.0.message.is_empty());
            }
            _ => panic!("Expected StoreUnavailable error"),
        }
    }
}
