use std::fs;
use std::path::Path;

use crate::stores::ItemStore;
use crate::types::dto::items::SeedRecord;

/// Load a JSON item dataset into the store.
///
/// This is the out-of-band path by which records enter the catalog; the API
/// itself has no write surface. The file holds a JSON array in the same
/// shape as the wire format, minus the store-assigned ids.
///
/// # Returns
/// * `Ok(usize)` - Number of records inserted
/// * `Err(...)` - File, JSON or database failure
pub async fn seed_items(
    store: &ItemStore,
    path: &Path,
) -> Result<usize, Box<dyn std::error::Error>> {
    tracing::info!("Loading seed dataset from {}", path.display());

    let raw = fs::read_to_string(path)?;
    let records: Vec<SeedRecord> = serde_json::from_str(&raw)?;

    let count = store.insert_items(records).await?;

    tracing::info!("Inserted {} items", count);

    Ok(count)
}
