use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::item;
use crate::types::dto::items::{encode_stat_map, SeedRecord};
use crate::types::internal::{Attribute, AttributeBounds};

/// ItemStore is the read path over the seeded item collection
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find every item whose requirements fit within the given bounds.
    ///
    /// Each present bound contributes one `column <= bound` conjunct; absent
    /// attributes impose no restriction, so empty bounds return the whole
    /// collection. Result order is store-determined and an empty result is a
    /// normal outcome, not an error.
    pub async fn find_items(
        &self,
        bounds: &AttributeBounds,
    ) -> Result<Vec<item::Model>, InternalError> {
        let mut condition = Condition::all();
        for (attribute, bound) in bounds.iter() {
            condition = condition.add(Self::requirement_column(attribute).lte(bound));
        }

        item::Entity::find()
            .filter(condition)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_items", e))
    }

    /// Insert seed records, assigning each a fresh opaque id.
    ///
    /// This is the only write path; it backs the out-of-band seed command.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records inserted
    /// * `Err(InternalError)` - Encoding or database failure
    pub async fn insert_items(&self, records: Vec<SeedRecord>) -> Result<usize, InternalError> {
        if records.is_empty() {
            return Ok(0);
        }

        let count = records.len();
        let mut models = Vec::with_capacity(count);
        for record in records {
            models.push(item::ActiveModel {
                id: Set(Uuid::new_v4().to_string()),
                name: Set(record.name),
                image: Set(record.image),
                description: Set(record.description),
                category: Set(record.category),
                weight: Set(record.weight),
                req_str: Set(record.required_attributes.strength as i32),
                req_dex: Set(record.required_attributes.dexterity as i32),
                req_int: Set(record.required_attributes.intelligence as i32),
                req_fai: Set(record.required_attributes.faith as i32),
                req_arc: Set(record.required_attributes.arcane as i32),
                attack: Set(encode_stat_map("attack", &record.attack)?),
                defence: Set(encode_stat_map("defence", &record.defence)?),
                scales_with: Set(record
                    .scales_with
                    .as_ref()
                    .map(|map| encode_stat_map("scales_with", map))
                    .transpose()?),
            });
        }

        item::Entity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_items", e))?;

        Ok(count)
    }

    fn requirement_column(attribute: Attribute) -> item::Column {
        match attribute {
            Attribute::Strength => item::Column::ReqStr,
            Attribute::Dexterity => item::Column::ReqDex,
            Attribute::Intelligence => item::Column::ReqInt,
            Attribute::Faith => item::Column::ReqFai,
            Attribute::Arcane => item::Column::ReqArc,
        }
    }
}
