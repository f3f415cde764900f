use std::collections::BTreeMap;

use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::errors::InternalError;
use crate::types::db::item;
use crate::types::internal::Attribute;

/// The five required attribute thresholds carried by every item.
///
/// Serialized under the attribute short names so the wire shape matches the
/// seeded dataset (`{"Str": 5, "Dex": 9, ...}`).
#[derive(Object, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequiredAttributes {
    #[oai(rename = "Str")]
    #[serde(rename = "Str", default)]
    pub strength: u32,

    #[oai(rename = "Dex")]
    #[serde(rename = "Dex", default)]
    pub dexterity: u32,

    #[oai(rename = "Int")]
    #[serde(rename = "Int", default)]
    pub intelligence: u32,

    #[oai(rename = "Fai")]
    #[serde(rename = "Fai", default)]
    pub faith: u32,

    #[oai(rename = "Arc")]
    #[serde(rename = "Arc", default)]
    pub arcane: u32,
}

impl RequiredAttributes {
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Intelligence => self.intelligence,
            Attribute::Faith => self.faith,
            Attribute::Arcane => self.arcane,
        }
    }
}

/// One catalog entry as returned by `GET /items`
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Store-assigned opaque identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Image URI
    pub image: String,

    /// Free-text description
    pub description: String,

    /// Grouping key for presentation; absent entries render under
    /// "Uncategorized"
    pub category: Option<String>,

    pub weight: f64,

    /// Attribute thresholds the wielder must meet, all five always present
    pub required_attributes: RequiredAttributes,

    /// Open-ended stat name to value map
    pub attack: BTreeMap<String, f64>,

    /// Open-ended stat name to value map
    pub defence: BTreeMap<String, f64>,

    /// How effectiveness grows per attribute; absent means no scaling section
    /// is rendered for the item
    pub scales_with: Option<BTreeMap<String, f64>>,
}

impl TryFrom<item::Model> for ItemRecord {
    type Error = InternalError;

    fn try_from(model: item::Model) -> Result<Self, InternalError> {
        let attack = parse_stat_map("attack", &model.attack)?;
        let defence = parse_stat_map("defence", &model.defence)?;
        let scales_with = model
            .scales_with
            .as_deref()
            .map(|raw| parse_stat_map("scales_with", raw))
            .transpose()?;

        Ok(Self {
            id: model.id,
            name: model.name,
            image: model.image,
            description: model.description,
            category: model.category,
            weight: model.weight,
            required_attributes: RequiredAttributes {
                strength: model.req_str as u32,
                dexterity: model.req_dex as u32,
                intelligence: model.req_int as u32,
                faith: model.req_fai as u32,
                arcane: model.req_arc as u32,
            },
            attack,
            defence,
            scales_with,
        })
    }
}

/// One record of the out-of-band seed dataset: an `ItemRecord` before the
/// store has assigned it an id
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecord {
    pub name: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub weight: f64,
    pub required_attributes: RequiredAttributes,
    #[serde(default)]
    pub attack: BTreeMap<String, f64>,
    #[serde(default)]
    pub defence: BTreeMap<String, f64>,
    #[serde(default)]
    pub scales_with: Option<BTreeMap<String, f64>>,
}

pub(crate) fn parse_stat_map(
    field: &str,
    raw: &str,
) -> Result<BTreeMap<String, f64>, InternalError> {
    serde_json::from_str(raw).map_err(|e| InternalError::parse(field, e))
}

pub(crate) fn encode_stat_map(
    field: &str,
    map: &BTreeMap<String, f64>,
) -> Result<String, InternalError> {
    serde_json::to_string(map).map_err(|e| InternalError::parse(field, e))
}
