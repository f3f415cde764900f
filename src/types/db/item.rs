use sea_orm::entity::prelude::*;

/// One catalog entry. The open-ended stat maps (`attack`, `defence`,
/// `scales_with`) are stored as JSON text and decoded at the DTO boundary.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub category: Option<String>,
    pub weight: f64,

    // Required attribute thresholds, always present and non-negative
    pub req_str: i32,
    pub req_dex: i32,
    pub req_int: i32,
    pub req_fai: i32,
    pub req_arc: i32,

    // JSON-encoded stat maps
    pub attack: String,
    pub defence: String,
    pub scales_with: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
