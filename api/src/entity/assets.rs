use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "assets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Category, stored as text and validated against the configured catalog
    #[sea_orm(column_name = "type")]
    pub asset_type: String,
    pub status: String,
    pub asset_code: String,
    pub serial: Option<String>,
    pub department: Option<String>,
    pub assigned_to: Option<String>,
    pub location: Option<String>,
    pub ip_address: Option<String>,
    pub network: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
