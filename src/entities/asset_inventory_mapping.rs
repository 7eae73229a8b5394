use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum DeploymentStatus {
    #[sea_orm(num_value = 0)]
    Deployed,
    #[sea_orm(num_value = 1)]
    Returned,
    #[sea_orm(num_value = 2)]
    Consumed,
}

/// Inventory deployed onto an asset (e.g. RAM fitted to a workstation).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "asset_inventory_mappings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub asset_id: i32,
    pub inventory_item_id: i32,
    pub quantity: i32,
    pub status: DeploymentStatus,
    pub deployed_at: DateTime<Utc>,
    pub deployed_by_user_id: Option<String>,
    pub returned_at: Option<DateTime<Utc>>,
    pub returned_by_user_id: Option<String>,
    pub return_reason: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::asset::Entity",
        from = "Column::AssetId",
        to = "super::asset::Column::Id",
        on_delete = "Cascade"
    )]
    Asset,
    #[sea_orm(
        belongs_to = "super::inventory_item::Entity",
        from = "Column::InventoryItemId",
        to = "super::inventory_item::Column::Id",
        on_delete = "Restrict"
    )]
    InventoryItem,
    #[sea_orm(
        belongs_to = "super::identity::user::Entity",
        from = "Column::DeployedByUserId",
        to = "super::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    DeployedBy,
    #[sea_orm(
        belongs_to = "super::identity::user::Entity",
        from = "Column::ReturnedByUserId",
        to = "super::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    ReturnedBy,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl Related<super::inventory_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
