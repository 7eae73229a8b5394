use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum MovementType {
    #[sea_orm(num_value = 0)]
    Transfer,
    #[sea_orm(num_value = 1)]
    Deployment,
    #[sea_orm(num_value = 2)]
    Return,
    #[sea_orm(num_value = 3)]
    Adjustment,
    #[sea_orm(num_value = 4)]
    Disposal,
}

/// Append-only stock movement ledger. Locations it references cannot be deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_movements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub inventory_item_id: i32,
    pub from_location_id: Option<i32>,
    pub to_location_id: Option<i32>,
    pub asset_id: Option<i32>,
    pub movement_type: MovementType,
    pub quantity: i32,
    pub movement_date: DateTime<Utc>,
    pub reference_number: Option<String>,
    pub reason: Option<String>,
    pub performed_by_user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inventory_item::Entity",
        from = "Column::InventoryItemId",
        to = "super::inventory_item::Column::Id",
        on_delete = "Restrict"
    )]
    InventoryItem,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::FromLocationId",
        to = "super::location::Column::Id",
        on_delete = "Restrict"
    )]
    FromLocation,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::ToLocationId",
        to = "super::location::Column::Id",
        on_delete = "Restrict"
    )]
    ToLocation,
    #[sea_orm(
        belongs_to = "super::asset::Entity",
        from = "Column::AssetId",
        to = "super::asset::Column::Id",
        on_delete = "SetNull"
    )]
    Asset,
    #[sea_orm(
        belongs_to = "super::identity::user::Entity",
        from = "Column::PerformedByUserId",
        to = "super::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    PerformedBy,
}

impl Related<super::inventory_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItem.def()
    }
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
