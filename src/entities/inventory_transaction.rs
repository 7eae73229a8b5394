use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum TransactionType {
    #[sea_orm(num_value = 0)]
    Purchase,
    #[sea_orm(num_value = 1)]
    Receipt,
    #[sea_orm(num_value = 2)]
    Issue,
    #[sea_orm(num_value = 3)]
    Adjustment,
    #[sea_orm(num_value = 4)]
    Return,
    #[sea_orm(num_value = 5)]
    WriteOff,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub transaction_number: String,
    pub inventory_item_id: i32,
    pub transaction_type: TransactionType,
    pub quantity: i32,
    pub quantity_before: i32,
    pub quantity_after: i32,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub unit_cost: Decimal,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub total_cost: Decimal,
    pub vendor_id: Option<i32>,
    pub reference_number: Option<String>,
    pub invoice_number: Option<String>,
    pub transaction_date: DateTime<Utc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_by_user_id: Option<String>,
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
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id",
        on_delete = "SetNull"
    )]
    Vendor,
    #[sea_orm(
        belongs_to = "super::identity::user::Entity",
        from = "Column::CreatedByUserId",
        to = "super::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    CreatedBy,
}

impl Related<super::inventory_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItem.def()
    }
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Model {
    /// Quantity delta recorded by this transaction.
    pub fn delta(&self) -> i32 {
        self.quantity_after - self.quantity_before
    }
}

impl ActiveModelBehavior for ActiveModel {}
