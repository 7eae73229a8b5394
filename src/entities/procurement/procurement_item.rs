use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "procurement_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub procurement_request_id: i32,
    pub item_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub specifications: Option<String>,
    pub quantity: i32,
    pub unit_of_measure: String,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub estimated_unit_price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub estimated_total: Decimal,
    /// Stock item this line replenishes, if any.
    pub inventory_item_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::procurement_request::Entity",
        from = "Column::ProcurementRequestId",
        to = "super::procurement_request::Column::Id",
        on_delete = "Cascade"
    )]
    ProcurementRequest,
    #[sea_orm(
        belongs_to = "crate::entities::inventory_item::Entity",
        from = "Column::InventoryItemId",
        to = "crate::entities::inventory_item::Column::Id",
        on_delete = "SetNull"
    )]
    InventoryItem,
    #[sea_orm(has_many = "super::quote_item::Entity")]
    QuoteItems,
}

impl Related<super::procurement_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProcurementRequest.def()
    }
}

impl Related<crate::entities::inventory_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItem.def()
    }
}

impl Related<super::quote_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuoteItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
