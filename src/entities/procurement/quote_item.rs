use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quote_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vendor_quote_id: i32,
    pub procurement_item_id: Option<i32>,
    pub description: String,
    pub quantity: i32,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub unit_price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendor_quote::Entity",
        from = "Column::VendorQuoteId",
        to = "super::vendor_quote::Column::Id",
        on_delete = "Cascade"
    )]
    VendorQuote,
    #[sea_orm(
        belongs_to = "super::procurement_item::Entity",
        from = "Column::ProcurementItemId",
        to = "super::procurement_item::Column::Id",
        on_delete = "SetNull"
    )]
    ProcurementItem,
}

impl Related<super::vendor_quote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VendorQuote.def()
    }
}

impl Related<super::procurement_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProcurementItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
