use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum QuoteStatus {
    #[sea_orm(num_value = 0)]
    Received,
    #[sea_orm(num_value = 1)]
    UnderEvaluation,
    #[sea_orm(num_value = 2)]
    Accepted,
    #[sea_orm(num_value = 3)]
    Rejected,
    #[sea_orm(num_value = 4)]
    Expired,
}

/// Vendor's price offer against a procurement request.
/// A vendor that has quoted cannot be deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vendor_quotes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub procurement_request_id: i32,
    pub vendor_id: i32,
    pub quote_number: String,
    pub quote_date: DateTime<Utc>,
    pub valid_until: Option<DateTime<Utc>>,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub total_amount: Decimal,
    pub delivery_days: Option<i32>,
    pub warranty_terms: Option<String>,
    pub payment_terms: Option<String>,
    pub status: QuoteStatus,
    pub is_selected: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
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
        belongs_to = "crate::entities::vendor::Entity",
        from = "Column::VendorId",
        to = "crate::entities::vendor::Column::Id",
        on_delete = "Restrict"
    )]
    Vendor,
    #[sea_orm(has_many = "super::quote_item::Entity")]
    Items,
}

impl Related<super::procurement_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProcurementRequest.def()
    }
}

impl Related<crate::entities::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::quote_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl Model {
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        self.valid_until.map_or(true, |until| at <= until)
    }
}

impl ActiveModelBehavior for ActiveModel {}
