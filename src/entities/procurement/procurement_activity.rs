use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::procurement_request::ProcurementStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ProcurementActivityType {
    #[sea_orm(num_value = 0)]
    Created,
    #[sea_orm(num_value = 1)]
    Submitted,
    #[sea_orm(num_value = 2)]
    Approved,
    #[sea_orm(num_value = 3)]
    Rejected,
    #[sea_orm(num_value = 4)]
    QuoteReceived,
    #[sea_orm(num_value = 5)]
    VendorSelected,
    #[sea_orm(num_value = 6)]
    Ordered,
    #[sea_orm(num_value = 7)]
    Received,
    #[sea_orm(num_value = 8)]
    Commented,
    #[sea_orm(num_value = 9)]
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "procurement_activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub procurement_request_id: i32,
    pub activity_type: ProcurementActivityType,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub previous_status: Option<ProcurementStatus>,
    pub new_status: Option<ProcurementStatus>,
    pub performed_by_user_id: Option<String>,
    pub performed_at: DateTime<Utc>,
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
        belongs_to = "crate::entities::identity::user::Entity",
        from = "Column::PerformedByUserId",
        to = "crate::entities::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    PerformedBy,
}

impl Related<super::procurement_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProcurementRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
