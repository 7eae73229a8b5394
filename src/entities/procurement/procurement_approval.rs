use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::entities::shared::ApprovalStatus;

/// One step of the approval chain. `(procurement_request_id, sequence)` is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "procurement_approvals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub procurement_request_id: i32,
    pub approver_user_id: String,
    pub approval_level: i32,
    pub sequence: i32,
    pub status: ApprovalStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))", nullable)]
    pub approved_amount: Option<Decimal>,
    pub decided_at: Option<DateTime<Utc>>,
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
        belongs_to = "crate::entities::identity::user::Entity",
        from = "Column::ApproverUserId",
        to = "crate::entities::identity::user::Column::Id",
        on_delete = "Restrict"
    )]
    Approver,
}

impl Related<super::procurement_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProcurementRequest.def()
    }
}

impl Related<crate::entities::identity::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Approver.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
