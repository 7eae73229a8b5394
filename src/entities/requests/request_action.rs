use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::it_request::RequestStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum RequestActionType {
    #[sea_orm(num_value = 0)]
    Created,
    #[sea_orm(num_value = 1)]
    StatusChanged,
    #[sea_orm(num_value = 2)]
    Assigned,
    #[sea_orm(num_value = 3)]
    Commented,
    #[sea_orm(num_value = 4)]
    Escalated,
    #[sea_orm(num_value = 5)]
    Approved,
    #[sea_orm(num_value = 6)]
    Rejected,
    #[sea_orm(num_value = 7)]
    Closed,
}

/// Request history entry.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "request_actions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub request_id: i32,
    pub action_type: RequestActionType,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub previous_status: Option<RequestStatus>,
    pub new_status: Option<RequestStatus>,
    pub performed_by_user_id: Option<String>,
    pub performed_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::it_request::Entity",
        from = "Column::RequestId",
        to = "super::it_request::Column::Id",
        on_delete = "Cascade"
    )]
    Request,
    #[sea_orm(
        belongs_to = "crate::entities::identity::user::Entity",
        from = "Column::PerformedByUserId",
        to = "crate::entities::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    PerformedBy,
}

impl Related<super::it_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
