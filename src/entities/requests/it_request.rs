use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::entities::shared::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum RequestType {
    #[sea_orm(num_value = 0)]
    Hardware,
    #[sea_orm(num_value = 1)]
    Software,
    #[sea_orm(num_value = 2)]
    Access,
    #[sea_orm(num_value = 3)]
    Network,
    #[sea_orm(num_value = 4)]
    Repair,
    #[sea_orm(num_value = 5)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum RequestStatus {
    #[sea_orm(num_value = 0)]
    Submitted,
    #[sea_orm(num_value = 1)]
    UnderReview,
    #[sea_orm(num_value = 2)]
    Approved,
    #[sea_orm(num_value = 3)]
    InProgress,
    #[sea_orm(num_value = 4)]
    Resolved,
    #[sea_orm(num_value = 5)]
    Closed,
    #[sea_orm(num_value = 6)]
    Rejected,
    #[sea_orm(num_value = 7)]
    Cancelled,
}

impl RequestStatus {
    pub fn is_open(&self) -> bool {
        !matches!(
            self,
            RequestStatus::Closed | RequestStatus::Rejected | RequestStatus::Cancelled
        )
    }
}

/// IT help-desk request. Satellite tables cascade from it; the requester is restricted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "it_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub request_number: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub request_type: RequestType,
    pub priority: Priority,
    pub status: RequestStatus,
    pub requested_by_user_id: String,
    pub assigned_to_user_id: Option<String>,
    pub department: Option<String>,
    pub asset_id: Option<i32>,
    pub location_id: Option<i32>,
    pub due_date: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub resolution_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::entities::identity::user::Entity",
        from = "Column::RequestedByUserId",
        to = "crate::entities::identity::user::Column::Id",
        on_delete = "Restrict"
    )]
    RequestedBy,
    #[sea_orm(
        belongs_to = "crate::entities::identity::user::Entity",
        from = "Column::AssignedToUserId",
        to = "crate::entities::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    AssignedTo,
    #[sea_orm(
        belongs_to = "crate::entities::asset::Entity",
        from = "Column::AssetId",
        to = "crate::entities::asset::Column::Id",
        on_delete = "SetNull"
    )]
    Asset,
    #[sea_orm(
        belongs_to = "crate::entities::location::Entity",
        from = "Column::LocationId",
        to = "crate::entities::location::Column::Id",
        on_delete = "SetNull"
    )]
    Location,
    #[sea_orm(has_many = "super::request_approval::Entity")]
    Approvals,
    #[sea_orm(has_many = "super::request_comment::Entity")]
    Comments,
    #[sea_orm(has_many = "super::request_attachment::Entity")]
    Attachments,
    #[sea_orm(has_many = "super::request_escalation::Entity")]
    Escalations,
    #[sea_orm(has_many = "super::request_action::Entity")]
    Actions,
}

impl Related<crate::entities::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl Related<crate::entities::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::request_approval::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Approvals.def()
    }
}

impl Related<super::request_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::request_attachment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attachments.def()
    }
}

impl Related<super::request_escalation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Escalations.def()
    }
}

impl Related<super::request_action::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Actions.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;
        let now = Utc::now();

        if insert {
            if let ActiveValue::NotSet = active_model.created_at {
                active_model.created_at = Set(now);
            }
        } else {
            active_model.updated_at = Set(Some(now));
        }

        Ok(active_model)
    }
}
