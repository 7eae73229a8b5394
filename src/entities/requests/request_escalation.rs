use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "request_escalations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub request_id: i32,
    pub escalation_level: i32,
    #[sea_orm(column_type = "Text")]
    pub reason: String,
    pub escalated_by_user_id: Option<String>,
    pub escalated_to_user_id: Option<String>,
    pub escalated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
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
        from = "Column::EscalatedByUserId",
        to = "crate::entities::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    EscalatedBy,
    #[sea_orm(
        belongs_to = "crate::entities::identity::user::Entity",
        from = "Column::EscalatedToUserId",
        to = "crate::entities::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    EscalatedTo,
}

impl Related<super::it_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
