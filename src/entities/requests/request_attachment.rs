use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "request_attachments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub request_id: i32,
    pub file_name: String,
    pub file_path: String,
    pub content_type: Option<String>,
    /// Bytes.
    pub file_size: i64,
    pub uploaded_by_user_id: Option<String>,
    pub uploaded_at: DateTime<Utc>,
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
        from = "Column::UploadedByUserId",
        to = "crate::entities::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    UploadedBy,
}

impl Related<super::it_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
