use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum DocumentType {
    #[sea_orm(num_value = 0)]
    Quote,
    #[sea_orm(num_value = 1)]
    PurchaseOrder,
    #[sea_orm(num_value = 2)]
    Invoice,
    #[sea_orm(num_value = 3)]
    DeliveryNote,
    #[sea_orm(num_value = 4)]
    Contract,
    #[sea_orm(num_value = 5)]
    Specification,
    #[sea_orm(num_value = 6)]
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "procurement_documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub procurement_request_id: i32,
    pub document_type: DocumentType,
    pub file_name: String,
    pub file_path: String,
    pub content_type: Option<String>,
    pub file_size: i64,
    pub uploaded_by_user_id: Option<String>,
    pub uploaded_at: DateTime<Utc>,
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
        from = "Column::UploadedByUserId",
        to = "crate::entities::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    UploadedBy,
}

impl Related<super::procurement_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProcurementRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
