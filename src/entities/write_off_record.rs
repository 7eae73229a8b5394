use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum WriteOffReason {
    #[sea_orm(num_value = 0)]
    EndOfLife,
    #[sea_orm(num_value = 1)]
    Damaged,
    #[sea_orm(num_value = 2)]
    Lost,
    #[sea_orm(num_value = 3)]
    Stolen,
    #[sea_orm(num_value = 4)]
    Obsolete,
    #[sea_orm(num_value = 5)]
    BeyondRepair,
}

/// Request, review, approval, processing. Rejection can happen at review or approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum WriteOffStatus {
    #[sea_orm(num_value = 0)]
    Requested,
    #[sea_orm(num_value = 1)]
    UnderReview,
    #[sea_orm(num_value = 2)]
    Approved,
    #[sea_orm(num_value = 3)]
    Processed,
    #[sea_orm(num_value = 4)]
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum DisposalMethod {
    #[sea_orm(num_value = 0)]
    Recycled,
    #[sea_orm(num_value = 1)]
    Donated,
    #[sea_orm(num_value = 2)]
    Sold,
    #[sea_orm(num_value = 3)]
    Destroyed,
    #[sea_orm(num_value = 4)]
    ReturnedToVendor,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "write_off_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub write_off_number: String,
    pub asset_id: i32,
    pub reason: WriteOffReason,
    pub status: WriteOffStatus,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))", nullable)]
    pub book_value: Option<Decimal>,
    pub disposal_method: Option<DisposalMethod>,
    pub requested_by_user_id: Option<String>,
    pub requested_at: DateTime<Utc>,
    pub reviewed_by_user_id: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub approved_by_user_id: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub processed_by_user_id: Option<String>,
    pub processed_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::asset::Entity",
        from = "Column::AssetId",
        to = "super::asset::Column::Id",
        on_delete = "Restrict"
    )]
    Asset,
    #[sea_orm(
        belongs_to = "super::identity::user::Entity",
        from = "Column::RequestedByUserId",
        to = "super::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    RequestedBy,
    #[sea_orm(
        belongs_to = "super::identity::user::Entity",
        from = "Column::ReviewedByUserId",
        to = "super::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    ReviewedBy,
    #[sea_orm(
        belongs_to = "super::identity::user::Entity",
        from = "Column::ApprovedByUserId",
        to = "super::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    ApprovedBy,
    #[sea_orm(
        belongs_to = "super::identity::user::Entity",
        from = "Column::ProcessedByUserId",
        to = "super::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    ProcessedBy,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
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
            if let ActiveValue::NotSet = active_model.requested_at {
                active_model.requested_at = Set(now);
            }
        } else {
            active_model.updated_at = Set(Some(now));
        }

        Ok(active_model)
    }
}
