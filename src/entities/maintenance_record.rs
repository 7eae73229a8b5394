use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum MaintenanceType {
    #[sea_orm(num_value = 0)]
    Preventive,
    #[sea_orm(num_value = 1)]
    Corrective,
    #[sea_orm(num_value = 2)]
    Upgrade,
    #[sea_orm(num_value = 3)]
    Inspection,
    #[sea_orm(num_value = 4)]
    Calibration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum MaintenanceStatus {
    #[sea_orm(num_value = 0)]
    Requested,
    #[sea_orm(num_value = 1)]
    UnderReview,
    #[sea_orm(num_value = 2)]
    Approved,
    #[sea_orm(num_value = 3)]
    InProgress,
    #[sea_orm(num_value = 4)]
    Completed,
    #[sea_orm(num_value = 5)]
    Rejected,
    #[sea_orm(num_value = 6)]
    Cancelled,
}

impl MaintenanceStatus {
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            MaintenanceStatus::Completed | MaintenanceStatus::Rejected | MaintenanceStatus::Cancelled
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "maintenance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub asset_id: i32,
    pub maintenance_type: MaintenanceType,
    pub status: MaintenanceStatus,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub requested_by_user_id: Option<String>,
    pub requested_at: DateTime<Utc>,
    pub reviewed_by_user_id: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub approved_by_user_id: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub performed_by: Option<String>,
    pub vendor_id: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))", nullable)]
    pub cost: Option<Decimal>,
    #[sea_orm(column_type = "Text", nullable)]
    pub resolution_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::asset::Entity",
        from = "Column::AssetId",
        to = "super::asset::Column::Id",
        on_delete = "Cascade"
    )]
    Asset,
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id",
        on_delete = "SetNull"
    )]
    Vendor,
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
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
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
