use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum TriggerType {
    #[sea_orm(num_value = 0)]
    OnCreate,
    #[sea_orm(num_value = 1)]
    OnUpdate,
    #[sea_orm(num_value = 2)]
    OnStatusChange,
    #[sea_orm(num_value = 3)]
    Scheduled,
    #[sea_orm(num_value = 4)]
    LowStock,
    #[sea_orm(num_value = 5)]
    WarrantyExpiry,
}

/// Declarative trigger. `conditions` and `actions` are opaque JSON documents
/// interpreted by the application, not by the database.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "automation_rules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub trigger_type: TriggerType,
    pub trigger_entity: String,
    #[sea_orm(column_type = "Json")]
    pub conditions: Json,
    #[sea_orm(column_type = "Json")]
    pub actions: Json,
    pub is_enabled: bool,
    pub priority: i32,
    pub last_triggered_at: Option<DateTime<Utc>>,
    pub created_by_user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::identity::user::Entity",
        from = "Column::CreatedByUserId",
        to = "super::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    CreatedBy,
    #[sea_orm(has_many = "super::automation_log::Entity")]
    Logs,
}

impl Related<super::automation_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Logs.def()
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
