use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum AutomationLogStatus {
    #[sea_orm(num_value = 0)]
    Succeeded,
    #[sea_orm(num_value = 1)]
    Failed,
    #[sea_orm(num_value = 2)]
    Skipped,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "automation_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub automation_rule_id: i32,
    pub status: AutomationLogStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub entity_name: Option<String>,
    pub entity_id: Option<String>,
    pub duration_ms: Option<i32>,
    pub triggered_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::automation_rule::Entity",
        from = "Column::AutomationRuleId",
        to = "super::automation_rule::Column::Id",
        on_delete = "Cascade"
    )]
    Rule,
}

impl Related<super::automation_rule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
