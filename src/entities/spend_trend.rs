use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::budget::BudgetCategory;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "spend_trends")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    /// `None` aggregates every department.
    pub department: Option<String>,
    pub category: Option<BudgetCategory>,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub total_spend: Decimal,
    pub transaction_count: i32,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub average_transaction: Decimal,
    pub computed_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
