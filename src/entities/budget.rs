use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum BudgetCategory {
    #[sea_orm(num_value = 0)]
    Hardware,
    #[sea_orm(num_value = 1)]
    Software,
    #[sea_orm(num_value = 2)]
    Services,
    #[sea_orm(num_value = 3)]
    Maintenance,
    #[sea_orm(num_value = 4)]
    Consumables,
    #[sea_orm(num_value = 5)]
    Other,
}

/// Departmental allocation, one row per fiscal year, department and category.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fiscal_year: i32,
    pub department: String,
    pub category: BudgetCategory,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub allocated_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub spent_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub committed_amount: Decimal,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    /// Allocation not yet spent or committed. Negative when overspent.
    pub fn remaining(&self) -> Decimal {
        self.allocated_amount - self.spent_amount - self.committed_amount
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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn remaining_subtracts_spent_and_committed() {
        let budget = Model {
            id: 1,
            fiscal_year: 2024,
            department: "Radiology".to_string(),
            category: BudgetCategory::Hardware,
            allocated_amount: dec!(50000.00),
            spent_amount: dec!(32000.00),
            committed_amount: dec!(20000.00),
            notes: None,
            created_at: Utc::now(),
            updated_at: None,
        };
        assert_eq!(budget.remaining(), dec!(-2000.00));
    }
}
