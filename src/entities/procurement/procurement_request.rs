use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::entities::shared::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ProcurementCategory {
    #[sea_orm(num_value = 0)]
    Hardware,
    #[sea_orm(num_value = 1)]
    Software,
    #[sea_orm(num_value = 2)]
    Services,
    #[sea_orm(num_value = 3)]
    Consumables,
    #[sea_orm(num_value = 4)]
    MedicalEquipment,
    #[sea_orm(num_value = 5)]
    Networking,
    #[sea_orm(num_value = 6)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ProcurementStatus {
    #[sea_orm(num_value = 0)]
    Draft,
    #[sea_orm(num_value = 1)]
    Submitted,
    #[sea_orm(num_value = 2)]
    PendingApproval,
    #[sea_orm(num_value = 3)]
    Approved,
    #[sea_orm(num_value = 4)]
    Rejected,
    #[sea_orm(num_value = 5)]
    QuotesRequested,
    #[sea_orm(num_value = 6)]
    VendorSelected,
    #[sea_orm(num_value = 7)]
    Ordered,
    #[sea_orm(num_value = 8)]
    Received,
    #[sea_orm(num_value = 9)]
    Completed,
    #[sea_orm(num_value = 10)]
    Cancelled,
}

/// Purchase request with multi-level approval.
///
/// `current_approval_level` counts approved levels; the request is fully
/// approved once it reaches `required_approval_levels`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "procurement_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub procurement_number: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub justification: Option<String>,
    pub category: ProcurementCategory,
    pub priority: Priority,
    pub status: ProcurementStatus,
    pub requested_by_user_id: String,
    pub department: Option<String>,
    pub budget_code: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub estimated_budget: Decimal,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))", nullable)]
    pub approved_budget: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))", nullable)]
    pub actual_cost: Option<Decimal>,
    pub currency: String,
    pub required_by: Option<NaiveDate>,
    pub selected_vendor_id: Option<i32>,
    pub current_approval_level: i32,
    pub required_approval_levels: i32,
    pub submitted_at: Option<DateTime<Utc>>,
    pub approved_at: Option<DateTime<Utc>>,
    pub ordered_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
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
        belongs_to = "crate::entities::vendor::Entity",
        from = "Column::SelectedVendorId",
        to = "crate::entities::vendor::Column::Id",
        on_delete = "SetNull"
    )]
    SelectedVendor,
    #[sea_orm(has_many = "super::procurement_item::Entity")]
    Items,
    #[sea_orm(has_many = "super::procurement_approval::Entity")]
    Approvals,
    #[sea_orm(has_many = "super::procurement_activity::Entity")]
    Activities,
    #[sea_orm(has_many = "super::procurement_document::Entity")]
    Documents,
    #[sea_orm(has_many = "super::vendor_quote::Entity")]
    Quotes,
}

impl Related<super::procurement_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl Related<super::procurement_approval::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Approvals.def()
    }
}

impl Related<super::procurement_activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activities.def()
    }
}

impl Related<super::procurement_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Documents.def()
    }
}

impl Related<super::vendor_quote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quotes.def()
    }
}

impl Model {
    pub fn is_fully_approved(&self) -> bool {
        self.current_approval_level >= self.required_approval_levels
    }

    /// Approved budget minus actual cost, when both are known.
    pub fn budget_variance(&self) -> Option<Decimal> {
        match (self.approved_budget, self.actual_cost) {
            (Some(approved), Some(actual)) => Some(approved - actual),
            _ => None,
        }
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

        if let ActiveValue::Set(currency) = &active_model.currency {
            if currency.len() != 3 {
                return Err(DbErr::Custom(format!(
                    "currency must be a 3-letter ISO code, got {currency:?}"
                )));
            }
        }

        Ok(active_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request() -> Model {
        Model {
            id: 1,
            procurement_number: "PR-2024-0001".to_string(),
            title: "Ward laptops".to_string(),
            description: None,
            justification: None,
            category: ProcurementCategory::Hardware,
            priority: Priority::Medium,
            status: ProcurementStatus::PendingApproval,
            requested_by_user_id: "u1".to_string(),
            department: None,
            budget_code: None,
            estimated_budget: dec!(12000.00),
            approved_budget: None,
            actual_cost: None,
            currency: "USD".to_string(),
            required_by: None,
            selected_vendor_id: None,
            current_approval_level: 1,
            required_approval_levels: 2,
            submitted_at: None,
            approved_at: None,
            ordered_at: None,
            completed_at: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn approval_completes_at_required_level() {
        let mut pr = request();
        assert!(!pr.is_fully_approved());
        pr.current_approval_level = 2;
        assert!(pr.is_fully_approved());
    }

    #[test]
    fn variance_needs_both_amounts() {
        let mut pr = request();
        pr.approved_budget = Some(dec!(11000.00));
        assert_eq!(pr.budget_variance(), None);
        pr.actual_cost = Some(dec!(10450.50));
        assert_eq!(pr.budget_variance(), Some(dec!(549.50)));
    }
}
