use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Urgency shared by IT requests and procurement requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Priority {
    #[sea_orm(num_value = 0)]
    Low,
    #[sea_orm(num_value = 1)]
    Medium,
    #[sea_orm(num_value = 2)]
    High,
    #[sea_orm(num_value = 3)]
    Critical,
}

/// Outcome of a single approval step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ApprovalStatus {
    #[sea_orm(num_value = 0)]
    Pending,
    #[sea_orm(num_value = 1)]
    Approved,
    #[sea_orm(num_value = 2)]
    Rejected,
    #[sea_orm(num_value = 3)]
    Skipped,
}

impl ApprovalStatus {
    pub fn is_decided(&self) -> bool {
        !matches!(self, ApprovalStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveEnum;

    #[test]
    fn priority_is_stored_as_integer() {
        assert_eq!(Priority::Low.to_value(), 0);
        assert_eq!(Priority::Critical.to_value(), 3);
        assert_eq!(Priority::try_from_value(&2).unwrap(), Priority::High);
    }

    #[test]
    fn unknown_approval_value_is_rejected() {
        assert!(ApprovalStatus::try_from_value(&42).is_err());
    }

    #[test]
    fn only_pending_approvals_are_undecided() {
        assert!(!ApprovalStatus::Pending.is_decided());
        assert!(ApprovalStatus::Approved.is_decided());
        assert!(ApprovalStatus::Skipped.is_decided());
    }
}
