use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum InventoryCategory {
    #[sea_orm(num_value = 0)]
    Consumable,
    #[sea_orm(num_value = 1)]
    SparePart,
    #[sea_orm(num_value = 2)]
    Accessory,
    #[sea_orm(num_value = 3)]
    Cable,
    #[sea_orm(num_value = 4)]
    Storage,
    #[sea_orm(num_value = 5)]
    Peripheral,
    #[sea_orm(num_value = 6)]
    CalibrationEquipment,
    #[sea_orm(num_value = 7)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum InventoryItemStatus {
    #[sea_orm(num_value = 0)]
    Active,
    #[sea_orm(num_value = 1)]
    Discontinued,
    #[sea_orm(num_value = 2)]
    OnHold,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub item_code: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub category: InventoryCategory,
    pub unit_of_measure: String,
    pub quantity_on_hand: i32,
    pub minimum_stock_level: i32,
    pub maximum_stock_level: i32,
    pub reorder_point: i32,
    pub reorder_quantity: i32,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub unit_cost: Decimal,
    pub manufacturer: Option<String>,
    pub part_number: Option<String>,
    pub location_id: Option<i32>,
    pub preferred_vendor_id: Option<i32>,
    pub status: InventoryItemStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub requires_calibration: bool,
    pub calibration_interval_days: Option<i32>,
    pub last_calibration_date: Option<NaiveDate>,
    pub next_calibration_date: Option<NaiveDate>,
    pub calibration_certificate: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id",
        on_delete = "SetNull"
    )]
    Location,
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::PreferredVendorId",
        to = "super::vendor::Column::Id",
        on_delete = "SetNull"
    )]
    PreferredVendor,
    #[sea_orm(has_many = "super::inventory_movement::Entity")]
    Movements,
    #[sea_orm(has_many = "super::inventory_transaction::Entity")]
    Transactions,
    #[sea_orm(has_many = "super::asset_inventory_mapping::Entity")]
    AssetMappings,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PreferredVendor.def()
    }
}

impl Related<super::inventory_movement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movements.def()
    }
}

impl Related<super::inventory_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl Related<super::asset_inventory_mapping::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssetMappings.def()
    }
}

impl Model {
    pub fn needs_reorder(&self) -> bool {
        self.quantity_on_hand <= self.reorder_point
    }

    pub fn is_below_minimum(&self) -> bool {
        self.quantity_on_hand < self.minimum_stock_level
    }

    /// Calibration is due when required and the next date is unknown or not after `on`.
    pub fn calibration_due(&self, on: NaiveDate) -> bool {
        self.requires_calibration && self.next_calibration_date.map_or(true, |next| next <= on)
    }

    pub fn stock_value(&self) -> Decimal {
        self.unit_cost * Decimal::from(self.quantity_on_hand)
    }
}

/// `last` plus `interval_days`, rejecting negative intervals and dates past
/// the calendar range.
pub fn next_calibration_date(last: NaiveDate, interval_days: i32) -> Result<NaiveDate, DbErr> {
    if interval_days < 0 {
        return Err(DbErr::Custom(format!(
            "calibration_interval_days must not be negative, got {interval_days}"
        )));
    }
    last.checked_add_signed(chrono::Duration::days(i64::from(interval_days)))
        .ok_or_else(|| {
            DbErr::Custom(format!(
                "calibration interval of {interval_days} days from {last} is out of range"
            ))
        })
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

        if let ActiveValue::Set(Some(days)) = active_model.calibration_interval_days {
            if days < 0 {
                return Err(DbErr::Custom(format!(
                    "calibration_interval_days must not be negative, got {days}"
                )));
            }
        }

        // Keep the derived next date in step with the interval, including
        // updates that change only one of the two inputs
        if active_model.last_calibration_date.is_set()
            || active_model.calibration_interval_days.is_set()
        {
            // a partial insert carries only one of them and derives nothing
            let inputs = match (
                active_model.last_calibration_date.try_as_ref(),
                active_model.calibration_interval_days.try_as_ref(),
            ) {
                (Some(last), Some(days)) => Some((*last, *days)),
                _ => None,
            };
            if let Some((last, days)) = inputs {
                let next = match (last, days) {
                    (Some(last), Some(days)) => Some(next_calibration_date(last, days)?),
                    _ => None,
                };
                active_model.next_calibration_date = Set(next);
            }
        }

        Ok(active_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(on_hand: i32) -> Model {
        Model {
            id: 1,
            item_code: "INV-CBL-001".to_string(),
            name: "Cat6 patch cable".to_string(),
            description: None,
            category: InventoryCategory::Cable,
            unit_of_measure: "Each".to_string(),
            quantity_on_hand: on_hand,
            minimum_stock_level: 5,
            maximum_stock_level: 100,
            reorder_point: 10,
            reorder_quantity: 50,
            unit_cost: dec!(3.25),
            manufacturer: None,
            part_number: None,
            location_id: None,
            preferred_vendor_id: None,
            status: InventoryItemStatus::Active,
            created_at: Utc::now(),
            updated_at: None,
            requires_calibration: false,
            calibration_interval_days: None,
            last_calibration_date: None,
            next_calibration_date: None,
            calibration_certificate: None,
        }
    }

    #[test]
    fn reorder_threshold_is_inclusive() {
        assert!(item(10).needs_reorder());
        assert!(!item(11).needs_reorder());
        assert!(item(4).is_below_minimum());
        assert!(!item(5).is_below_minimum());
    }

    #[test]
    fn stock_value_multiplies_unit_cost() {
        assert_eq!(item(4).stock_value(), dec!(13.00));
    }

    #[test]
    fn next_calibration_adds_interval() {
        let last = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            next_calibration_date(last, 365).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert_eq!(next_calibration_date(last, 0).unwrap(), last);
    }

    #[test]
    fn next_calibration_rejects_negative_and_overflowing_intervals() {
        let last = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(matches!(next_calibration_date(last, -1), Err(DbErr::Custom(_))));
        assert!(matches!(next_calibration_date(last, i32::MAX), Err(DbErr::Custom(_))));
    }

    #[test]
    fn calibration_only_due_when_required() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut it = item(1);
        assert!(!it.calibration_due(today));

        it.requires_calibration = true;
        assert!(it.calibration_due(today));

        it.next_calibration_date = NaiveDate::from_ymd_opt(2024, 7, 1);
        assert!(!it.calibration_due(today));
    }
}
