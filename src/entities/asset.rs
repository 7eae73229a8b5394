use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum AssetCategory {
    #[sea_orm(num_value = 0)]
    Desktop,
    #[sea_orm(num_value = 1)]
    Laptop,
    #[sea_orm(num_value = 2)]
    Monitor,
    #[sea_orm(num_value = 3)]
    Printer,
    #[sea_orm(num_value = 4)]
    NetworkDevice,
    #[sea_orm(num_value = 5)]
    Server,
    #[sea_orm(num_value = 6)]
    MobileDevice,
    #[sea_orm(num_value = 7)]
    MedicalDevice,
    #[sea_orm(num_value = 8)]
    Peripheral,
    #[sea_orm(num_value = 9)]
    Other,
}

/// Assets are never deleted; retirement and write-off are states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum AssetStatus {
    #[sea_orm(num_value = 0)]
    Available,
    #[sea_orm(num_value = 1)]
    InUse,
    #[sea_orm(num_value = 2)]
    UnderMaintenance,
    #[sea_orm(num_value = 3)]
    Reserved,
    #[sea_orm(num_value = 4)]
    Retired,
    #[sea_orm(num_value = 5)]
    WrittenOff,
    #[sea_orm(num_value = 6)]
    Lost,
}

impl AssetStatus {
    pub fn is_active(&self) -> bool {
        !matches!(
            self,
            AssetStatus::Retired | AssetStatus::WrittenOff | AssetStatus::Lost
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub asset_tag: String,
    pub name: String,
    pub category: AssetCategory,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: AssetStatus,
    pub location_id: i32,
    pub assigned_to_user_id: Option<String>,
    pub assigned_department: Option<String>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub purchase_date: Option<NaiveDate>,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))", nullable)]
    pub purchase_price: Option<Decimal>,
    pub vendor_id: Option<i32>,
    pub hostname: Option<String>,
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_by_user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub warranty_start_date: Option<NaiveDate>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub warranty_provider: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id",
        on_delete = "Restrict"
    )]
    Location,
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id",
        on_delete = "SetNull"
    )]
    Vendor,
    #[sea_orm(
        belongs_to = "super::identity::user::Entity",
        from = "Column::AssignedToUserId",
        to = "super::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    AssignedTo,
    #[sea_orm(
        belongs_to = "super::identity::user::Entity",
        from = "Column::CreatedByUserId",
        to = "super::identity::user::Column::Id",
        on_delete = "SetNull"
    )]
    CreatedBy,
    #[sea_orm(has_many = "super::maintenance_record::Entity")]
    MaintenanceRecords,
    #[sea_orm(has_many = "super::write_off_record::Entity")]
    WriteOffRecords,
    #[sea_orm(has_many = "super::asset_inventory_mapping::Entity")]
    InventoryMappings,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::maintenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRecords.def()
    }
}

impl Related<super::write_off_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WriteOffRecords.def()
    }
}

impl Related<super::asset_inventory_mapping::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryMappings.def()
    }
}

impl Related<super::inventory_item::Entity> for Entity {
    fn to() -> RelationDef {
        super::asset_inventory_mapping::Relation::InventoryItem.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::asset_inventory_mapping::Relation::Asset.def().rev())
    }
}

impl Model {
    /// Whether the warranty covers `on`. Unknown expiry means not covered.
    pub fn is_under_warranty(&self, on: NaiveDate) -> bool {
        match self.warranty_expiry_date {
            Some(expiry) => {
                on <= expiry && self.warranty_start_date.map_or(true, |start| start <= on)
            }
            None => false,
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
            if let ActiveValue::NotSet = active_model.status {
                active_model.status = Set(AssetStatus::Available);
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

    fn asset(start: Option<NaiveDate>, expiry: Option<NaiveDate>) -> Model {
        Model {
            id: 1,
            asset_tag: "HOS-0001".to_string(),
            name: "Ward PC".to_string(),
            category: AssetCategory::Desktop,
            brand: None,
            model: None,
            serial_number: None,
            status: AssetStatus::InUse,
            location_id: 1,
            assigned_to_user_id: None,
            assigned_department: None,
            assigned_at: None,
            purchase_date: None,
            purchase_price: None,
            vendor_id: None,
            hostname: None,
            ip_address: None,
            mac_address: None,
            notes: None,
            created_by_user_id: None,
            created_at: Utc::now(),
            updated_at: None,
            warranty_start_date: start,
            warranty_expiry_date: expiry,
            warranty_provider: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn warranty_window_is_inclusive() {
        let a = asset(Some(date(2024, 1, 1)), Some(date(2026, 12, 31)));
        assert!(a.is_under_warranty(date(2024, 1, 1)));
        assert!(a.is_under_warranty(date(2026, 12, 31)));
        assert!(!a.is_under_warranty(date(2027, 1, 1)));
        assert!(!a.is_under_warranty(date(2023, 12, 31)));
    }

    #[test]
    fn missing_expiry_is_not_covered() {
        assert!(!asset(Some(date(2024, 1, 1)), None).is_under_warranty(date(2024, 6, 1)));
    }

    #[test]
    fn written_off_assets_are_inactive() {
        assert!(AssetStatus::InUse.is_active());
        assert!(!AssetStatus::WrittenOff.is_active());
        assert!(!AssetStatus::Retired.is_active());
    }
}
