//! Sea-ORM entities, one module per table.
//!
//! Status columns are integer-backed `DeriveActiveEnum` enums. Relations
//! mirror the foreign keys declared by the `migrations` crate, including the
//! delete behavior of each.

pub mod identity;
pub mod procurement;
pub mod requests;
pub mod shared;

pub mod asset;
pub mod asset_inventory_mapping;
pub mod audit_log;
pub mod automation_log;
pub mod automation_rule;
pub mod budget;
pub mod bug_report;
pub mod inventory_item;
pub mod inventory_movement;
pub mod inventory_transaction;
pub mod location;
pub mod maintenance_record;
pub mod spend_trend;
pub mod vendor;
pub mod write_off_record;

pub use asset::Entity as Asset;
pub use inventory_item::Entity as InventoryItem;
pub use location::Entity as Location;
pub use maintenance_record::Entity as MaintenanceRecord;
pub use vendor::Entity as Vendor;
pub use write_off_record::Entity as WriteOffRecord;
