pub use sea_orm_migration::prelude::*;

mod column;

mod m20240101_000001_create_identity_tables;
mod m20240101_000002_create_locations_and_vendors_tables;
mod m20240101_000003_create_assets_table;
mod m20240101_000004_create_inventory_tables;
mod m20240101_000005_create_inventory_ledger_tables;
mod m20240101_000006_create_asset_lifecycle_tables;
mod m20240101_000007_create_it_request_tables;
mod m20240101_000008_create_procurement_tables;
mod m20240101_000009_create_audit_and_automation_tables;
mod m20240215_000010_add_asset_warranty_columns;
mod m20240301_000011_add_inventory_calibration_columns;
mod m20240410_000012_create_analytics_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_identity_tables::Migration),
            Box::new(m20240101_000002_create_locations_and_vendors_tables::Migration),
            Box::new(m20240101_000003_create_assets_table::Migration),
            Box::new(m20240101_000004_create_inventory_tables::Migration),
            Box::new(m20240101_000005_create_inventory_ledger_tables::Migration),
            Box::new(m20240101_000006_create_asset_lifecycle_tables::Migration),
            Box::new(m20240101_000007_create_it_request_tables::Migration),
            Box::new(m20240101_000008_create_procurement_tables::Migration),
            Box::new(m20240101_000009_create_audit_and_automation_tables::Migration),
            Box::new(m20240215_000010_add_asset_warranty_columns::Migration),
            Box::new(m20240301_000011_add_inventory_calibration_columns::Migration),
            Box::new(m20240410_000012_create_analytics_tables::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_in_timestamp_order() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn migration_names_are_unique() {
        let mut names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Migrator::migrations().len());
    }
}
