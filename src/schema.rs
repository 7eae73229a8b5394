//! Catalog of the tables and business-key indexes the migration sequence
//! produces, and checks of a live database against it.

use crate::db::DbPool;
use crate::errors::{AppError, ServiceError};
use sea_orm_migration::SchemaManager;
use tracing::{debug, warn};

/// Bookkeeping table maintained by `sea-orm-migration` itself.
pub const MIGRATIONS_TABLE: &str = "seaql_migrations";

/// Every application table, in creation order. Dropping in reverse order
/// never violates a foreign key.
pub const TABLES: &[&str] = &[
    "asp_net_roles",
    "asp_net_users",
    "asp_net_role_claims",
    "asp_net_user_claims",
    "asp_net_user_logins",
    "asp_net_user_roles",
    "asp_net_user_tokens",
    "locations",
    "vendors",
    "assets",
    "inventory_items",
    "asset_inventory_mappings",
    "inventory_movements",
    "inventory_transactions",
    "maintenance_records",
    "write_off_records",
    "it_requests",
    "request_approvals",
    "request_comments",
    "request_attachments",
    "request_escalations",
    "request_actions",
    "procurement_requests",
    "procurement_items",
    "procurement_approvals",
    "procurement_activities",
    "procurement_documents",
    "vendor_quotes",
    "quote_items",
    "audit_logs",
    "automation_rules",
    "automation_logs",
    "budgets",
    "spend_trends",
    "bug_reports",
];

/// A natural identifier guarded by a unique index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessKey {
    pub table: &'static str,
    pub index: &'static str,
    pub columns: &'static [&'static str],
}

const fn key(
    table: &'static str,
    index: &'static str,
    columns: &'static [&'static str],
) -> BusinessKey {
    BusinessKey {
        table,
        index,
        columns,
    }
}

pub const BUSINESS_KEYS: &[BusinessKey] = &[
    key("asp_net_roles", "ix_asp_net_roles_normalized_name", &["normalized_name"]),
    key(
        "asp_net_users",
        "ix_asp_net_users_normalized_user_name",
        &["normalized_user_name"],
    ),
    key(
        "locations",
        "ix_locations_building_floor_room",
        &["building", "floor", "room"],
    ),
    key("vendors", "ix_vendors_vendor_code", &["vendor_code"]),
    key("assets", "ix_assets_asset_tag", &["asset_tag"]),
    key("inventory_items", "ix_inventory_items_item_code", &["item_code"]),
    key(
        "inventory_transactions",
        "ix_inventory_transactions_transaction_number",
        &["transaction_number"],
    ),
    key(
        "write_off_records",
        "ix_write_off_records_write_off_number",
        &["write_off_number"],
    ),
    key("it_requests", "ix_it_requests_request_number", &["request_number"]),
    key(
        "procurement_requests",
        "ix_procurement_requests_procurement_number",
        &["procurement_number"],
    ),
    key(
        "procurement_approvals",
        "ix_procurement_approvals_procurement_request_id_sequence",
        &["procurement_request_id", "sequence"],
    ),
    key(
        "vendor_quotes",
        "ix_vendor_quotes_vendor_id_quote_number",
        &["vendor_id", "quote_number"],
    ),
    key("automation_rules", "ix_automation_rules_name", &["name"]),
    key(
        "budgets",
        "ix_budgets_fiscal_year_department_category",
        &["fiscal_year", "department", "category"],
    ),
];

/// Application tables that exist in `db`, in creation order.
pub async fn present_tables(db: &DbPool) -> Result<Vec<&'static str>, AppError> {
    let manager = SchemaManager::new(db);
    let mut present = Vec::new();
    for table in TABLES {
        if manager.has_table(*table).await? {
            present.push(*table);
        }
    }
    debug!(present = present.len(), total = TABLES.len(), "Inspected schema");
    Ok(present)
}

/// Application tables that do not exist in `db`, in creation order.
pub async fn missing_tables(db: &DbPool) -> Result<Vec<&'static str>, AppError> {
    let present = present_tables(db).await?;
    Ok(TABLES
        .iter()
        .copied()
        .filter(|t| !present.contains(t))
        .collect())
}

/// Business-key indexes that do not exist in `db`.
pub async fn missing_business_keys(db: &DbPool) -> Result<Vec<BusinessKey>, AppError> {
    let manager = SchemaManager::new(db);
    let mut missing = Vec::new();
    for bk in BUSINESS_KEYS {
        if !manager.has_index(bk.table, bk.index).await? {
            missing.push(*bk);
        }
    }
    Ok(missing)
}

/// Fails with `SchemaMismatch` unless every table and business key exists.
pub async fn verify_migrated(db: &DbPool) -> Result<(), AppError> {
    let missing = missing_tables(db).await?;
    if !missing.is_empty() {
        warn!(missing = ?missing, "Schema is not fully migrated");
        return Err(ServiceError::SchemaMismatch(format!(
            "missing tables: {}",
            missing.join(", ")
        )));
    }

    let missing_keys = missing_business_keys(db).await?;
    if !missing_keys.is_empty() {
        let names: Vec<&str> = missing_keys.iter().map(|k| k.index).collect();
        warn!(missing = ?names, "Business key indexes are missing");
        return Err(ServiceError::SchemaMismatch(format!(
            "missing unique indexes: {}",
            names.join(", ")
        )));
    }

    Ok(())
}

/// Fails with `SchemaMismatch` if any application table is left behind.
/// The migration bookkeeping table is ignored.
pub async fn verify_empty(db: &DbPool) -> Result<(), AppError> {
    let leftover = present_tables(db).await?;
    if leftover.is_empty() {
        Ok(())
    } else {
        warn!(leftover = ?leftover, "Schema still has application tables");
        Err(ServiceError::SchemaMismatch(format!(
            "leftover tables: {}",
            leftover.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_names_are_unique() {
        let set: HashSet<_> = TABLES.iter().collect();
        assert_eq!(set.len(), TABLES.len());
        assert!(!TABLES.contains(&MIGRATIONS_TABLE));
    }

    #[test]
    fn every_business_key_targets_a_known_table() {
        for bk in BUSINESS_KEYS {
            assert!(TABLES.contains(&bk.table), "{} is not catalogued", bk.table);
            assert!(bk.index.starts_with(&format!("ix_{}_", bk.table)));
            assert!(!bk.columns.is_empty());
        }
    }

    #[test]
    fn parents_precede_children() {
        let pos = |t: &str| TABLES.iter().position(|x| *x == t).unwrap();
        assert!(pos("asp_net_users") < pos("assets"));
        assert!(pos("locations") < pos("assets"));
        assert!(pos("assets") < pos("write_off_records"));
        assert!(pos("procurement_requests") < pos("vendor_quotes"));
        assert!(pos("vendor_quotes") < pos("quote_items"));
        assert!(pos("automation_rules") < pos("automation_logs"));
    }
}
