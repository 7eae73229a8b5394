use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

pub const MONEY_PRECISION: u32 = 18;
/// sea-query rejects SQLite decimals wider than 16 digits.
pub const SQLITE_MONEY_PRECISION: u32 = 16;
pub const MONEY_SCALE: u32 = 2;

pub fn money_precision(backend: DatabaseBackend) -> u32 {
    match backend {
        DatabaseBackend::Sqlite => SQLITE_MONEY_PRECISION,
        _ => MONEY_PRECISION,
    }
}

/// Amount columns: `DECIMAL(18, 2)` on PostgreSQL, the widest accepted
/// precision elsewhere.
pub trait MoneyColumn {
    fn money(&mut self, manager: &SchemaManager) -> &mut Self;
}

impl MoneyColumn for ColumnDef {
    fn money(&mut self, manager: &SchemaManager) -> &mut Self {
        self.decimal_len(money_precision(manager.get_database_backend()), MONEY_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_keeps_full_precision() {
        assert_eq!(money_precision(DatabaseBackend::Postgres), 18);
    }

    #[test]
    fn sqlite_stays_within_sea_query_limit() {
        assert_eq!(money_precision(DatabaseBackend::Sqlite), 16);
    }
}
