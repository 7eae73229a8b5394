use sea_orm::error::DbErr;
use sea_orm::{RuntimeErr, SqlErr};

/// SQLite extended result codes for foreign key failures: a deferred or
/// immediate check (787) and an `ON DELETE RESTRICT` trigger (1811).
const SQLITE_FOREIGN_KEY_CODES: [&str; 2] = ["787", "1811"];

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[source] DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A business key (asset tag, item code, request number...) already exists.
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Insert or update referenced a missing parent, or delete hit a RESTRICT.
    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    /// The database does not have the tables the migration sequence produces.
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        ServiceError::from_db(err)
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl From<crate::config::AppConfigError> for ServiceError {
    fn from(err: crate::config::AppConfigError) -> Self {
        ServiceError::ConfigError(err.to_string())
    }
}

pub trait IntoDbErr {
    fn into_db_err(self) -> DbErr;
}

impl IntoDbErr for DbErr {
    fn into_db_err(self) -> DbErr {
        self
    }
}

impl IntoDbErr for String {
    fn into_db_err(self) -> DbErr {
        DbErr::Custom(self)
    }
}

impl IntoDbErr for &str {
    fn into_db_err(self) -> DbErr {
        DbErr::Custom(self.to_string())
    }
}

impl ServiceError {
    /// Wraps a database error, classifying constraint violations reported by
    /// the driver. Everything else stays a `DatabaseError`.
    pub fn from_db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ServiceError::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                ServiceError::ForeignKeyViolation(msg)
            }
            _ => match sqlite_foreign_key_violation(&err) {
                Some(msg) => ServiceError::ForeignKeyViolation(msg),
                None => ServiceError::DatabaseError(err),
            },
        }
    }

    /// Unclassified wrapper, for callers that already know what failed.
    pub fn db_error<E: IntoDbErr>(error: E) -> Self {
        ServiceError::DatabaseError(error.into_db_err())
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            ServiceError::UniqueViolation(_) | ServiceError::ForeignKeyViolation(_)
        )
    }
}

fn sqlite_foreign_key_violation(err: &DbErr) -> Option<String> {
    let runtime = match err {
        DbErr::Exec(e) | DbErr::Query(e) | DbErr::Conn(e) => e,
        _ => return None,
    };
    let RuntimeErr::SqlxError(sqlx_err) = runtime else {
        return None;
    };
    let db_err = sqlx_err.as_database_error()?;
    let code = db_err.code()?;
    if SQLITE_FOREIGN_KEY_CODES.contains(&code.as_ref()) {
        Some(db_err.message().to_string())
    } else {
        None
    }
}

pub type AppError = ServiceError;

pub trait ResultExt<T> {
    fn map_err_to_service(self) -> Result<T, ServiceError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<ServiceError>,
{
    fn map_err_to_service(self) -> Result<T, ServiceError> {
        self.map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn custom_db_errors_stay_unclassified() {
        let err = ServiceError::from(DbErr::Custom("boom".into()));
        assert_matches!(err, ServiceError::DatabaseError(DbErr::Custom(ref m)) if m == "boom");
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn record_not_found_is_not_a_constraint() {
        let err = ServiceError::from_db(DbErr::RecordNotFound("asset 7".into()));
        assert_matches!(err, ServiceError::DatabaseError(_));
    }

    #[test]
    fn runtime_errors_without_a_database_code_stay_unclassified() {
        let err = DbErr::Exec(RuntimeErr::Internal("statement aborted".into()));
        assert_matches!(ServiceError::from_db(err), ServiceError::DatabaseError(_));
    }

    #[test]
    fn db_error_accepts_strings() {
        assert_matches!(
            ServiceError::db_error("pool closed"),
            ServiceError::DatabaseError(DbErr::Custom(_))
        );
    }

    #[test]
    fn display_includes_context() {
        let err = ServiceError::UniqueViolation("assets.asset_tag".into());
        assert_eq!(
            err.to_string(),
            "Unique constraint violated: assets.asset_tag"
        );
    }

    #[test]
    fn map_err_to_service_converts_anyhow() {
        let result: Result<(), anyhow::Error> = Err(anyhow::anyhow!("seed failed"));
        assert_matches!(result.map_err_to_service(), Err(ServiceError::Other(_)));
    }
}
