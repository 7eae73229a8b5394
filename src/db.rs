use crate::config::AppConfig;
use crate::errors::{AppError, ServiceError};
use metrics::{counter, gauge, histogram};
use migrations::Migrator;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend};
use sea_orm_migration::MigratorTrait;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Type alias for a database connection pool
pub type DbPool = DatabaseConnection;

/// Configuration for database connection
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Minimum number of connections
    pub min_connections: u32,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Idle timeout duration
    pub idle_timeout: Duration,
    /// Acquire connection timeout
    pub acquire_timeout: Duration,
    /// Log each statement through sqlx
    pub sqlx_logging: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            acquire_timeout: Duration::from_secs(8),
            sqlx_logging: false,
        }
    }
}

impl DbConfig {
    /// In-memory SQLite keeps one database per connection, so the pool must
    /// never open a second one.
    fn effective_max_connections(&self) -> u32 {
        if is_in_memory_sqlite(&self.url) {
            1
        } else {
            self.max_connections
        }
    }
}

impl From<&AppConfig> for DbConfig {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            url: cfg.database_url.clone(),
            max_connections: cfg.db_max_connections,
            min_connections: cfg.db_min_connections,
            connect_timeout: Duration::from_secs(cfg.db_connect_timeout_secs),
            idle_timeout: Duration::from_secs(cfg.db_idle_timeout_secs),
            acquire_timeout: Duration::from_secs(cfg.db_acquire_timeout_secs),
            sqlx_logging: cfg.sqlx_logging,
        }
    }
}

fn is_in_memory_sqlite(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

/// Establishes a connection pool with default tuning
///
/// # Errors
/// Returns an `AppError` if the connection cannot be established
pub async fn establish_connection(database_url: &str) -> Result<DbPool, AppError> {
    let config = DbConfig {
        url: database_url.to_string(),
        ..Default::default()
    };

    establish_connection_with_config(&config).await
}

/// Establishes a connection pool to the database with custom configuration
///
/// # Errors
/// Returns an `AppError` if the connection cannot be established
pub async fn establish_connection_with_config(config: &DbConfig) -> Result<DbPool, AppError> {
    debug!("Configuring database connection with: {:?}", config);

    let max_connections = config.effective_max_connections();
    let min_connections = config.min_connections.min(max_connections);

    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(max_connections)
        .min_connections(min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .sqlx_logging(config.sqlx_logging);

    gauge!("hospital_assets_db.max_connections", max_connections as f64);

    info!(max_connections, "Connecting to database");

    let db_pool = Database::connect(opt).await.map_err(|e| {
        error!("Database connection failed: {}", e);
        counter!("hospital_assets_db.connection_failures", 1);
        ServiceError::DatabaseError(e)
    })?;

    // SQLite only enforces foreign keys per connection when asked to
    if db_pool.get_database_backend() == DbBackend::Sqlite {
        db_pool
            .execute_unprepared("PRAGMA foreign_keys = ON")
            .await
            .map_err(ServiceError::DatabaseError)?;
    }

    info!("Database connection pool established successfully");

    Ok(db_pool)
}

/// Establish DB pool using AppConfig tuning
pub async fn establish_connection_from_app_config(cfg: &AppConfig) -> Result<DbPool, AppError> {
    let db_cfg: DbConfig = cfg.into();
    establish_connection_with_config(&db_cfg).await
}

fn migration_error(action: &str, err: sea_orm::DbErr) -> AppError {
    counter!("hospital_assets_db.migration_failures", 1, "action" => action.to_string());
    ServiceError::MigrationError(format!("{action} failed: {err}"))
}

/// Applies every pending migration in timestamp order
///
/// # Errors
/// Returns `MigrationError` if any migration fails; earlier ones stay applied
pub async fn run_migrations(pool: &DbPool) -> Result<(), AppError> {
    info!("Running database migrations");
    let start = Instant::now();

    let pending = Migrator::get_pending_migrations(pool)
        .await
        .map_err(|e| migration_error("listing pending migrations", e))?
        .len();

    let result = Migrator::up(pool, None)
        .await
        .map_err(|e| migration_error("migrate up", e));

    let elapsed = start.elapsed();
    histogram!("hospital_assets_db.migration.duration", elapsed);
    match &result {
        Ok(_) => {
            counter!("hospital_assets_db.migrations_applied", pending as u64);
            info!(applied = pending, "Database migrations completed in {:?}", elapsed);
        }
        Err(e) => error!("Database migrations failed after {:?}: {}", elapsed, e),
    }

    result
}

/// Reverts the last `steps` applied migrations, or all of them when `None`
pub async fn rollback_migrations(pool: &DbPool, steps: Option<u32>) -> Result<(), AppError> {
    match steps {
        Some(n) => info!("Rolling back {} migration(s)", n),
        None => warn!("Rolling back every applied migration"),
    }
    let start = Instant::now();

    let result = Migrator::down(pool, steps)
        .await
        .map_err(|e| migration_error("migrate down", e));

    let elapsed = start.elapsed();
    histogram!("hospital_assets_db.migration.duration", elapsed);
    match &result {
        Ok(_) => info!("Rollback completed in {:?}", elapsed),
        Err(e) => error!("Rollback failed after {:?}: {}", elapsed, e),
    }

    result
}

/// Rolls back everything, then reapplies the full sequence
pub async fn refresh_migrations(pool: &DbPool) -> Result<(), AppError> {
    warn!("Refreshing database schema: all migrations will be reverted and reapplied");
    Migrator::refresh(pool)
        .await
        .map_err(|e| migration_error("migrate refresh", e))
}

/// Names of migrations not yet applied, oldest first
pub async fn pending_migrations(pool: &DbPool) -> Result<Vec<String>, AppError> {
    let pending = Migrator::get_pending_migrations(pool)
        .await
        .map_err(|e| migration_error("listing pending migrations", e))?;

    Ok(pending.iter().map(|m| m.name().to_string()).collect())
}

/// Names of migrations already applied, oldest first
pub async fn applied_migrations(pool: &DbPool) -> Result<Vec<String>, AppError> {
    let applied = Migrator::get_applied_migrations(pool)
        .await
        .map_err(|e| migration_error("listing applied migrations", e))?;

    Ok(applied.iter().map(|m| m.name().to_string()).collect())
}

/// Checks if the database connection is active
pub async fn check_connection(pool: &DbPool) -> Result<(), AppError> {
    debug!("Checking database connection");
    let start = Instant::now();

    let result = pool.ping().await.map_err(ServiceError::DatabaseError);

    let elapsed = start.elapsed();
    match &result {
        Ok(_) => {
            debug!("Database connection check successful in {:?}", elapsed);
            gauge!("hospital_assets_db.connection_latency", elapsed.as_millis() as f64);
        }
        Err(e) => {
            error!("Database connection check failed after {:?}: {}", elapsed, e);
            counter!("hospital_assets_db.connection_failures", 1);
        }
    }

    result
}

/// Closes the database connection pool
pub async fn close_pool(pool: DbPool) -> Result<(), AppError> {
    info!("Closing database connection pool");

    pool.close().await.map_err(ServiceError::DatabaseError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_sqlite_is_pinned_to_one_connection() {
        let cfg = DbConfig {
            url: "sqlite::memory:".into(),
            max_connections: 8,
            ..Default::default()
        };
        assert_eq!(cfg.effective_max_connections(), 1);
    }

    #[test]
    fn file_sqlite_and_postgres_keep_pool_size() {
        for url in ["sqlite://assets.db?mode=rwc", "postgres://localhost/assets"] {
            let cfg = DbConfig {
                url: url.into(),
                max_connections: 8,
                ..Default::default()
            };
            assert_eq!(cfg.effective_max_connections(), 8);
        }
    }

    #[test]
    fn app_config_tuning_carries_over() {
        let mut app = AppConfig::new("postgres://localhost/assets".into(), "test".into());
        app.db_max_connections = 25;
        app.db_acquire_timeout_secs = 3;
        let cfg = DbConfig::from(&app);
        assert_eq!(cfg.max_connections, 25);
        assert_eq!(cfg.acquire_timeout, Duration::from_secs(3));
        assert_eq!(cfg.url, "postgres://localhost/assets");
    }

    #[tokio::test]
    async fn connects_to_in_memory_sqlite() {
        let pool = establish_connection("sqlite::memory:").await.unwrap();
        check_connection(&pool).await.unwrap();
        close_pool(pool).await.unwrap();
    }
}
