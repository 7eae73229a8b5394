use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use hospital_assets::config::{init_tracing, load_config, AppConfig};
use hospital_assets::{db, schema, Migrator};
use sea_orm_migration::MigratorTrait;
use tracing::{info, warn};

/// Apply, revert and inspect the hospital asset schema.
#[derive(Debug, Parser)]
#[command(name = "migration", version, about)]
struct Cli {
    /// Overrides the configured database URL
    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending migrations (all of them unless `-n` is given)
    Up {
        #[arg(short = 'n', long)]
        steps: Option<u32>,
    },
    /// Revert applied migrations (the last one unless `-n` is given)
    Down {
        #[arg(short = 'n', long, default_value_t = 1)]
        steps: u32,
    },
    /// List applied and pending migrations
    Status,
    /// Revert everything, then apply the full sequence
    Fresh,
    /// Revert every applied migration
    Reset,
    /// Check that every table and business key exists
    Verify,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = match load_config() {
        Ok(cfg) => cfg,
        Err(e) if cli.database_url.is_some() => {
            eprintln!("Ignoring configuration error ({e}); using --database-url");
            AppConfig::new(String::new(), "development".to_string())
        }
        Err(e) => return Err(e).context("failed to load configuration"),
    };
    if let Some(url) = cli.database_url {
        cfg.database_url = url;
    }
    cfg.validate_all().context("invalid configuration")?;
    init_tracing(cfg.log_level(), cfg.log_json);

    if cfg.is_production() && matches!(cli.command, Command::Fresh | Command::Reset) {
        bail!("refusing to drop the schema in production");
    }

    let pool = db::establish_connection_from_app_config(&cfg).await?;

    match cli.command {
        Command::Up { steps: None } => db::run_migrations(&pool).await?,
        Command::Up { steps: Some(n) } => {
            info!("Applying up to {} migration(s)", n);
            Migrator::up(&pool, Some(n))
                .await
                .context("migrate up failed")?;
        }
        Command::Down { steps } => db::rollback_migrations(&pool, Some(steps)).await?,
        Command::Status => {
            for name in db::applied_migrations(&pool).await? {
                println!("applied  {name}");
            }
            let pending = db::pending_migrations(&pool).await?;
            for name in &pending {
                println!("pending  {name}");
            }
            if pending.is_empty() {
                info!("Schema is up to date");
            } else {
                warn!(pending = pending.len(), "Schema has pending migrations");
            }
        }
        Command::Fresh => db::refresh_migrations(&pool).await?,
        Command::Reset => {
            db::rollback_migrations(&pool, None).await?;
            schema::verify_empty(&pool).await?;
        }
        Command::Verify => {
            schema::verify_migrated(&pool).await?;
            println!(
                "{} tables and {} business keys present",
                schema::TABLES.len(),
                schema::BUSINESS_KEYS.len()
            );
        }
    }

    db::close_pool(pool).await?;
    Ok(())
}
