//! Seed data script - populates a development database with reference data
//!
//! Run with: cargo run --bin seed-data -- --force [--migrate]
//!
//! This creates:
//! - an administrator and a clinician with roles
//! - two locations and one vendor
//! - a deployed laptop, two stock items and a receipt transaction
//! - an open IT request and a procurement request with a vendor quote

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;

use hospital_assets::config::{init_tracing, load_config};
use hospital_assets::{db, schema, seed};

#[derive(Debug, Parser)]
#[command(name = "seed-data", version, about = "Insert reference data")]
struct Args {
    /// Overrides the configured database URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Apply pending migrations first
    #[arg(long)]
    migrate: bool,

    /// Seed even when `seed_on_start` is off
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut cfg = load_config().context("failed to load configuration")?;
    if let Some(url) = args.database_url {
        cfg.database_url = url;
    }
    cfg.validate_all().context("invalid configuration")?;
    init_tracing(cfg.log_level(), cfg.log_json);

    if cfg.is_production() {
        bail!("reference data must not be seeded into production");
    }
    if !(args.force || cfg.seed_on_start) {
        bail!("seeding is disabled; set APP__SEED_ON_START=true or pass --force");
    }

    info!("=== Hospital Assets Seed Data ===");
    let pool = db::establish_connection_from_app_config(&cfg).await?;
    info!("Connected!");

    if args.migrate || cfg.auto_migrate {
        db::run_migrations(&pool).await?;
    }
    schema::verify_migrated(&pool)
        .await
        .context("schema is not migrated; run `migration up` or pass --migrate")?;

    let ids = seed::seed_reference_data(&pool).await?;

    info!("=== Seed Complete ===");
    info!("  Admin user:          {}", ids.admin_user_id);
    info!("  Laptop asset:        {}", ids.laptop_asset_id);
    info!("  IT request:          {}", ids.it_request_id);
    info!("  Procurement request: {}", ids.procurement_request_id);

    db::close_pool(pool).await?;
    Ok(())
}
