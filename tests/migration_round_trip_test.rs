mod common;

use hospital_assets::errors::ServiceError;
use hospital_assets::schema::{self, TABLES};
use hospital_assets::{db, Migrator};
use assert_matches::assert_matches;
use sea_orm_migration::MigratorTrait;

#[tokio::test]
async fn full_sequence_applies_and_reverts_to_empty() {
    let pool = common::empty_db().await;

    schema::verify_empty(&pool).await.expect("starts empty");
    assert_eq!(db::pending_migrations(&pool).await.unwrap().len(), 12);

    db::run_migrations(&pool).await.expect("migrate up");
    schema::verify_migrated(&pool).await.expect("every table present");
    assert!(db::pending_migrations(&pool).await.unwrap().is_empty());
    assert_eq!(db::applied_migrations(&pool).await.unwrap().len(), 12);

    db::rollback_migrations(&pool, None).await.expect("migrate down");
    schema::verify_empty(&pool).await.expect("every table dropped");
    assert_eq!(db::pending_migrations(&pool).await.unwrap().len(), 12);
}

#[tokio::test]
async fn each_down_step_reverts_one_migration() {
    let pool = common::migrated_db().await;

    for remaining in (0..12usize).rev() {
        db::rollback_migrations(&pool, Some(1)).await.expect("step down");
        let applied = db::applied_migrations(&pool).await.unwrap();
        assert_eq!(applied.len(), remaining);
    }

    schema::verify_empty(&pool).await.expect("schema is empty");
}

#[tokio::test]
async fn partial_application_leaves_later_tables_missing() {
    let pool = common::empty_db().await;

    // identity, locations/vendors, assets
    Migrator::up(&pool, Some(3)).await.unwrap();

    let present = schema::present_tables(&pool).await.unwrap();
    assert!(present.contains(&"assets"));
    assert!(present.contains(&"asp_net_users"));
    assert!(!present.contains(&"inventory_items"));

    let missing = schema::missing_tables(&pool).await.unwrap();
    assert_eq!(present.len() + missing.len(), TABLES.len());
    assert!(missing.contains(&"bug_reports"));

    assert_matches!(
        schema::verify_migrated(&pool).await,
        Err(ServiceError::SchemaMismatch(msg)) if msg.contains("inventory_items")
    );
}

#[tokio::test]
async fn reverting_add_column_migrations_keeps_base_tables() {
    let pool = common::migrated_db().await;

    // analytics, calibration columns, warranty columns
    db::rollback_migrations(&pool, Some(3)).await.unwrap();

    let present = schema::present_tables(&pool).await.unwrap();
    assert!(present.contains(&"assets"));
    assert!(present.contains(&"inventory_items"));
    assert!(!present.contains(&"budgets"));

    db::run_migrations(&pool).await.expect("reapply");
    schema::verify_migrated(&pool).await.unwrap();
}

#[tokio::test]
async fn refresh_rebuilds_the_schema() {
    let (pool, _) = common::seeded_db().await;

    db::refresh_migrations(&pool).await.expect("refresh");

    schema::verify_migrated(&pool).await.unwrap();
    assert!(db::pending_migrations(&pool).await.unwrap().is_empty());
}
