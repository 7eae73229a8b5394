#![allow(dead_code)]

use chrono::Utc;
use hospital_assets::db::{self, DbPool};
use hospital_assets::entities::asset::{self, AssetCategory};
use hospital_assets::entities::identity::user;
use hospital_assets::entities::{location, vendor};
use hospital_assets::seed::{self, SeededIds};
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

/// Fresh in-memory SQLite with foreign keys on and nothing applied.
pub async fn empty_db() -> DbPool {
    db::establish_connection("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite")
}

/// Fresh in-memory SQLite with the full migration sequence applied.
pub async fn migrated_db() -> DbPool {
    let pool = empty_db().await;
    db::run_migrations(&pool).await.expect("apply migrations");
    pool
}

pub async fn seeded_db() -> (DbPool, SeededIds) {
    let pool = migrated_db().await;
    let ids = seed::seed_reference_data(&pool)
        .await
        .expect("seed reference data");
    (pool, ids)
}

pub async fn create_user(db: &DbPool, user_name: &str) -> user::Model {
    user::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        full_name: Set(format!("Test {user_name}")),
        is_active: Set(true),
        user_name: Set(Some(user_name.to_string())),
        email: Set(Some(format!("{user_name}@hospital.test"))),
        email_confirmed: Set(false),
        security_stamp: Set(Some(Uuid::new_v4().to_string())),
        phone_number_confirmed: Set(false),
        two_factor_enabled: Set(false),
        lockout_enabled: Set(false),
        access_failed_count: Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert user")
}

pub async fn create_location(db: &DbPool, room: &str) -> location::Model {
    location::ActiveModel {
        name: Set(format!("Room {room}")),
        building: Set("Test Block".to_string()),
        floor: Set("1".to_string()),
        room: Set(room.to_string()),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert location")
}

pub async fn create_vendor(db: &DbPool, code: &str) -> vendor::Model {
    vendor::ActiveModel {
        vendor_code: Set(code.to_string()),
        name: Set(format!("Vendor {code}")),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert vendor")
}

/// Unsaved asset at `location_id`; callers adjust fields before inserting.
pub fn new_asset(tag: &str, location_id: i32) -> asset::ActiveModel {
    asset::ActiveModel {
        asset_tag: Set(tag.to_string()),
        name: Set(format!("Asset {tag}")),
        category: Set(AssetCategory::Desktop),
        location_id: Set(location_id),
        assigned_at: Set(None),
        purchase_date: Set(Some(Utc::now().date_naive())),
        ..Default::default()
    }
}

pub async fn create_asset(db: &DbPool, tag: &str, location_id: i32) -> asset::Model {
    new_asset(tag, location_id)
        .insert(db)
        .await
        .expect("insert asset")
}
