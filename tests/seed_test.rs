mod common;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use hospital_assets::entities::identity::{role, user};
use hospital_assets::entities::procurement::{procurement_item, procurement_request, vendor_quote};
use hospital_assets::entities::requests::it_request;
use hospital_assets::entities::{asset, inventory_item, location};
use hospital_assets::errors::ServiceError;
use hospital_assets::seed;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, ModelTrait, PaginatorTrait, Set};

#[tokio::test]
async fn seeded_rows_resolve_through_relations() {
    let (pool, ids) = common::seeded_db().await;

    let laptop = asset::Entity::find_by_id(ids.laptop_asset_id)
        .one(&pool)
        .await
        .unwrap()
        .expect("seeded laptop");
    assert_eq!(laptop.asset_tag, "HOS-LT-0001");
    assert!(laptop.is_under_warranty(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));

    let ward = laptop
        .find_related(location::Entity)
        .one(&pool)
        .await
        .unwrap()
        .expect("laptop location");
    assert_eq!(ward.id, ids.ward_id);

    let deployed = laptop.find_related(inventory_item::Entity).all(&pool).await.unwrap();
    assert_eq!(deployed.len(), 1);
    assert_eq!(deployed[0].id, ids.ram_item_id);

    let admin = user::Entity::find_by_id(ids.admin_user_id.clone())
        .one(&pool)
        .await
        .unwrap()
        .expect("admin user");
    assert_eq!(admin.normalized_user_name.as_deref(), Some("ADMIN@HOSPITAL.LOCAL"));
    let roles = admin.find_related(role::Entity).all(&pool).await.unwrap();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].id, ids.admin_role_id);
}

#[tokio::test]
async fn seeded_procurement_has_items_and_quote() {
    let (pool, ids) = common::seeded_db().await;

    let pr = procurement_request::Entity::find_by_id(ids.procurement_request_id)
        .one(&pool)
        .await
        .unwrap()
        .expect("procurement request");
    assert!(!pr.is_fully_approved());

    let lines = pr.find_related(procurement_item::Entity).count(&pool).await.unwrap();
    assert_eq!(lines, 1);

    let quotes = pr.find_related(vendor_quote::Entity).all(&pool).await.unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].id, ids.vendor_quote_id);
    assert_eq!(quotes[0].vendor_id, ids.vendor_id);
}

#[tokio::test]
async fn calibration_schedule_is_derived_on_insert() {
    let (pool, ids) = common::seeded_db().await;

    let thermometer = inventory_item::Entity::find_by_id(ids.thermometer_item_id)
        .one(&pool)
        .await
        .unwrap()
        .expect("calibrated item");
    assert_eq!(
        thermometer.next_calibration_date,
        NaiveDate::from_ymd_opt(2025, 3, 1)
    );
    assert!(thermometer.calibration_due(NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()));
}

#[tokio::test]
async fn recording_a_calibration_moves_the_next_date() {
    let (pool, ids) = common::seeded_db().await;
    let thermometer = inventory_item::Entity::find_by_id(ids.thermometer_item_id)
        .one(&pool)
        .await
        .unwrap()
        .expect("calibrated item");

    let mut recalibrated = thermometer.into_active_model();
    recalibrated.last_calibration_date = Set(NaiveDate::from_ymd_opt(2025, 2, 1));
    let updated = recalibrated.update(&pool).await.expect("record calibration");

    assert_eq!(updated.calibration_interval_days, Some(365));
    assert_eq!(updated.next_calibration_date, NaiveDate::from_ymd_opt(2026, 2, 1));
    assert!(!updated.calibration_due(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
}

#[tokio::test]
async fn changing_the_interval_alone_moves_the_next_date() {
    let (pool, ids) = common::seeded_db().await;
    let thermometer = inventory_item::Entity::find_by_id(ids.thermometer_item_id)
        .one(&pool)
        .await
        .unwrap()
        .expect("calibrated item");

    let mut shorter = thermometer.into_active_model();
    shorter.calibration_interval_days = Set(Some(180));
    let updated = shorter.update(&pool).await.unwrap();

    assert_eq!(updated.next_calibration_date, NaiveDate::from_ymd_opt(2024, 8, 28));
}

#[tokio::test]
async fn seeding_twice_fails_without_partial_rows() {
    let (pool, _) = common::seeded_db().await;
    let requests_before = it_request::Entity::find().count(&pool).await.unwrap();
    let users_before = user::Entity::find().count(&pool).await.unwrap();

    let err = seed::seed_reference_data(&pool)
        .await
        .expect_err("business keys already taken");
    assert_matches!(err, ServiceError::UniqueViolation(_));

    assert_eq!(it_request::Entity::find().count(&pool).await.unwrap(), requests_before);
    assert_eq!(user::Entity::find().count(&pool).await.unwrap(), users_before);
}
