mod common;

use assert_matches::assert_matches;
use chrono::Utc;
use hospital_assets::entities::asset::{self, AssetStatus};
use hospital_assets::entities::inventory_item::{self, InventoryCategory};
use hospital_assets::entities::inventory_transaction::{self, TransactionType};
use hospital_assets::entities::maintenance_record::{self, MaintenanceType};
use hospital_assets::entities::procurement::procurement_request::{
    self, ProcurementCategory, ProcurementStatus,
};
use hospital_assets::entities::requests::it_request::{self, RequestType};
use hospital_assets::entities::shared::Priority;
use hospital_assets::entities::write_off_record::{self, WriteOffReason, WriteOffStatus};
use hospital_assets::entities::{location, vendor};
use hospital_assets::errors::ServiceError;
use rstest::rstest;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, PaginatorTrait, Set};

fn new_item(code: &str) -> inventory_item::ActiveModel {
    inventory_item::ActiveModel {
        item_code: Set(code.to_string()),
        name: Set(format!("Item {code}")),
        category: Set(InventoryCategory::Consumable),
        unit_of_measure: Set("Each".to_string()),
        quantity_on_hand: Set(0),
        minimum_stock_level: Set(0),
        maximum_stock_level: Set(10),
        reorder_point: Set(2),
        reorder_quantity: Set(5),
        unit_cost: Set(Decimal::new(150, 2)),
        requires_calibration: Set(false),
        ..Default::default()
    }
}

fn new_request(number: &str, requested_by: &str) -> it_request::ActiveModel {
    it_request::ActiveModel {
        request_number: Set(number.to_string()),
        title: Set("Printer jam".to_string()),
        description: Set("Ward printer jams on every job".to_string()),
        request_type: Set(RequestType::Hardware),
        priority: Set(Priority::Low),
        requested_by_user_id: Set(requested_by.to_string()),
        ..Default::default()
    }
}

fn new_procurement(number: &str, requested_by: &str) -> procurement_request::ActiveModel {
    procurement_request::ActiveModel {
        procurement_number: Set(number.to_string()),
        title: Set("Label printers".to_string()),
        category: Set(ProcurementCategory::Hardware),
        priority: Set(Priority::Medium),
        status: Set(ProcurementStatus::Draft),
        requested_by_user_id: Set(requested_by.to_string()),
        estimated_budget: Set(Decimal::new(80_000, 2)),
        currency: Set("USD".to_string()),
        current_approval_level: Set(0),
        required_approval_levels: Set(1),
        ..Default::default()
    }
}

fn new_write_off(number: &str, asset_id: i32) -> write_off_record::ActiveModel {
    write_off_record::ActiveModel {
        write_off_number: Set(number.to_string()),
        asset_id: Set(asset_id),
        reason: Set(WriteOffReason::EndOfLife),
        status: Set(WriteOffStatus::Requested),
        description: Set("Past support lifetime".to_string()),
        ..Default::default()
    }
}

fn new_receipt(number: &str, item_id: i32) -> inventory_transaction::ActiveModel {
    inventory_transaction::ActiveModel {
        transaction_number: Set(number.to_string()),
        inventory_item_id: Set(item_id),
        transaction_type: Set(TransactionType::Receipt),
        quantity: Set(10),
        quantity_before: Set(0),
        quantity_after: Set(10),
        unit_cost: Set(Decimal::new(150, 2)),
        total_cost: Set(Decimal::new(1_500, 2)),
        transaction_date: Set(Utc::now()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
}

#[rstest]
#[case::asset_tag("asset_tag")]
#[case::item_code("item_code")]
#[case::request_number("request_number")]
#[case::vendor_code("vendor_code")]
#[case::location_room("location")]
#[case::procurement_number("procurement_number")]
#[case::write_off_number("write_off_number")]
#[case::transaction_number("transaction_number")]
#[tokio::test]
async fn business_keys_reject_duplicates(#[case] key: &str) {
    let pool = common::migrated_db().await;
    let loc = common::create_location(&pool, "101").await;
    let user = common::create_user(&pool, "dup.tester").await;

    let second = match key {
        "asset_tag" => {
            common::create_asset(&pool, "HOS-DUP-1", loc.id).await;
            common::new_asset("HOS-DUP-1", loc.id).insert(&pool).await.map(|_| ())
        }
        "item_code" => {
            new_item("INV-DUP").insert(&pool).await.unwrap();
            new_item("INV-DUP").insert(&pool).await.map(|_| ())
        }
        "request_number" => {
            new_request("REQ-DUP", &user.id).insert(&pool).await.unwrap();
            new_request("REQ-DUP", &user.id).insert(&pool).await.map(|_| ())
        }
        "vendor_code" => {
            common::create_vendor(&pool, "VND-DUP").await;
            vendor::ActiveModel {
                vendor_code: Set("VND-DUP".to_string()),
                name: Set("Another vendor".to_string()),
                is_active: Set(true),
                ..Default::default()
            }
            .insert(&pool)
            .await
            .map(|_| ())
        }
        "location" => location::ActiveModel {
            name: Set("Same room, other name".to_string()),
            building: Set(loc.building.clone()),
            floor: Set(loc.floor.clone()),
            room: Set(loc.room.clone()),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(&pool)
        .await
        .map(|_| ()),
        "procurement_number" => {
            new_procurement("PR-DUP", &user.id).insert(&pool).await.unwrap();
            new_procurement("PR-DUP", &user.id).insert(&pool).await.map(|_| ())
        }
        "write_off_number" => {
            let scanner = common::create_asset(&pool, "HOS-WO-DUP", loc.id).await;
            new_write_off("WO-DUP", scanner.id).insert(&pool).await.unwrap();
            new_write_off("WO-DUP", scanner.id).insert(&pool).await.map(|_| ())
        }
        "transaction_number" => {
            let gloves = new_item("INV-GLV").insert(&pool).await.unwrap();
            new_receipt("TXN-DUP", gloves.id).insert(&pool).await.unwrap();
            new_receipt("TXN-DUP", gloves.id).insert(&pool).await.map(|_| ())
        }
        other => unreachable!("unknown key {other}"),
    };

    let err = ServiceError::from(second.expect_err("duplicate must be rejected"));
    assert_matches!(err, ServiceError::UniqueViolation(_));
}

#[tokio::test]
async fn asset_at_missing_location_is_rejected() {
    let pool = common::migrated_db().await;

    let err = common::new_asset("HOS-ORPHAN", 9_999)
        .insert(&pool)
        .await
        .expect_err("location 9999 does not exist");

    assert_matches!(ServiceError::from(err), ServiceError::ForeignKeyViolation(_));
}

#[tokio::test]
async fn request_from_unknown_user_is_rejected() {
    let pool = common::migrated_db().await;

    let err = new_request("REQ-ORPHAN", "no-such-user")
        .insert(&pool)
        .await
        .expect_err("requester does not exist");

    assert_matches!(ServiceError::from(err), ServiceError::ForeignKeyViolation(_));
}

#[tokio::test]
async fn deleting_an_asset_cascades_to_maintenance_records() {
    let pool = common::migrated_db().await;
    let loc = common::create_location(&pool, "202").await;
    let laptop = common::create_asset(&pool, "HOS-CASCADE", loc.id).await;

    for description in ["Replace fan", "Reimage"] {
        maintenance_record::ActiveModel {
            asset_id: Set(laptop.id),
            maintenance_type: Set(MaintenanceType::Corrective),
            description: Set(description.to_string()),
            ..Default::default()
        }
        .insert(&pool)
        .await
        .unwrap();
    }
    assert_eq!(laptop.find_related(maintenance_record::Entity).count(&pool).await.unwrap(), 2);

    laptop.delete(&pool).await.expect("asset delete cascades");

    assert_eq!(maintenance_record::Entity::find().count(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn location_with_assets_cannot_be_deleted() {
    let pool = common::migrated_db().await;
    let loc = common::create_location(&pool, "303").await;
    common::create_asset(&pool, "HOS-RESTRICT", loc.id).await;

    let err = location::Entity::delete_by_id(loc.id)
        .exec(&pool)
        .await
        .expect_err("assets still reference the location");

    assert_matches!(ServiceError::from(err), ServiceError::ForeignKeyViolation(_));
    assert!(location::Entity::find_by_id(loc.id).one(&pool).await.unwrap().is_some());
}

#[tokio::test]
async fn written_off_asset_cannot_be_deleted() {
    let pool = common::migrated_db().await;
    let loc = common::create_location(&pool, "404").await;
    let monitor = common::create_asset(&pool, "HOS-WO-1", loc.id).await;

    write_off_record::ActiveModel {
        write_off_number: Set("WO-2024-0001".to_string()),
        asset_id: Set(monitor.id),
        reason: Set(WriteOffReason::Damaged),
        status: Set(WriteOffStatus::Requested),
        description: Set("Cracked panel".to_string()),
        ..Default::default()
    }
    .insert(&pool)
    .await
    .unwrap();

    let err = asset::Entity::delete_by_id(monitor.id)
        .exec(&pool)
        .await
        .expect_err("write-off keeps the asset");

    assert_matches!(ServiceError::from(err), ServiceError::ForeignKeyViolation(_));
}

#[tokio::test]
async fn vendor_with_quotes_cannot_be_deleted() {
    let (pool, ids) = common::seeded_db().await;

    let err = vendor::Entity::delete_by_id(ids.vendor_id)
        .exec(&pool)
        .await
        .expect_err("quotes reference the vendor");

    assert_matches!(ServiceError::from(err), ServiceError::ForeignKeyViolation(_));
}

#[tokio::test]
async fn deleting_a_user_clears_asset_assignment() {
    let pool = common::migrated_db().await;
    let loc = common::create_location(&pool, "505").await;
    let user = common::create_user(&pool, "leaver").await;

    let assigned = asset::ActiveModel {
        assigned_to_user_id: Set(Some(user.id.clone())),
        assigned_at: Set(Some(Utc::now())),
        status: Set(AssetStatus::InUse),
        ..common::new_asset("HOS-SETNULL", loc.id)
    }
    .insert(&pool)
    .await
    .unwrap();

    user.delete(&pool).await.expect("user delete");

    let reloaded = asset::Entity::find_by_id(assigned.id)
        .one(&pool)
        .await
        .unwrap()
        .expect("asset survives");
    assert_eq!(reloaded.assigned_to_user_id, None);
    assert_eq!(reloaded.status, AssetStatus::InUse);
}

#[tokio::test]
async fn deleting_an_item_still_deployed_is_rejected() {
    let (pool, ids) = common::seeded_db().await;

    let err = inventory_item::Entity::delete_by_id(ids.ram_item_id)
        .exec(&pool)
        .await
        .expect_err("deployed on the seeded laptop");

    assert!(ServiceError::from(err).is_constraint_violation());
}

#[tokio::test]
async fn deleting_a_procurement_request_removes_its_details() {
    use hospital_assets::entities::procurement::{
        procurement_approval, procurement_item, quote_item, vendor_quote,
    };

    let (pool, ids) = common::seeded_db().await;

    procurement_request::Entity::delete_by_id(ids.procurement_request_id)
        .exec(&pool)
        .await
        .expect("details cascade");

    assert_eq!(procurement_item::Entity::find().count(&pool).await.unwrap(), 0);
    assert_eq!(procurement_approval::Entity::find().count(&pool).await.unwrap(), 0);
    assert_eq!(vendor_quote::Entity::find().count(&pool).await.unwrap(), 0);
    assert_eq!(quote_item::Entity::find().count(&pool).await.unwrap(), 0);
    assert!(vendor::Entity::find_by_id(ids.vendor_id).one(&pool).await.unwrap().is_some());
}

#[rstest]
#[case::overflowing(i32::MAX)]
#[case::negative(-30)]
#[tokio::test]
async fn out_of_range_calibration_interval_is_rejected(#[case] interval_days: i32) {
    let pool = common::migrated_db().await;

    let err = inventory_item::ActiveModel {
        requires_calibration: Set(true),
        calibration_interval_days: Set(Some(interval_days)),
        last_calibration_date: Set(chrono::NaiveDate::from_ymd_opt(2024, 1, 1)),
        ..new_item("INV-CAL-BAD")
    }
    .insert(&pool)
    .await
    .expect_err("interval cannot produce a valid next date");

    assert_matches!(err, sea_orm::DbErr::Custom(ref msg) if msg.contains("calibration"));
    assert_eq!(inventory_item::Entity::find().count(&pool).await.unwrap(), 0);
}
