//! Reference data for development databases and tests.
//!
//! Everything is inserted in one transaction through the entity layer, so a
//! partial seed never survives. Business keys are fixed: running the seed a
//! second time fails with a unique violation and leaves the data untouched.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, DatabaseTransaction, Set, TransactionTrait};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::asset::{AssetCategory, AssetStatus};
use crate::entities::asset_inventory_mapping::DeploymentStatus;
use crate::entities::automation_rule::TriggerType;
use crate::entities::budget::BudgetCategory;
use crate::entities::identity::{role, user, user_role};
use crate::entities::inventory_item::{InventoryCategory, InventoryItemStatus};
use crate::entities::inventory_transaction::TransactionType;
use crate::entities::procurement::procurement_request::{ProcurementCategory, ProcurementStatus};
use crate::entities::procurement::vendor_quote::QuoteStatus;
use crate::entities::procurement::{
    procurement_approval, procurement_item, procurement_request, vendor_quote,
};
use crate::entities::requests::it_request::{RequestStatus, RequestType};
use crate::entities::requests::request_action::RequestActionType;
use crate::entities::requests::{it_request, request_action, request_comment};
use crate::entities::shared::{ApprovalStatus, Priority};
use crate::entities::{
    asset, asset_inventory_mapping, automation_rule, budget, inventory_item,
    inventory_transaction, location, vendor,
};
use crate::errors::AppError;

/// Primary keys of the seeded rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededIds {
    pub admin_role_id: String,
    pub admin_user_id: String,
    pub clinician_user_id: String,
    pub it_office_id: i32,
    pub ward_id: i32,
    pub vendor_id: i32,
    pub laptop_asset_id: i32,
    pub ram_item_id: i32,
    pub thermometer_item_id: i32,
    pub it_request_id: i32,
    pub procurement_request_id: i32,
    pub vendor_quote_id: i32,
}

/// Inserts the reference data set and returns the created keys.
#[instrument(skip(db))]
pub async fn seed_reference_data(db: &DbPool) -> Result<SeededIds, AppError> {
    let txn = db.begin().await?;
    let ids = seed_within(&txn).await?;
    txn.commit().await?;

    info!(
        assets = 1,
        inventory_items = 2,
        "Seeded reference data (admin user {})",
        ids.admin_user_id
    );
    Ok(ids)
}

async fn seed_within(txn: &DatabaseTransaction) -> Result<SeededIds, AppError> {
    let now = Utc::now();

    let admin_role = role::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(Some("Administrator".to_string())),
        normalized_name: Set(Some("ADMINISTRATOR".to_string())),
        concurrency_stamp: Set(Some(Uuid::new_v4().to_string())),
    }
    .insert(txn)
    .await?;

    role::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(Some("ItStaff".to_string())),
        normalized_name: Set(Some("ITSTAFF".to_string())),
        concurrency_stamp: Set(Some(Uuid::new_v4().to_string())),
    }
    .insert(txn)
    .await?;

    let admin = new_user(
        "admin@hospital.local",
        "IT Administrator",
        "Information Technology",
    )
    .insert(txn)
    .await?;
    let clinician = new_user("nurse.lee@hospital.local", "Jordan Lee", "Cardiology")
        .insert(txn)
        .await?;

    user_role::ActiveModel {
        user_id: Set(admin.id.clone()),
        role_id: Set(admin_role.id.clone()),
    }
    .insert(txn)
    .await?;

    let it_office = location::ActiveModel {
        name: Set("IT Service Desk".to_string()),
        building: Set("Main".to_string()),
        floor: Set("G".to_string()),
        room: Set("G-014".to_string()),
        department: Set(Some("Information Technology".to_string())),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let ward = location::ActiveModel {
        name: Set("Cardiology Ward".to_string()),
        building: Set("East Wing".to_string()),
        floor: Set("3".to_string()),
        room: Set("3-210".to_string()),
        department: Set(Some("Cardiology".to_string())),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let supplier = vendor::ActiveModel {
        vendor_code: Set("VND-0001".to_string()),
        name: Set("Northwind Medical IT".to_string()),
        contact_person: Set(Some("Sam Patel".to_string())),
        email: Set(Some("orders@northwind-med.example".to_string())),
        payment_terms: Set(Some("Net 30".to_string())),
        rating: Set(Some(dec!(4.50))),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let purchase_date = NaiveDate::from_ymd_opt(2024, 1, 15);
    let laptop = asset::ActiveModel {
        asset_tag: Set("HOS-LT-0001".to_string()),
        name: Set("Ward charting laptop".to_string()),
        category: Set(AssetCategory::Laptop),
        brand: Set(Some("Lenovo".to_string())),
        model: Set(Some("ThinkPad T14".to_string())),
        serial_number: Set(Some("PF3K9X21".to_string())),
        status: Set(AssetStatus::InUse),
        location_id: Set(ward.id),
        assigned_to_user_id: Set(Some(clinician.id.clone())),
        assigned_department: Set(Some("Cardiology".to_string())),
        assigned_at: Set(Some(now)),
        purchase_date: Set(purchase_date),
        purchase_price: Set(Some(dec!(1349.00))),
        vendor_id: Set(Some(supplier.id)),
        hostname: Set(Some("CARD-LT-0001".to_string())),
        created_by_user_id: Set(Some(admin.id.clone())),
        warranty_start_date: Set(purchase_date),
        warranty_expiry_date: Set(NaiveDate::from_ymd_opt(2027, 1, 14)),
        warranty_provider: Set(Some("Lenovo Premier Support".to_string())),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let ram = inventory_item::ActiveModel {
        item_code: Set("INV-RAM-16G".to_string()),
        name: Set("16GB DDR4 SODIMM".to_string()),
        category: Set(InventoryCategory::SparePart),
        unit_of_measure: Set("Each".to_string()),
        quantity_on_hand: Set(24),
        minimum_stock_level: Set(5),
        maximum_stock_level: Set(60),
        reorder_point: Set(10),
        reorder_quantity: Set(30),
        unit_cost: Set(dec!(42.00)),
        location_id: Set(Some(it_office.id)),
        preferred_vendor_id: Set(Some(supplier.id)),
        status: Set(InventoryItemStatus::Active),
        requires_calibration: Set(false),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let last_calibrated = NaiveDate::from_ymd_opt(2024, 3, 1);
    let thermometer = inventory_item::ActiveModel {
        item_code: Set("INV-CAL-THERM".to_string()),
        name: Set("Reference thermometer".to_string()),
        category: Set(InventoryCategory::CalibrationEquipment),
        unit_of_measure: Set("Each".to_string()),
        quantity_on_hand: Set(2),
        minimum_stock_level: Set(1),
        maximum_stock_level: Set(4),
        reorder_point: Set(1),
        reorder_quantity: Set(1),
        unit_cost: Set(dec!(310.00)),
        location_id: Set(Some(it_office.id)),
        status: Set(InventoryItemStatus::Active),
        requires_calibration: Set(true),
        calibration_interval_days: Set(Some(365)),
        last_calibration_date: Set(last_calibrated),
        calibration_certificate: Set(Some("CAL-2024-0311".to_string())),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    asset_inventory_mapping::ActiveModel {
        asset_id: Set(laptop.id),
        inventory_item_id: Set(ram.id),
        quantity: Set(1),
        status: Set(DeploymentStatus::Deployed),
        deployed_at: Set(now),
        deployed_by_user_id: Set(Some(admin.id.clone())),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    inventory_transaction::ActiveModel {
        transaction_number: Set("TXN-2024-000001".to_string()),
        inventory_item_id: Set(ram.id),
        transaction_type: Set(TransactionType::Receipt),
        quantity: Set(24),
        quantity_before: Set(0),
        quantity_after: Set(24),
        unit_cost: Set(dec!(42.00)),
        total_cost: Set(dec!(1008.00)),
        vendor_id: Set(Some(supplier.id)),
        invoice_number: Set(Some("NW-55812".to_string())),
        transaction_date: Set(now),
        created_by_user_id: Set(Some(admin.id.clone())),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let request = it_request::ActiveModel {
        request_number: Set("REQ-2024-0001".to_string()),
        title: Set("Laptop battery drains within an hour".to_string()),
        description: Set("Charting laptop on ward 3 cannot last a medication round.".to_string()),
        request_type: Set(RequestType::Repair),
        priority: Set(Priority::High),
        status: Set(RequestStatus::InProgress),
        requested_by_user_id: Set(clinician.id.clone()),
        assigned_to_user_id: Set(Some(admin.id.clone())),
        department: Set(Some("Cardiology".to_string())),
        asset_id: Set(Some(laptop.id)),
        location_id: Set(Some(ward.id)),
        due_date: Set(Some(now + Duration::days(2))),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    request_comment::ActiveModel {
        request_id: Set(request.id),
        user_id: Set(admin.id.clone()),
        comment: Set("Replacement battery ordered from stock.".to_string()),
        is_internal: Set(true),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    request_action::ActiveModel {
        request_id: Set(request.id),
        action_type: Set(RequestActionType::StatusChanged),
        description: Set("Picked up by service desk".to_string()),
        previous_status: Set(Some(RequestStatus::Submitted)),
        new_status: Set(Some(RequestStatus::InProgress)),
        performed_by_user_id: Set(Some(admin.id.clone())),
        performed_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let procurement = procurement_request::ActiveModel {
        procurement_number: Set("PR-2024-0001".to_string()),
        title: Set("Replacement laptop batteries".to_string()),
        justification: Set(Some("Ward laptops fail mid-shift".to_string())),
        category: Set(ProcurementCategory::Hardware),
        priority: Set(Priority::Medium),
        status: Set(ProcurementStatus::PendingApproval),
        requested_by_user_id: Set(admin.id.clone()),
        department: Set(Some("Information Technology".to_string())),
        budget_code: Set(Some("IT-HW-2024".to_string())),
        estimated_budget: Set(dec!(1200.00)),
        currency: Set("USD".to_string()),
        required_by: Set(NaiveDate::from_ymd_opt(2024, 6, 30)),
        current_approval_level: Set(0),
        required_approval_levels: Set(2),
        submitted_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let line = procurement_item::ActiveModel {
        procurement_request_id: Set(procurement.id),
        item_name: Set("T14 battery 57Wh".to_string()),
        quantity: Set(10),
        unit_of_measure: Set("Each".to_string()),
        estimated_unit_price: Set(dec!(120.00)),
        estimated_total: Set(dec!(1200.00)),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    procurement_approval::ActiveModel {
        procurement_request_id: Set(procurement.id),
        approver_user_id: Set(admin.id.clone()),
        approval_level: Set(1),
        sequence: Set(1),
        status: Set(ApprovalStatus::Pending),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let quote = vendor_quote::ActiveModel {
        procurement_request_id: Set(procurement.id),
        vendor_id: Set(supplier.id),
        quote_number: Set("NW-Q-3391".to_string()),
        quote_date: Set(now),
        valid_until: Set(Some(now + Duration::days(30))),
        total_amount: Set(dec!(1150.00)),
        delivery_days: Set(Some(5)),
        status: Set(QuoteStatus::Received),
        is_selected: Set(false),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    crate::entities::procurement::quote_item::ActiveModel {
        vendor_quote_id: Set(quote.id),
        procurement_item_id: Set(Some(line.id)),
        description: Set("T14 battery 57Wh, OEM".to_string()),
        quantity: Set(10),
        unit_price: Set(dec!(115.00)),
        total_price: Set(dec!(1150.00)),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    automation_rule::ActiveModel {
        name: Set("Low stock alert".to_string()),
        description: Set(Some("Notify IT when stock falls to the reorder point".to_string())),
        trigger_type: Set(TriggerType::LowStock),
        trigger_entity: Set("InventoryItem".to_string()),
        conditions: Set(json!({ "field": "quantity_on_hand", "lte": "reorder_point" })),
        actions: Set(json!([{ "type": "notify", "role": "ItStaff" }])),
        is_enabled: Set(true),
        priority: Set(10),
        created_by_user_id: Set(Some(admin.id.clone())),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    budget::ActiveModel {
        fiscal_year: Set(2024),
        department: Set("Information Technology".to_string()),
        category: Set(BudgetCategory::Hardware),
        allocated_amount: Set(dec!(250000.00)),
        spent_amount: Set(dec!(1349.00)),
        committed_amount: Set(dec!(1150.00)),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    Ok(SeededIds {
        admin_role_id: admin_role.id,
        admin_user_id: admin.id,
        clinician_user_id: clinician.id,
        it_office_id: it_office.id,
        ward_id: ward.id,
        vendor_id: supplier.id,
        laptop_asset_id: laptop.id,
        ram_item_id: ram.id,
        thermometer_item_id: thermometer.id,
        it_request_id: request.id,
        procurement_request_id: procurement.id,
        vendor_quote_id: quote.id,
    })
}

fn new_user(email: &str, full_name: &str, department: &str) -> user::ActiveModel {
    user::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        full_name: Set(full_name.to_string()),
        department: Set(Some(department.to_string())),
        is_active: Set(true),
        user_name: Set(Some(email.to_string())),
        email: Set(Some(email.to_string())),
        email_confirmed: Set(true),
        security_stamp: Set(Some(Uuid::new_v4().to_string())),
        concurrency_stamp: Set(Some(Uuid::new_v4().to_string())),
        phone_number_confirmed: Set(false),
        two_factor_enabled: Set(false),
        lockout_enabled: Set(true),
        access_failed_count: Set(0),
        ..Default::default()
    }
}
