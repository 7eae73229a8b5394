use sea_orm_migration::prelude::*;

use crate::column::MoneyColumn;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProcurementRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProcurementRequests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProcurementRequests::ProcurementNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProcurementRequests::Title).string_len(200).not_null())
                    .col(ColumnDef::new(ProcurementRequests::Description).text().null())
                    .col(ColumnDef::new(ProcurementRequests::Justification).text().null())
                    .col(ColumnDef::new(ProcurementRequests::Category).integer().not_null())
                    .col(
                        ColumnDef::new(ProcurementRequests::Priority)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(ProcurementRequests::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProcurementRequests::RequestedByUserId)
                            .string_len(450)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementRequests::Department)
                            .string_len(100)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementRequests::BudgetCode)
                            .string_len(50)
                            .null(),
                    )
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(ProcurementRequests::EstimatedBudget), manager)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(ProcurementRequests::ApprovedBudget), manager)
                            .null(),
                    )
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(ProcurementRequests::ActualCost), manager)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementRequests::Currency)
                            .string_len(3)
                            .not_null()
                            .default("USD"),
                    )
                    .col(ColumnDef::new(ProcurementRequests::RequiredBy).date().null())
                    .col(
                        ColumnDef::new(ProcurementRequests::SelectedVendorId)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementRequests::CurrentApprovalLevel)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProcurementRequests::RequiredApprovalLevels)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(ProcurementRequests::SubmittedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementRequests::ApprovedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementRequests::OrderedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementRequests::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementRequests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_procurement_requests_requested_by_user_id")
                            .from(
                                ProcurementRequests::Table,
                                ProcurementRequests::RequestedByUserId,
                            )
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_procurement_requests_selected_vendor_id")
                            .from(
                                ProcurementRequests::Table,
                                ProcurementRequests::SelectedVendorId,
                            )
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_procurement_requests_procurement_number")
                    .table(ProcurementRequests::Table)
                    .col(ProcurementRequests::ProcurementNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_procurement_requests_status")
                    .table(ProcurementRequests::Table)
                    .col(ProcurementRequests::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProcurementItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProcurementItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProcurementItems::ProcurementRequestId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProcurementItems::ItemName).string_len(200).not_null())
                    .col(ColumnDef::new(ProcurementItems::Description).text().null())
                    .col(ColumnDef::new(ProcurementItems::Specifications).text().null())
                    .col(ColumnDef::new(ProcurementItems::Quantity).integer().not_null())
                    .col(
                        ColumnDef::new(ProcurementItems::UnitOfMeasure)
                            .string_len(20)
                            .not_null()
                            .default("Each"),
                    )
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(ProcurementItems::EstimatedUnitPrice), manager)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(ProcurementItems::EstimatedTotal), manager)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(ProcurementItems::InventoryItemId).integer().null())
                    .col(
                        ColumnDef::new(ProcurementItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_procurement_items_procurement_request_id")
                            .from(ProcurementItems::Table, ProcurementItems::ProcurementRequestId)
                            .to(ProcurementRequests::Table, ProcurementRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_procurement_items_inventory_item_id")
                            .from(ProcurementItems::Table, ProcurementItems::InventoryItemId)
                            .to(InventoryItems::Table, InventoryItems::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_procurement_items_procurement_request_id")
                    .table(ProcurementItems::Table)
                    .col(ProcurementItems::ProcurementRequestId)
                    .to_owned(),
            )
            .await?;

        // Approval chain: one row per step, ordered by sequence
        manager
            .create_table(
                Table::create()
                    .table(ProcurementApprovals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProcurementApprovals::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProcurementApprovals::ProcurementRequestId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementApprovals::ApproverUserId)
                            .string_len(450)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementApprovals::ApprovalLevel)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementApprovals::Sequence)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementApprovals::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(ProcurementApprovals::Comments).text().null())
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(ProcurementApprovals::ApprovedAmount), manager)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementApprovals::DecidedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementApprovals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_procurement_approvals_procurement_request_id")
                            .from(
                                ProcurementApprovals::Table,
                                ProcurementApprovals::ProcurementRequestId,
                            )
                            .to(ProcurementRequests::Table, ProcurementRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_procurement_approvals_approver_user_id")
                            .from(
                                ProcurementApprovals::Table,
                                ProcurementApprovals::ApproverUserId,
                            )
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_procurement_approvals_procurement_request_id_sequence")
                    .table(ProcurementApprovals::Table)
                    .col(ProcurementApprovals::ProcurementRequestId)
                    .col(ProcurementApprovals::Sequence)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProcurementActivities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProcurementActivities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProcurementActivities::ProcurementRequestId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementActivities::ActivityType)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementActivities::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementActivities::PreviousStatus)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(ProcurementActivities::NewStatus).integer().null())
                    .col(
                        ColumnDef::new(ProcurementActivities::PerformedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementActivities::PerformedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_procurement_activities_procurement_request_id")
                            .from(
                                ProcurementActivities::Table,
                                ProcurementActivities::ProcurementRequestId,
                            )
                            .to(ProcurementRequests::Table, ProcurementRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_procurement_activities_performed_by_user_id")
                            .from(
                                ProcurementActivities::Table,
                                ProcurementActivities::PerformedByUserId,
                            )
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_procurement_activities_procurement_request_id")
                    .table(ProcurementActivities::Table)
                    .col(ProcurementActivities::ProcurementRequestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProcurementDocuments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProcurementDocuments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProcurementDocuments::ProcurementRequestId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementDocuments::DocumentType)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementDocuments::FileName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementDocuments::FilePath)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementDocuments::ContentType)
                            .string_len(100)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementDocuments::FileSize)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProcurementDocuments::UploadedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProcurementDocuments::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_procurement_documents_procurement_request_id")
                            .from(
                                ProcurementDocuments::Table,
                                ProcurementDocuments::ProcurementRequestId,
                            )
                            .to(ProcurementRequests::Table, ProcurementRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_procurement_documents_uploaded_by_user_id")
                            .from(
                                ProcurementDocuments::Table,
                                ProcurementDocuments::UploadedByUserId,
                            )
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_procurement_documents_procurement_request_id")
                    .table(ProcurementDocuments::Table)
                    .col(ProcurementDocuments::ProcurementRequestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VendorQuotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VendorQuotes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VendorQuotes::ProcurementRequestId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VendorQuotes::VendorId).integer().not_null())
                    .col(ColumnDef::new(VendorQuotes::QuoteNumber).string_len(50).not_null())
                    .col(
                        ColumnDef::new(VendorQuotes::QuoteDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VendorQuotes::ValidUntil)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(VendorQuotes::TotalAmount), manager)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(VendorQuotes::DeliveryDays).integer().null())
                    .col(ColumnDef::new(VendorQuotes::WarrantyTerms).string_len(500).null())
                    .col(ColumnDef::new(VendorQuotes::PaymentTerms).string_len(100).null())
                    .col(
                        ColumnDef::new(VendorQuotes::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(VendorQuotes::IsSelected)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(VendorQuotes::Notes).text().null())
                    .col(
                        ColumnDef::new(VendorQuotes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendor_quotes_procurement_request_id")
                            .from(VendorQuotes::Table, VendorQuotes::ProcurementRequestId)
                            .to(ProcurementRequests::Table, ProcurementRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendor_quotes_vendor_id")
                            .from(VendorQuotes::Table, VendorQuotes::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_vendor_quotes_vendor_id_quote_number")
                    .table(VendorQuotes::Table)
                    .col(VendorQuotes::VendorId)
                    .col(VendorQuotes::QuoteNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_vendor_quotes_procurement_request_id")
                    .table(VendorQuotes::Table)
                    .col(VendorQuotes::ProcurementRequestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(QuoteItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuoteItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(QuoteItems::VendorQuoteId).integer().not_null())
                    .col(ColumnDef::new(QuoteItems::ProcurementItemId).integer().null())
                    .col(ColumnDef::new(QuoteItems::Description).string_len(500).not_null())
                    .col(ColumnDef::new(QuoteItems::Quantity).integer().not_null())
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(QuoteItems::UnitPrice), manager)
                            .not_null(),
                    )
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(QuoteItems::TotalPrice), manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuoteItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quote_items_vendor_quote_id")
                            .from(QuoteItems::Table, QuoteItems::VendorQuoteId)
                            .to(VendorQuotes::Table, VendorQuotes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quote_items_procurement_item_id")
                            .from(QuoteItems::Table, QuoteItems::ProcurementItemId)
                            .to(ProcurementItems::Table, ProcurementItems::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_quote_items_vendor_quote_id")
                    .table(QuoteItems::Table)
                    .col(QuoteItems::VendorQuoteId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuoteItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VendorQuotes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProcurementDocuments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProcurementActivities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProcurementApprovals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProcurementItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProcurementRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProcurementRequests {
    Table,
    Id,
    ProcurementNumber,
    Title,
    Description,
    Justification,
    Category,
    Priority,
    Status,
    RequestedByUserId,
    Department,
    BudgetCode,
    EstimatedBudget,
    ApprovedBudget,
    ActualCost,
    Currency,
    RequiredBy,
    SelectedVendorId,
    CurrentApprovalLevel,
    RequiredApprovalLevels,
    SubmittedAt,
    ApprovedAt,
    OrderedAt,
    CompletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProcurementItems {
    Table,
    Id,
    ProcurementRequestId,
    ItemName,
    Description,
    Specifications,
    Quantity,
    UnitOfMeasure,
    EstimatedUnitPrice,
    EstimatedTotal,
    InventoryItemId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProcurementApprovals {
    Table,
    Id,
    ProcurementRequestId,
    ApproverUserId,
    ApprovalLevel,
    Sequence,
    Status,
    Comments,
    ApprovedAmount,
    DecidedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProcurementActivities {
    Table,
    Id,
    ProcurementRequestId,
    ActivityType,
    Description,
    PreviousStatus,
    NewStatus,
    PerformedByUserId,
    PerformedAt,
}

#[derive(DeriveIden)]
enum ProcurementDocuments {
    Table,
    Id,
    ProcurementRequestId,
    DocumentType,
    FileName,
    FilePath,
    ContentType,
    FileSize,
    UploadedByUserId,
    UploadedAt,
}

#[derive(DeriveIden)]
enum VendorQuotes {
    Table,
    Id,
    ProcurementRequestId,
    VendorId,
    QuoteNumber,
    QuoteDate,
    ValidUntil,
    TotalAmount,
    DeliveryDays,
    WarrantyTerms,
    PaymentTerms,
    Status,
    IsSelected,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum QuoteItems {
    Table,
    Id,
    VendorQuoteId,
    ProcurementItemId,
    Description,
    Quantity,
    UnitPrice,
    TotalPrice,
    CreatedAt,
}

#[derive(DeriveIden)]
enum InventoryItems {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Vendors {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum AspNetUsers {
    Table,
    Id,
}
