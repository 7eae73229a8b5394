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
                    .table(MaintenanceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MaintenanceRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MaintenanceRecords::AssetId).integer().not_null())
                    .col(
                        ColumnDef::new(MaintenanceRecords::MaintenanceType)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MaintenanceRecords::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(MaintenanceRecords::Description).text().not_null())
                    .col(
                        ColumnDef::new(MaintenanceRecords::RequestedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MaintenanceRecords::RequestedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MaintenanceRecords::ReviewedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MaintenanceRecords::ReviewedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MaintenanceRecords::ApprovedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MaintenanceRecords::ApprovedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MaintenanceRecords::ScheduledFor)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MaintenanceRecords::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MaintenanceRecords::PerformedBy)
                            .string_len(200)
                            .null(),
                    )
                    .col(ColumnDef::new(MaintenanceRecords::VendorId).integer().null())
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(MaintenanceRecords::Cost), manager)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MaintenanceRecords::ResolutionNotes)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MaintenanceRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MaintenanceRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_records_asset_id")
                            .from(MaintenanceRecords::Table, MaintenanceRecords::AssetId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_records_vendor_id")
                            .from(MaintenanceRecords::Table, MaintenanceRecords::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_records_requested_by_user_id")
                            .from(
                                MaintenanceRecords::Table,
                                MaintenanceRecords::RequestedByUserId,
                            )
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_records_reviewed_by_user_id")
                            .from(
                                MaintenanceRecords::Table,
                                MaintenanceRecords::ReviewedByUserId,
                            )
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_records_approved_by_user_id")
                            .from(
                                MaintenanceRecords::Table,
                                MaintenanceRecords::ApprovedByUserId,
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
                    .name("ix_maintenance_records_asset_id")
                    .table(MaintenanceRecords::Table)
                    .col(MaintenanceRecords::AssetId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_maintenance_records_status")
                    .table(MaintenanceRecords::Table)
                    .col(MaintenanceRecords::Status)
                    .to_owned(),
            )
            .await?;

        // Write-offs keep their asset alive: the asset row is audit evidence
        manager
            .create_table(
                Table::create()
                    .table(WriteOffRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WriteOffRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WriteOffRecords::WriteOffNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(WriteOffRecords::AssetId).integer().not_null())
                    .col(ColumnDef::new(WriteOffRecords::Reason).integer().not_null())
                    .col(
                        ColumnDef::new(WriteOffRecords::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(WriteOffRecords::Description).text().not_null())
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(WriteOffRecords::BookValue), manager)
                            .null(),
                    )
                    .col(ColumnDef::new(WriteOffRecords::DisposalMethod).integer().null())
                    .col(
                        ColumnDef::new(WriteOffRecords::RequestedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(WriteOffRecords::RequestedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WriteOffRecords::ReviewedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(WriteOffRecords::ReviewedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(WriteOffRecords::ApprovedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(WriteOffRecords::ApprovedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(WriteOffRecords::ProcessedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(WriteOffRecords::ProcessedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(WriteOffRecords::RejectionReason)
                            .string_len(500)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(WriteOffRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WriteOffRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_write_off_records_asset_id")
                            .from(WriteOffRecords::Table, WriteOffRecords::AssetId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_write_off_records_requested_by_user_id")
                            .from(WriteOffRecords::Table, WriteOffRecords::RequestedByUserId)
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_write_off_records_reviewed_by_user_id")
                            .from(WriteOffRecords::Table, WriteOffRecords::ReviewedByUserId)
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_write_off_records_approved_by_user_id")
                            .from(WriteOffRecords::Table, WriteOffRecords::ApprovedByUserId)
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_write_off_records_processed_by_user_id")
                            .from(WriteOffRecords::Table, WriteOffRecords::ProcessedByUserId)
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
                    .name("ix_write_off_records_write_off_number")
                    .table(WriteOffRecords::Table)
                    .col(WriteOffRecords::WriteOffNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_write_off_records_asset_id")
                    .table(WriteOffRecords::Table)
                    .col(WriteOffRecords::AssetId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WriteOffRecords::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MaintenanceRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MaintenanceRecords {
    Table,
    Id,
    AssetId,
    MaintenanceType,
    Status,
    Description,
    RequestedByUserId,
    RequestedAt,
    ReviewedByUserId,
    ReviewedAt,
    ApprovedByUserId,
    ApprovedAt,
    ScheduledFor,
    CompletedAt,
    PerformedBy,
    VendorId,
    Cost,
    ResolutionNotes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum WriteOffRecords {
    Table,
    Id,
    WriteOffNumber,
    AssetId,
    Reason,
    Status,
    Description,
    BookValue,
    DisposalMethod,
    RequestedByUserId,
    RequestedAt,
    ReviewedByUserId,
    ReviewedAt,
    ApprovedByUserId,
    ApprovedAt,
    ProcessedByUserId,
    ProcessedAt,
    RejectionReason,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assets {
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
