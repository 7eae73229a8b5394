use sea_orm_migration::prelude::*;

use crate::column::MoneyColumn;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Append-only: parents of ledger rows are restricted from deletion
        manager
            .create_table(
                Table::create()
                    .table(InventoryMovements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InventoryMovements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InventoryMovements::InventoryItemId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InventoryMovements::FromLocationId).integer().null())
                    .col(ColumnDef::new(InventoryMovements::ToLocationId).integer().null())
                    .col(ColumnDef::new(InventoryMovements::AssetId).integer().null())
                    .col(
                        ColumnDef::new(InventoryMovements::MovementType)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryMovements::Quantity)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryMovements::MovementDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryMovements::ReferenceNumber)
                            .string_len(100)
                            .null(),
                    )
                    .col(ColumnDef::new(InventoryMovements::Reason).string_len(500).null())
                    .col(
                        ColumnDef::new(InventoryMovements::PerformedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(InventoryMovements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_movements_inventory_item_id")
                            .from(InventoryMovements::Table, InventoryMovements::InventoryItemId)
                            .to(InventoryItems::Table, InventoryItems::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_movements_from_location_id")
                            .from(InventoryMovements::Table, InventoryMovements::FromLocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_movements_to_location_id")
                            .from(InventoryMovements::Table, InventoryMovements::ToLocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_movements_asset_id")
                            .from(InventoryMovements::Table, InventoryMovements::AssetId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_movements_performed_by_user_id")
                            .from(
                                InventoryMovements::Table,
                                InventoryMovements::PerformedByUserId,
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
                    .name("ix_inventory_movements_inventory_item_id")
                    .table(InventoryMovements::Table)
                    .col(InventoryMovements::InventoryItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_inventory_movements_movement_date")
                    .table(InventoryMovements::Table)
                    .col(InventoryMovements::MovementDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InventoryTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InventoryTransactions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InventoryTransactions::TransactionNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryTransactions::InventoryItemId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryTransactions::TransactionType)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryTransactions::Quantity)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryTransactions::QuantityBefore)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryTransactions::QuantityAfter)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(InventoryTransactions::UnitCost), manager)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(InventoryTransactions::TotalCost), manager)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(InventoryTransactions::VendorId).integer().null())
                    .col(
                        ColumnDef::new(InventoryTransactions::ReferenceNumber)
                            .string_len(100)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(InventoryTransactions::InvoiceNumber)
                            .string_len(100)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(InventoryTransactions::TransactionDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InventoryTransactions::Notes).text().null())
                    .col(
                        ColumnDef::new(InventoryTransactions::CreatedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(InventoryTransactions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_transactions_inventory_item_id")
                            .from(
                                InventoryTransactions::Table,
                                InventoryTransactions::InventoryItemId,
                            )
                            .to(InventoryItems::Table, InventoryItems::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_transactions_vendor_id")
                            .from(InventoryTransactions::Table, InventoryTransactions::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_transactions_created_by_user_id")
                            .from(
                                InventoryTransactions::Table,
                                InventoryTransactions::CreatedByUserId,
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
                    .name("ix_inventory_transactions_transaction_number")
                    .table(InventoryTransactions::Table)
                    .col(InventoryTransactions::TransactionNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_inventory_transactions_inventory_item_id")
                    .table(InventoryTransactions::Table)
                    .col(InventoryTransactions::InventoryItemId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryTransactions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryMovements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InventoryMovements {
    Table,
    Id,
    InventoryItemId,
    FromLocationId,
    ToLocationId,
    AssetId,
    MovementType,
    Quantity,
    MovementDate,
    ReferenceNumber,
    Reason,
    PerformedByUserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum InventoryTransactions {
    Table,
    Id,
    TransactionNumber,
    InventoryItemId,
    TransactionType,
    Quantity,
    QuantityBefore,
    QuantityAfter,
    UnitCost,
    TotalCost,
    VendorId,
    ReferenceNumber,
    InvoiceNumber,
    TransactionDate,
    Notes,
    CreatedByUserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum InventoryItems {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Locations {
    Table,
    Id,
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
