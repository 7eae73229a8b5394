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
                    .table(InventoryItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InventoryItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InventoryItems::ItemCode).string_len(50).not_null())
                    .col(ColumnDef::new(InventoryItems::Name).string_len(200).not_null())
                    .col(ColumnDef::new(InventoryItems::Description).text().null())
                    .col(ColumnDef::new(InventoryItems::Category).integer().not_null())
                    .col(
                        ColumnDef::new(InventoryItems::UnitOfMeasure)
                            .string_len(20)
                            .not_null()
                            .default("Each"),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::QuantityOnHand)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::MinimumStockLevel)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::MaximumStockLevel)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::ReorderPoint)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::ReorderQuantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(InventoryItems::UnitCost), manager)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(InventoryItems::Manufacturer).string_len(100).null())
                    .col(ColumnDef::new(InventoryItems::PartNumber).string_len(100).null())
                    .col(ColumnDef::new(InventoryItems::LocationId).integer().null())
                    .col(ColumnDef::new(InventoryItems::PreferredVendorId).integer().null())
                    .col(
                        ColumnDef::new(InventoryItems::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_items_location_id")
                            .from(InventoryItems::Table, InventoryItems::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_items_preferred_vendor_id")
                            .from(InventoryItems::Table, InventoryItems::PreferredVendorId)
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
                    .name("ix_inventory_items_item_code")
                    .table(InventoryItems::Table)
                    .col(InventoryItems::ItemCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_inventory_items_location_id")
                    .table(InventoryItems::Table)
                    .col(InventoryItems::LocationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_inventory_items_category")
                    .table(InventoryItems::Table)
                    .col(InventoryItems::Category)
                    .to_owned(),
            )
            .await?;

        // Deployment of stock onto assets
        manager
            .create_table(
                Table::create()
                    .table(AssetInventoryMappings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssetInventoryMappings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssetInventoryMappings::AssetId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssetInventoryMappings::InventoryItemId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssetInventoryMappings::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(AssetInventoryMappings::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AssetInventoryMappings::DeployedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssetInventoryMappings::DeployedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AssetInventoryMappings::ReturnedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AssetInventoryMappings::ReturnedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AssetInventoryMappings::ReturnReason)
                            .string_len(500)
                            .null(),
                    )
                    .col(ColumnDef::new(AssetInventoryMappings::Notes).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_inventory_mappings_asset_id")
                            .from(AssetInventoryMappings::Table, AssetInventoryMappings::AssetId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_inventory_mappings_inventory_item_id")
                            .from(
                                AssetInventoryMappings::Table,
                                AssetInventoryMappings::InventoryItemId,
                            )
                            .to(InventoryItems::Table, InventoryItems::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_inventory_mappings_deployed_by_user_id")
                            .from(
                                AssetInventoryMappings::Table,
                                AssetInventoryMappings::DeployedByUserId,
                            )
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_inventory_mappings_returned_by_user_id")
                            .from(
                                AssetInventoryMappings::Table,
                                AssetInventoryMappings::ReturnedByUserId,
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
                    .name("ix_asset_inventory_mappings_asset_id_inventory_item_id")
                    .table(AssetInventoryMappings::Table)
                    .col(AssetInventoryMappings::AssetId)
                    .col(AssetInventoryMappings::InventoryItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_asset_inventory_mappings_inventory_item_id")
                    .table(AssetInventoryMappings::Table)
                    .col(AssetInventoryMappings::InventoryItemId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AssetInventoryMappings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InventoryItems {
    Table,
    Id,
    ItemCode,
    Name,
    Description,
    Category,
    UnitOfMeasure,
    QuantityOnHand,
    MinimumStockLevel,
    MaximumStockLevel,
    ReorderPoint,
    ReorderQuantity,
    UnitCost,
    Manufacturer,
    PartNumber,
    LocationId,
    PreferredVendorId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AssetInventoryMappings {
    Table,
    Id,
    AssetId,
    InventoryItemId,
    Quantity,
    Status,
    DeployedAt,
    DeployedByUserId,
    ReturnedAt,
    ReturnedByUserId,
    ReturnReason,
    Notes,
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Locations {
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
