use sea_orm_migration::prelude::*;

use crate::column::MoneyColumn;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Assets are never deleted by the application; status carries retirement
        manager
            .create_table(
                Table::create()
                    .table(Assets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assets::AssetTag).string_len(50).not_null())
                    .col(ColumnDef::new(Assets::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Assets::Category).integer().not_null())
                    .col(ColumnDef::new(Assets::Brand).string_len(100).null())
                    .col(ColumnDef::new(Assets::Model).string_len(100).null())
                    .col(ColumnDef::new(Assets::SerialNumber).string_len(100).null())
                    .col(
                        ColumnDef::new(Assets::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Assets::LocationId).integer().not_null())
                    .col(
                        ColumnDef::new(Assets::AssignedToUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Assets::AssignedDepartment)
                            .string_len(100)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Assets::AssignedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Assets::PurchaseDate).date().null())
                    .col(MoneyColumn::money(&mut ColumnDef::new(Assets::PurchasePrice), manager).null())
                    .col(ColumnDef::new(Assets::VendorId).integer().null())
                    .col(ColumnDef::new(Assets::Hostname).string_len(100).null())
                    .col(ColumnDef::new(Assets::IpAddress).string_len(45).null())
                    .col(ColumnDef::new(Assets::MacAddress).string_len(17).null())
                    .col(ColumnDef::new(Assets::Notes).text().null())
                    .col(
                        ColumnDef::new(Assets::CreatedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Assets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assets_location_id")
                            .from(Assets::Table, Assets::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assets_assigned_to_user_id")
                            .from(Assets::Table, Assets::AssignedToUserId)
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assets_vendor_id")
                            .from(Assets::Table, Assets::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assets_created_by_user_id")
                            .from(Assets::Table, Assets::CreatedByUserId)
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
                    .name("ix_assets_asset_tag")
                    .table(Assets::Table)
                    .col(Assets::AssetTag)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_assets_serial_number")
                    .table(Assets::Table)
                    .col(Assets::SerialNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_assets_status")
                    .table(Assets::Table)
                    .col(Assets::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_assets_location_id")
                    .table(Assets::Table)
                    .col(Assets::LocationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_assets_assigned_to_user_id")
                    .table(Assets::Table)
                    .col(Assets::AssignedToUserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
    AssetTag,
    Name,
    Category,
    Brand,
    Model,
    SerialNumber,
    Status,
    LocationId,
    AssignedToUserId,
    AssignedDepartment,
    AssignedAt,
    PurchaseDate,
    PurchasePrice,
    VendorId,
    Hostname,
    IpAddress,
    MacAddress,
    Notes,
    CreatedByUserId,
    CreatedAt,
    UpdatedAt,
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
