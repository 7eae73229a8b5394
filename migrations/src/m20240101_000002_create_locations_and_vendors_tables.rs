use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Physical places assets and stock can live in
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Locations::Building).string_len(100).not_null())
                    .col(ColumnDef::new(Locations::Floor).string_len(50).not_null())
                    .col(ColumnDef::new(Locations::Room).string_len(50).not_null())
                    .col(ColumnDef::new(Locations::Department).string_len(100).null())
                    .col(ColumnDef::new(Locations::Description).string_len(500).null())
                    .col(
                        ColumnDef::new(Locations::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Locations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Locations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_locations_building_floor_room")
                    .table(Locations::Table)
                    .col(Locations::Building)
                    .col(Locations::Floor)
                    .col(Locations::Room)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Vendors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vendors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vendors::VendorCode).string_len(50).not_null())
                    .col(ColumnDef::new(Vendors::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Vendors::ContactPerson).string_len(200).null())
                    .col(ColumnDef::new(Vendors::Email).string_len(256).null())
                    .col(ColumnDef::new(Vendors::Phone).string_len(50).null())
                    .col(ColumnDef::new(Vendors::Address).string_len(500).null())
                    .col(ColumnDef::new(Vendors::TaxId).string_len(50).null())
                    .col(ColumnDef::new(Vendors::PaymentTerms).string_len(100).null())
                    .col(ColumnDef::new(Vendors::Rating).decimal_len(3, 2).null())
                    .col(
                        ColumnDef::new(Vendors::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Vendors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vendors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_vendors_vendor_code")
                    .table(Vendors::Table)
                    .col(Vendors::VendorCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_vendors_name")
                    .table(Vendors::Table)
                    .col(Vendors::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vendors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Locations {
    Table,
    Id,
    Name,
    Building,
    Floor,
    Room,
    Department,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Vendors {
    Table,
    Id,
    VendorCode,
    Name,
    ContactPerson,
    Email,
    Phone,
    Address,
    TaxId,
    PaymentTerms,
    Rating,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
