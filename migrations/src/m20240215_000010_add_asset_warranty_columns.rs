use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// SQLite accepts a single alteration per ALTER TABLE, so each column is its own statement.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Assets::Table)
                    .add_column(ColumnDef::new(Assets::WarrantyStartDate).date().null())
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Assets::Table)
                    .add_column(ColumnDef::new(Assets::WarrantyExpiryDate).date().null())
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Assets::Table)
                    .add_column(ColumnDef::new(Assets::WarrantyProvider).string_len(200).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_assets_warranty_expiry_date")
                    .table(Assets::Table)
                    .col(Assets::WarrantyExpiryDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The index must go before its column can be dropped
        manager
            .drop_index(
                Index::drop()
                    .name("ix_assets_warranty_expiry_date")
                    .table(Assets::Table)
                    .to_owned(),
            )
            .await?;

        for column in [
            Assets::WarrantyProvider,
            Assets::WarrantyExpiryDate,
            Assets::WarrantyStartDate,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(Assets::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    WarrantyStartDate,
    WarrantyExpiryDate,
    WarrantyProvider,
}
