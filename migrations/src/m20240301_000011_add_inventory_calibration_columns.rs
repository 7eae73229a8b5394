use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(InventoryItems::Table)
                    .add_column(
                        ColumnDef::new(InventoryItems::RequiresCalibration)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(InventoryItems::Table)
                    .add_column(
                        ColumnDef::new(InventoryItems::CalibrationIntervalDays)
                            .integer()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(InventoryItems::Table)
                    .add_column(
                        ColumnDef::new(InventoryItems::LastCalibrationDate)
                            .date()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(InventoryItems::Table)
                    .add_column(
                        ColumnDef::new(InventoryItems::NextCalibrationDate)
                            .date()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(InventoryItems::Table)
                    .add_column(
                        ColumnDef::new(InventoryItems::CalibrationCertificate)
                            .string_len(100)
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            InventoryItems::CalibrationCertificate,
            InventoryItems::NextCalibrationDate,
            InventoryItems::LastCalibrationDate,
            InventoryItems::CalibrationIntervalDays,
            InventoryItems::RequiresCalibration,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(InventoryItems::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum InventoryItems {
    Table,
    RequiresCalibration,
    CalibrationIntervalDays,
    LastCalibrationDate,
    NextCalibrationDate,
    CalibrationCertificate,
}
