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
                    .table(Budgets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Budgets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Budgets::FiscalYear).integer().not_null())
                    .col(ColumnDef::new(Budgets::Department).string_len(100).not_null())
                    .col(ColumnDef::new(Budgets::Category).integer().not_null())
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(Budgets::AllocatedAmount), manager)
                            .not_null(),
                    )
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(Budgets::SpentAmount), manager)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(Budgets::CommittedAmount), manager)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Budgets::Notes).text().null())
                    .col(
                        ColumnDef::new(Budgets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Budgets::UpdatedAt)
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
                    .name("ix_budgets_fiscal_year_department_category")
                    .table(Budgets::Table)
                    .col(Budgets::FiscalYear)
                    .col(Budgets::Department)
                    .col(Budgets::Category)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Materialized by reporting jobs; rows are rebuilt, never edited
        manager
            .create_table(
                Table::create()
                    .table(SpendTrends::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpendTrends::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SpendTrends::PeriodStart).date().not_null())
                    .col(ColumnDef::new(SpendTrends::PeriodEnd).date().not_null())
                    .col(ColumnDef::new(SpendTrends::Department).string_len(100).null())
                    .col(ColumnDef::new(SpendTrends::Category).integer().null())
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(SpendTrends::TotalSpend), manager)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SpendTrends::TransactionCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        MoneyColumn::money(&mut ColumnDef::new(SpendTrends::AverageTransaction), manager)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SpendTrends::ComputedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_spend_trends_period_start")
                    .table(SpendTrends::Table)
                    .col(SpendTrends::PeriodStart)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BugReports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BugReports::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BugReports::Title).string_len(200).not_null())
                    .col(ColumnDef::new(BugReports::Description).text().not_null())
                    .col(ColumnDef::new(BugReports::Severity).integer().not_null())
                    .col(
                        ColumnDef::new(BugReports::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(BugReports::Module).string_len(100).null())
                    .col(ColumnDef::new(BugReports::StepsToReproduce).text().null())
                    .col(
                        ColumnDef::new(BugReports::ReportedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(BugReports::AssignedToUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(ColumnDef::new(BugReports::Resolution).text().null())
                    .col(
                        ColumnDef::new(BugReports::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BugReports::ResolvedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bug_reports_reported_by_user_id")
                            .from(BugReports::Table, BugReports::ReportedByUserId)
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bug_reports_assigned_to_user_id")
                            .from(BugReports::Table, BugReports::AssignedToUserId)
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
                    .name("ix_bug_reports_status")
                    .table(BugReports::Table)
                    .col(BugReports::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BugReports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SpendTrends::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Budgets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Budgets {
    Table,
    Id,
    FiscalYear,
    Department,
    Category,
    AllocatedAmount,
    SpentAmount,
    CommittedAmount,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SpendTrends {
    Table,
    Id,
    PeriodStart,
    PeriodEnd,
    Department,
    Category,
    TotalSpend,
    TransactionCount,
    AverageTransaction,
    ComputedAt,
}

#[derive(DeriveIden)]
enum BugReports {
    Table,
    Id,
    Title,
    Description,
    Severity,
    Status,
    Module,
    StepsToReproduce,
    ReportedByUserId,
    AssignedToUserId,
    Resolution,
    CreatedAt,
    ResolvedAt,
}

#[derive(DeriveIden)]
enum AspNetUsers {
    Table,
    Id,
}
