use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuditLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuditLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AuditLogs::UserId).string_len(450).null())
                    .col(ColumnDef::new(AuditLogs::Action).string_len(50).not_null())
                    .col(ColumnDef::new(AuditLogs::EntityName).string_len(100).not_null())
                    .col(ColumnDef::new(AuditLogs::EntityId).string_len(100).null())
                    .col(ColumnDef::new(AuditLogs::OldValues).text().null())
                    .col(ColumnDef::new(AuditLogs::NewValues).text().null())
                    .col(ColumnDef::new(AuditLogs::IpAddress).string_len(45).null())
                    .col(ColumnDef::new(AuditLogs::UserAgent).string_len(500).null())
                    .col(
                        ColumnDef::new(AuditLogs::OccurredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_audit_logs_user_id")
                            .from(AuditLogs::Table, AuditLogs::UserId)
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
                    .name("ix_audit_logs_entity_name_entity_id")
                    .table(AuditLogs::Table)
                    .col(AuditLogs::EntityName)
                    .col(AuditLogs::EntityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_audit_logs_occurred_at")
                    .table(AuditLogs::Table)
                    .col(AuditLogs::OccurredAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_audit_logs_user_id")
                    .table(AuditLogs::Table)
                    .col(AuditLogs::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AutomationRules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AutomationRules::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AutomationRules::Name).string_len(200).not_null())
                    .col(ColumnDef::new(AutomationRules::Description).text().null())
                    .col(ColumnDef::new(AutomationRules::TriggerType).integer().not_null())
                    .col(
                        ColumnDef::new(AutomationRules::TriggerEntity)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(AutomationRules::Conditions).json().not_null())
                    .col(ColumnDef::new(AutomationRules::Actions).json().not_null())
                    .col(
                        ColumnDef::new(AutomationRules::IsEnabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(AutomationRules::Priority)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AutomationRules::LastTriggeredAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AutomationRules::CreatedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AutomationRules::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AutomationRules::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_automation_rules_created_by_user_id")
                            .from(AutomationRules::Table, AutomationRules::CreatedByUserId)
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
                    .name("ix_automation_rules_name")
                    .table(AutomationRules::Table)
                    .col(AutomationRules::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AutomationLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AutomationLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AutomationLogs::AutomationRuleId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AutomationLogs::Status).integer().not_null())
                    .col(ColumnDef::new(AutomationLogs::Message).text().null())
                    .col(ColumnDef::new(AutomationLogs::EntityName).string_len(100).null())
                    .col(ColumnDef::new(AutomationLogs::EntityId).string_len(100).null())
                    .col(ColumnDef::new(AutomationLogs::DurationMs).integer().null())
                    .col(
                        ColumnDef::new(AutomationLogs::TriggeredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_automation_logs_automation_rule_id")
                            .from(AutomationLogs::Table, AutomationLogs::AutomationRuleId)
                            .to(AutomationRules::Table, AutomationRules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_automation_logs_automation_rule_id")
                    .table(AutomationLogs::Table)
                    .col(AutomationLogs::AutomationRuleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AutomationLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AutomationRules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AuditLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AuditLogs {
    Table,
    Id,
    UserId,
    Action,
    EntityName,
    EntityId,
    OldValues,
    NewValues,
    IpAddress,
    UserAgent,
    OccurredAt,
}

#[derive(DeriveIden)]
enum AutomationRules {
    Table,
    Id,
    Name,
    Description,
    TriggerType,
    TriggerEntity,
    Conditions,
    Actions,
    IsEnabled,
    Priority,
    LastTriggeredAt,
    CreatedByUserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AutomationLogs {
    Table,
    Id,
    AutomationRuleId,
    Status,
    Message,
    EntityName,
    EntityId,
    DurationMs,
    TriggeredAt,
}

#[derive(DeriveIden)]
enum AspNetUsers {
    Table,
    Id,
}
