use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ItRequests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ItRequests::RequestNumber).string_len(50).not_null())
                    .col(ColumnDef::new(ItRequests::Title).string_len(200).not_null())
                    .col(ColumnDef::new(ItRequests::Description).text().not_null())
                    .col(ColumnDef::new(ItRequests::RequestType).integer().not_null())
                    .col(
                        ColumnDef::new(ItRequests::Priority)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(ItRequests::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ItRequests::RequestedByUserId)
                            .string_len(450)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ItRequests::AssignedToUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(ColumnDef::new(ItRequests::Department).string_len(100).null())
                    .col(ColumnDef::new(ItRequests::AssetId).integer().null())
                    .col(ColumnDef::new(ItRequests::LocationId).integer().null())
                    .col(
                        ColumnDef::new(ItRequests::DueDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ItRequests::ResolvedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ItRequests::ClosedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(ItRequests::ResolutionNotes).text().null())
                    .col(
                        ColumnDef::new(ItRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ItRequests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_it_requests_requested_by_user_id")
                            .from(ItRequests::Table, ItRequests::RequestedByUserId)
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_it_requests_assigned_to_user_id")
                            .from(ItRequests::Table, ItRequests::AssignedToUserId)
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_it_requests_asset_id")
                            .from(ItRequests::Table, ItRequests::AssetId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_it_requests_location_id")
                            .from(ItRequests::Table, ItRequests::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_it_requests_request_number")
                    .table(ItRequests::Table)
                    .col(ItRequests::RequestNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_it_requests_status")
                    .table(ItRequests::Table)
                    .col(ItRequests::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_it_requests_requested_by_user_id")
                    .table(ItRequests::Table)
                    .col(ItRequests::RequestedByUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RequestApprovals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequestApprovals::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RequestApprovals::RequestId).integer().not_null())
                    .col(
                        ColumnDef::new(RequestApprovals::ApproverUserId)
                            .string_len(450)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RequestApprovals::ApprovalLevel)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(RequestApprovals::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(RequestApprovals::Comments).text().null())
                    .col(
                        ColumnDef::new(RequestApprovals::DecidedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RequestApprovals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_approvals_request_id")
                            .from(RequestApprovals::Table, RequestApprovals::RequestId)
                            .to(ItRequests::Table, ItRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_approvals_approver_user_id")
                            .from(RequestApprovals::Table, RequestApprovals::ApproverUserId)
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
                    .name("ix_request_approvals_request_id")
                    .table(RequestApprovals::Table)
                    .col(RequestApprovals::RequestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RequestComments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequestComments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RequestComments::RequestId).integer().not_null())
                    .col(
                        ColumnDef::new(RequestComments::UserId)
                            .string_len(450)
                            .not_null(),
                    )
                    .col(ColumnDef::new(RequestComments::Comment).text().not_null())
                    .col(
                        ColumnDef::new(RequestComments::IsInternal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(RequestComments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_comments_request_id")
                            .from(RequestComments::Table, RequestComments::RequestId)
                            .to(ItRequests::Table, ItRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_comments_user_id")
                            .from(RequestComments::Table, RequestComments::UserId)
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
                    .name("ix_request_comments_request_id")
                    .table(RequestComments::Table)
                    .col(RequestComments::RequestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RequestAttachments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequestAttachments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RequestAttachments::RequestId).integer().not_null())
                    .col(
                        ColumnDef::new(RequestAttachments::FileName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RequestAttachments::FilePath)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RequestAttachments::ContentType)
                            .string_len(100)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RequestAttachments::FileSize)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(RequestAttachments::UploadedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RequestAttachments::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_attachments_request_id")
                            .from(RequestAttachments::Table, RequestAttachments::RequestId)
                            .to(ItRequests::Table, ItRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_attachments_uploaded_by_user_id")
                            .from(
                                RequestAttachments::Table,
                                RequestAttachments::UploadedByUserId,
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
                    .name("ix_request_attachments_request_id")
                    .table(RequestAttachments::Table)
                    .col(RequestAttachments::RequestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RequestEscalations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequestEscalations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RequestEscalations::RequestId).integer().not_null())
                    .col(
                        ColumnDef::new(RequestEscalations::EscalationLevel)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(RequestEscalations::Reason).text().not_null())
                    .col(
                        ColumnDef::new(RequestEscalations::EscalatedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RequestEscalations::EscalatedToUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RequestEscalations::EscalatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RequestEscalations::ResolvedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_escalations_request_id")
                            .from(RequestEscalations::Table, RequestEscalations::RequestId)
                            .to(ItRequests::Table, ItRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_escalations_escalated_by_user_id")
                            .from(
                                RequestEscalations::Table,
                                RequestEscalations::EscalatedByUserId,
                            )
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_escalations_escalated_to_user_id")
                            .from(
                                RequestEscalations::Table,
                                RequestEscalations::EscalatedToUserId,
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
                    .name("ix_request_escalations_request_id")
                    .table(RequestEscalations::Table)
                    .col(RequestEscalations::RequestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RequestActions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequestActions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RequestActions::RequestId).integer().not_null())
                    .col(ColumnDef::new(RequestActions::ActionType).integer().not_null())
                    .col(ColumnDef::new(RequestActions::Description).text().not_null())
                    .col(ColumnDef::new(RequestActions::PreviousStatus).integer().null())
                    .col(ColumnDef::new(RequestActions::NewStatus).integer().null())
                    .col(
                        ColumnDef::new(RequestActions::PerformedByUserId)
                            .string_len(450)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RequestActions::PerformedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_actions_request_id")
                            .from(RequestActions::Table, RequestActions::RequestId)
                            .to(ItRequests::Table, ItRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_actions_performed_by_user_id")
                            .from(RequestActions::Table, RequestActions::PerformedByUserId)
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
                    .name("ix_request_actions_request_id")
                    .table(RequestActions::Table)
                    .col(RequestActions::RequestId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RequestActions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RequestEscalations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RequestAttachments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RequestComments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RequestApprovals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ItRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ItRequests {
    Table,
    Id,
    RequestNumber,
    Title,
    Description,
    RequestType,
    Priority,
    Status,
    RequestedByUserId,
    AssignedToUserId,
    Department,
    AssetId,
    LocationId,
    DueDate,
    ResolvedAt,
    ClosedAt,
    ResolutionNotes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RequestApprovals {
    Table,
    Id,
    RequestId,
    ApproverUserId,
    ApprovalLevel,
    Status,
    Comments,
    DecidedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum RequestComments {
    Table,
    Id,
    RequestId,
    UserId,
    Comment,
    IsInternal,
    CreatedAt,
}

#[derive(DeriveIden)]
enum RequestAttachments {
    Table,
    Id,
    RequestId,
    FileName,
    FilePath,
    ContentType,
    FileSize,
    UploadedByUserId,
    UploadedAt,
}

#[derive(DeriveIden)]
enum RequestEscalations {
    Table,
    Id,
    RequestId,
    EscalationLevel,
    Reason,
    EscalatedByUserId,
    EscalatedToUserId,
    EscalatedAt,
    ResolvedAt,
}

#[derive(DeriveIden)]
enum RequestActions {
    Table,
    Id,
    RequestId,
    ActionType,
    Description,
    PreviousStatus,
    NewStatus,
    PerformedByUserId,
    PerformedAt,
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
enum AspNetUsers {
    Table,
    Id,
}
