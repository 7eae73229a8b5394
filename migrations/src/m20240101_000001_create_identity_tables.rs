use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AspNetRoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AspNetRoles::Id)
                            .string_len(450)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AspNetRoles::Name).string_len(256).null())
                    .col(
                        ColumnDef::new(AspNetRoles::NormalizedName)
                            .string_len(256)
                            .null(),
                    )
                    .col(ColumnDef::new(AspNetRoles::ConcurrencyStamp).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_asp_net_roles_normalized_name")
                    .table(AspNetRoles::Table)
                    .col(AspNetRoles::NormalizedName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AspNetUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AspNetUsers::Id)
                            .string_len(450)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AspNetUsers::FullName).string_len(200).not_null())
                    .col(ColumnDef::new(AspNetUsers::Department).string_len(100).null())
                    .col(ColumnDef::new(AspNetUsers::JobTitle).string_len(100).null())
                    .col(
                        ColumnDef::new(AspNetUsers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(AspNetUsers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AspNetUsers::LastLoginAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(AspNetUsers::UserName).string_len(256).null())
                    .col(
                        ColumnDef::new(AspNetUsers::NormalizedUserName)
                            .string_len(256)
                            .null(),
                    )
                    .col(ColumnDef::new(AspNetUsers::Email).string_len(256).null())
                    .col(
                        ColumnDef::new(AspNetUsers::NormalizedEmail)
                            .string_len(256)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AspNetUsers::EmailConfirmed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(AspNetUsers::PasswordHash).text().null())
                    .col(ColumnDef::new(AspNetUsers::SecurityStamp).text().null())
                    .col(ColumnDef::new(AspNetUsers::ConcurrencyStamp).text().null())
                    .col(ColumnDef::new(AspNetUsers::PhoneNumber).text().null())
                    .col(
                        ColumnDef::new(AspNetUsers::PhoneNumberConfirmed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AspNetUsers::TwoFactorEnabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AspNetUsers::LockoutEnd)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AspNetUsers::LockoutEnabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AspNetUsers::AccessFailedCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_asp_net_users_normalized_user_name")
                    .table(AspNetUsers::Table)
                    .col(AspNetUsers::NormalizedUserName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_asp_net_users_normalized_email")
                    .table(AspNetUsers::Table)
                    .col(AspNetUsers::NormalizedEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AspNetRoleClaims::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AspNetRoleClaims::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AspNetRoleClaims::RoleId)
                            .string_len(450)
                            .not_null(),
                    )
                    .col(ColumnDef::new(AspNetRoleClaims::ClaimType).text().null())
                    .col(ColumnDef::new(AspNetRoleClaims::ClaimValue).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asp_net_role_claims_role_id")
                            .from(AspNetRoleClaims::Table, AspNetRoleClaims::RoleId)
                            .to(AspNetRoles::Table, AspNetRoles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_asp_net_role_claims_role_id")
                    .table(AspNetRoleClaims::Table)
                    .col(AspNetRoleClaims::RoleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AspNetUserClaims::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AspNetUserClaims::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AspNetUserClaims::UserId)
                            .string_len(450)
                            .not_null(),
                    )
                    .col(ColumnDef::new(AspNetUserClaims::ClaimType).text().null())
                    .col(ColumnDef::new(AspNetUserClaims::ClaimValue).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asp_net_user_claims_user_id")
                            .from(AspNetUserClaims::Table, AspNetUserClaims::UserId)
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_asp_net_user_claims_user_id")
                    .table(AspNetUserClaims::Table)
                    .col(AspNetUserClaims::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AspNetUserLogins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AspNetUserLogins::LoginProvider)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AspNetUserLogins::ProviderKey)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AspNetUserLogins::ProviderDisplayName)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AspNetUserLogins::UserId)
                            .string_len(450)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_asp_net_user_logins")
                            .col(AspNetUserLogins::LoginProvider)
                            .col(AspNetUserLogins::ProviderKey),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asp_net_user_logins_user_id")
                            .from(AspNetUserLogins::Table, AspNetUserLogins::UserId)
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_asp_net_user_logins_user_id")
                    .table(AspNetUserLogins::Table)
                    .col(AspNetUserLogins::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AspNetUserRoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AspNetUserRoles::UserId)
                            .string_len(450)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AspNetUserRoles::RoleId)
                            .string_len(450)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_asp_net_user_roles")
                            .col(AspNetUserRoles::UserId)
                            .col(AspNetUserRoles::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asp_net_user_roles_user_id")
                            .from(AspNetUserRoles::Table, AspNetUserRoles::UserId)
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asp_net_user_roles_role_id")
                            .from(AspNetUserRoles::Table, AspNetUserRoles::RoleId)
                            .to(AspNetRoles::Table, AspNetRoles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_asp_net_user_roles_role_id")
                    .table(AspNetUserRoles::Table)
                    .col(AspNetUserRoles::RoleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AspNetUserTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AspNetUserTokens::UserId)
                            .string_len(450)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AspNetUserTokens::LoginProvider)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AspNetUserTokens::Name)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(AspNetUserTokens::Value).text().null())
                    .primary_key(
                        Index::create()
                            .name("pk_asp_net_user_tokens")
                            .col(AspNetUserTokens::UserId)
                            .col(AspNetUserTokens::LoginProvider)
                            .col(AspNetUserTokens::Name),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asp_net_user_tokens_user_id")
                            .from(AspNetUserTokens::Table, AspNetUserTokens::UserId)
                            .to(AspNetUsers::Table, AspNetUsers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AspNetUserTokens::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AspNetUserRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AspNetUserLogins::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AspNetUserClaims::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AspNetRoleClaims::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AspNetUsers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AspNetRoles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AspNetRoles {
    Table,
    Id,
    Name,
    NormalizedName,
    ConcurrencyStamp,
}

#[derive(DeriveIden)]
enum AspNetUsers {
    Table,
    Id,
    FullName,
    Department,
    JobTitle,
    IsActive,
    CreatedAt,
    LastLoginAt,
    UserName,
    NormalizedUserName,
    Email,
    NormalizedEmail,
    EmailConfirmed,
    PasswordHash,
    SecurityStamp,
    ConcurrencyStamp,
    PhoneNumber,
    PhoneNumberConfirmed,
    TwoFactorEnabled,
    LockoutEnd,
    LockoutEnabled,
    AccessFailedCount,
}

#[derive(DeriveIden)]
enum AspNetRoleClaims {
    Table,
    Id,
    RoleId,
    ClaimType,
    ClaimValue,
}

#[derive(DeriveIden)]
enum AspNetUserClaims {
    Table,
    Id,
    UserId,
    ClaimType,
    ClaimValue,
}

#[derive(DeriveIden)]
enum AspNetUserLogins {
    Table,
    LoginProvider,
    ProviderKey,
    ProviderDisplayName,
    UserId,
}

#[derive(DeriveIden)]
enum AspNetUserRoles {
    Table,
    UserId,
    RoleId,
}

#[derive(DeriveIden)]
enum AspNetUserTokens {
    Table,
    UserId,
    LoginProvider,
    Name,
    Value,
}
