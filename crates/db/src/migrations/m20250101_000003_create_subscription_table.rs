//! Create subscription table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subscription::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subscription::SubscriberId)
                            .string_len(320)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Subscription::TargetId)
                            .string_len(320)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Subscription::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: (subscriber_id, target_id) - subscribing is idempotent
        manager
            .create_index(
                Index::create()
                    .name("idx_subscription_subscriber_target")
                    .table(Subscription::Table)
                    .col(Subscription::SubscriberId)
                    .col(Subscription::TargetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: target_id (for resolving update recipients)
        manager
            .create_index(
                Index::create()
                    .name("idx_subscription_target_id")
                    .table(Subscription::Table)
                    .col(Subscription::TargetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subscription::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Subscription {
    Table,
    Id,
    SubscriberId,
    TargetId,
    CreatedAt,
}
