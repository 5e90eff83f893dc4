//! Create friendship table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Friendship::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Friendship::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Friendship::UserA).string_len(320).not_null())
                    .col(ColumnDef::new(Friendship::UserB).string_len(320).not_null())
                    .col(
                        ColumnDef::new(Friendship::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Pair order is decided in Rust (byte order), not by the column collation
                    .check(Expr::col(Friendship::UserA).ne(Expr::col(Friendship::UserB)))
                    .to_owned(),
            )
            .await?;

        // Unique index: (user_a, user_b) - one edge per unordered pair
        manager
            .create_index(
                Index::create()
                    .name("idx_friendship_user_a_user_b")
                    .table(Friendship::Table)
                    .col(Friendship::UserA)
                    .col(Friendship::UserB)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: user_b (the unique index already covers lookups by user_a)
        manager
            .create_index(
                Index::create()
                    .name("idx_friendship_user_b")
                    .table(Friendship::Table)
                    .col(Friendship::UserB)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Friendship::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Friendship {
    Table,
    Id,
    UserA,
    UserB,
    CreatedAt,
}
