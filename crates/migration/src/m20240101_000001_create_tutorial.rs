//! Create `tutorial` table.
//! Stores tutorial content along with its category and rating.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tutorial::Table)
                    .if_not_exists()
                    .col(pk_auto(Tutorial::Id))
                    .col(string_len(Tutorial::Title, 100))
                    .col(text(Tutorial::Body))
                    .col(text(Tutorial::Category))
                    .col(integer(Tutorial::Rating).default(0))
                    .col(timestamp_with_time_zone(Tutorial::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Category filtering is an equality lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_tutorial_category")
                    .table(Tutorial::Table)
                    .col(Tutorial::Category)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Tutorial::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Tutorial {
    Table,
    Id,
    Title,
    Body,
    Category,
    Rating,
    CreatedAt,
}
