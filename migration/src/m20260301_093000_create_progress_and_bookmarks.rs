use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Progress::Table)
                    .if_not_exists()
                    .col(uuid(Progress::Id).primary_key())
                    .col(string(Progress::ItemId))
                    .col(string(Progress::ItemType))
                    .col(boolean(Progress::Completed).default(false))
                    .col(timestamp_with_time_zone(Progress::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Natural key: upserts rely on this index for ON CONFLICT
        manager
            .create_index(
                Index::create()
                    .name("idx_progress_item")
                    .table(Progress::Table)
                    .col(Progress::ItemId)
                    .col(Progress::ItemType)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Bookmarks::Table)
                    .if_not_exists()
                    .col(uuid(Bookmarks::Id).primary_key())
                    .col(string(Bookmarks::ItemId))
                    .col(string(Bookmarks::ItemType))
                    .col(string(Bookmarks::Title))
                    .col(timestamp_with_time_zone(Bookmarks::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookmarks_item")
                    .table(Bookmarks::Table)
                    .col(Bookmarks::ItemId)
                    .col(Bookmarks::ItemType)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookmarks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Progress::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Progress {
    Table,
    Id,
    ItemId,
    ItemType,
    Completed,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Bookmarks {
    Table,
    Id,
    ItemId,
    ItemType,
    Title,
    CreatedAt,
}
