use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lessons::Table)
                    .if_not_exists()
                    .col(string(Lessons::Id).primary_key())
                    .col(string(Lessons::Title))
                    .col(text(Lessons::Description))
                    .col(string(Lessons::Level))
                    .col(integer(Lessons::DisplayOrder))
                    .col(integer(Lessons::DurationMinutes))
                    .col(string(Lessons::Category))
                    .col(string_null(Lessons::YoutubeId))
                    .col(json(Lessons::Content))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TheoryTopics::Table)
                    .if_not_exists()
                    .col(string(TheoryTopics::Id).primary_key())
                    .col(string(TheoryTopics::Title))
                    .col(text(TheoryTopics::Description))
                    .col(integer(TheoryTopics::DisplayOrder))
                    .col(string(TheoryTopics::Category))
                    .col(json(TheoryTopics::Content))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SheetMusic::Table)
                    .if_not_exists()
                    .col(string(SheetMusic::Id).primary_key())
                    .col(string(SheetMusic::Title))
                    .col(string(SheetMusic::Composer))
                    .col(string(SheetMusic::Difficulty))
                    .col(integer(SheetMusic::DisplayOrder))
                    .col(string(SheetMusic::Genre))
                    .col(string(SheetMusic::MusicKey))
                    .col(string(SheetMusic::TimeSignature))
                    .col(text(SheetMusic::Description))
                    .col(text(SheetMusic::Notes))
                    .col(string(SheetMusic::Attribution))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CareGuides::Table)
                    .if_not_exists()
                    .col(string(CareGuides::Id).primary_key())
                    .col(string(CareGuides::Title))
                    .col(text(CareGuides::Description))
                    .col(integer(CareGuides::DisplayOrder))
                    .col(string(CareGuides::Icon))
                    .col(json(CareGuides::Content))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CareGuides::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SheetMusic::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TheoryTopics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lessons::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Lessons {
    Table,
    Id,
    Title,
    Description,
    Level,
    DisplayOrder,
    DurationMinutes,
    Category,
    YoutubeId,
    Content,
}

#[derive(DeriveIden)]
enum TheoryTopics {
    Table,
    Id,
    Title,
    Description,
    DisplayOrder,
    Category,
    Content,
}

#[derive(DeriveIden)]
enum SheetMusic {
    Table,
    Id,
    Title,
    Composer,
    Difficulty,
    DisplayOrder,
    Genre,
    MusicKey,
    TimeSignature,
    Description,
    Notes,
    Attribution,
}

#[derive(DeriveIden)]
enum CareGuides {
    Table,
    Id,
    Title,
    Description,
    DisplayOrder,
    Icon,
    Content,
}
