use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PracticeLogs::Table)
                    .if_not_exists()
                    .col(uuid(PracticeLogs::Id).primary_key())
                    .col(string(PracticeLogs::Date))
                    .col(integer_null(PracticeLogs::DurationMinutes))
                    .col(text(PracticeLogs::Notes).default(""))
                    .col(string_null(PracticeLogs::LessonId))
                    .col(timestamp_with_time_zone(PracticeLogs::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_practice_logs_date")
                    .table(PracticeLogs::Table)
                    .col(PracticeLogs::Date)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ScheduleEntries::Table)
                    .if_not_exists()
                    .col(uuid(ScheduleEntries::Id).primary_key())
                    .col(integer(ScheduleEntries::DayOfWeek))
                    .col(string(ScheduleEntries::Time))
                    .col(integer(ScheduleEntries::DurationMinutes))
                    .col(string(ScheduleEntries::FocusArea))
                    .col(timestamp_with_time_zone(ScheduleEntries::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScheduleEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PracticeLogs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PracticeLogs {
    Table,
    Id,
    Date,
    DurationMinutes,
    Notes,
    LessonId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ScheduleEntries {
    Table,
    Id,
    DayOfWeek,
    Time,
    DurationMinutes,
    FocusArea,
    CreatedAt,
}
