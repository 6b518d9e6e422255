use std::sync::Arc;

use entities::{
    prelude::{Bookmark, Lesson, PracticeLog, Progress, SheetMusic, TheoryTopic},
    practice_log, progress,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

use super::{Collection, CountFilter, PracticeSample, StatsStore, StoreError};

/// Store handle over the shared SeaORM connection pool.
#[derive(Clone)]
pub struct DbStore {
    db: Arc<DatabaseConnection>,
}

impl DbStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl StatsStore for DbStore {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn count(&self, collection: Collection, filter: CountFilter) -> Result<u64, StoreError> {
        let db = self.db.as_ref();
        let count = match (collection, filter) {
            (Collection::Lessons, CountFilter::All) => Lesson::find().count(db).await?,
            (Collection::Theory, CountFilter::All) => TheoryTopic::find().count(db).await?,
            (Collection::SheetMusic, CountFilter::All) => SheetMusic::find().count(db).await?,
            (Collection::Bookmarks, CountFilter::All) => Bookmark::find().count(db).await?,
            (Collection::Progress, CountFilter::Completed(item_type)) => {
                Progress::find()
                    .filter(progress::Column::ItemType.eq(item_type.as_str()))
                    .filter(progress::Column::Completed.eq(true))
                    .count(db)
                    .await?
            }
            (collection, filter) => {
                return Err(StoreError::UnsupportedFilter { collection, filter });
            }
        };
        tracing::debug!(?collection, count, "counted records");
        Ok(count)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn find_practice_samples(&self) -> Result<Vec<PracticeSample>, StoreError> {
        let rows: Vec<(String, Option<i32>)> = PracticeLog::find()
            .select_only()
            .column(practice_log::Column::Date)
            .column(practice_log::Column::DurationMinutes)
            .into_tuple()
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(date, duration_minutes)| PracticeSample {
                date,
                duration_minutes: duration_minutes.map(i64::from),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{ActiveModelTrait, Set};
    use uuid::Uuid;

    use super::*;
    use crate::domain::models::ItemType;
    use crate::storage::testing::memory_db;

    async fn insert_progress(db: &DatabaseConnection, item_id: &str, item_type: &str, completed: bool) {
        progress::ActiveModel {
            id: Set(Uuid::new_v4()),
            item_id: Set(item_id.to_string()),
            item_type: Set(item_type.to_string()),
            completed: Set(completed),
            updated_at: Set(Utc::now()),
        }
        .insert(db)
        .await
        .unwrap();
    }

    async fn insert_log(db: &DatabaseConnection, date: &str, duration_minutes: Option<i32>) {
        practice_log::ActiveModel {
            id: Set(Uuid::new_v4()),
            date: Set(date.to_string()),
            duration_minutes: Set(duration_minutes),
            notes: Set(String::new()),
            lesson_id: Set(None),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn completed_counts_only_match_type_and_flag() {
        let db = Arc::new(memory_db().await);
        insert_progress(&db, "lesson-1", "lesson", true).await;
        insert_progress(&db, "lesson-2", "lesson", true).await;
        insert_progress(&db, "lesson-3", "lesson", false).await;
        insert_progress(&db, "theory-1", "theory", true).await;
        insert_progress(&db, "sm-1", "sheet_music", true).await;

        let store = DbStore::new(db);
        let lessons = store
            .count(Collection::Progress, CountFilter::Completed(ItemType::Lesson))
            .await
            .unwrap();
        let theory = store
            .count(Collection::Progress, CountFilter::Completed(ItemType::Theory))
            .await
            .unwrap();

        assert_eq!(lessons, 2);
        assert_eq!(theory, 1);
    }

    #[tokio::test]
    async fn completed_filter_is_rejected_outside_progress() {
        let store = DbStore::new(Arc::new(memory_db().await));

        let result = store
            .count(Collection::Lessons, CountFilter::Completed(ItemType::Lesson))
            .await;

        assert!(matches!(
            result,
            Err(StoreError::UnsupportedFilter {
                collection: Collection::Lessons,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn progress_is_only_counted_by_completion() {
        let db = Arc::new(memory_db().await);
        insert_progress(&db, "lesson-1", "lesson", true).await;
        let store = DbStore::new(db);

        let result = store.count(Collection::Progress, CountFilter::All).await;

        assert!(matches!(
            result,
            Err(StoreError::UnsupportedFilter {
                collection: Collection::Progress,
                filter: CountFilter::All,
            })
        ));
    }

    #[tokio::test]
    async fn practice_samples_project_date_and_duration() {
        let db = Arc::new(memory_db().await);
        insert_log(&db, "2026-03-01", Some(30)).await;
        insert_log(&db, "2026-03-02", None).await;

        let mut samples = DbStore::new(db).find_practice_samples().await.unwrap();
        samples.sort_by(|a, b| a.date.cmp(&b.date));

        assert_eq!(
            samples,
            vec![
                PracticeSample {
                    date: "2026-03-01".into(),
                    duration_minutes: Some(30),
                },
                PracticeSample {
                    date: "2026-03-02".into(),
                    duration_minutes: None,
                },
            ]
        );
    }

    #[tokio::test]
    async fn empty_store_counts_zero() {
        let store = DbStore::new(Arc::new(memory_db().await));

        assert_eq!(
            store.count(Collection::Bookmarks, CountFilter::All).await.unwrap(),
            0
        );
        assert!(store.find_practice_samples().await.unwrap().is_empty());
    }
}
