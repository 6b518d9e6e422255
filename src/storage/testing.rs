// Test doubles and an in-memory database for store-backed tests

use std::sync::Mutex;

use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use super::{Collection, CountFilter, PracticeSample, StatsStore, StoreError};
use crate::domain::models::ItemType;

/// Fresh SQLite database living in memory with all migrations applied.
pub async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // A second pooled connection would open a different, empty database
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("in-memory sqlite should open");
    migration::Migrator::up(&db, None)
        .await
        .expect("migrations should apply");
    db
}

/// Store answering from fixed values.
#[derive(Debug, Default)]
pub struct StubStore {
    pub lessons: u64,
    pub theory: u64,
    pub sheet_music: u64,
    pub bookmarks: u64,
    pub completed_lessons: u64,
    pub completed_theory: u64,
    pub samples: Vec<PracticeSample>,
    pub(crate) calls: Mutex<usize>,
}

impl StubStore {
    pub fn with_samples(samples: Vec<PracticeSample>) -> Self {
        Self {
            samples,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn record_call(&self) {
        *self.calls.lock().unwrap() += 1;
    }
}

#[async_trait::async_trait]
impl StatsStore for StubStore {
    async fn count(&self, collection: Collection, filter: CountFilter) -> Result<u64, StoreError> {
        self.record_call();
        match (collection, filter) {
            (Collection::Lessons, CountFilter::All) => Ok(self.lessons),
            (Collection::Theory, CountFilter::All) => Ok(self.theory),
            (Collection::SheetMusic, CountFilter::All) => Ok(self.sheet_music),
            (Collection::Bookmarks, CountFilter::All) => Ok(self.bookmarks),
            (Collection::Progress, CountFilter::Completed(ItemType::Lesson)) => {
                Ok(self.completed_lessons)
            }
            (Collection::Progress, CountFilter::Completed(ItemType::Theory)) => {
                Ok(self.completed_theory)
            }
            (collection, filter) => Err(StoreError::UnsupportedFilter { collection, filter }),
        }
    }

    async fn find_practice_samples(&self) -> Result<Vec<PracticeSample>, StoreError> {
        self.record_call();
        Ok(self.samples.clone())
    }
}

/// Store whose every read fails, as if the database went away.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait::async_trait]
impl StatsStore for FailingStore {
    async fn count(&self, _collection: Collection, _filter: CountFilter) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable {
            message: "connection refused".to_string(),
        })
    }

    async fn find_practice_samples(&self) -> Result<Vec<PracticeSample>, StoreError> {
        Err(StoreError::Unavailable {
            message: "connection refused".to_string(),
        })
    }
}
