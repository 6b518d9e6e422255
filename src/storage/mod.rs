// Persistence port consumed by the statistics aggregator, plus its SeaORM implementation

pub mod database;
pub mod seed;
#[cfg(test)]
pub mod testing;

pub use database::DbStore;

use thiserror::Error;

use crate::domain::models::ItemType;

/// Record sets the aggregator counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Lessons,
    Theory,
    SheetMusic,
    /// Only counted through [`CountFilter::Completed`]
    Progress,
    Bookmarks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountFilter {
    All,
    /// Progress records of the given type with `completed = true`
    Completed(ItemType),
}

/// Practice log projected to the two fields the aggregator reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSample {
    pub date: String,
    pub duration_minutes: Option<i64>,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("persistence unavailable: {message}")]
    Unavailable { message: String },

    #[error("filter {filter:?} is not supported on {collection:?}")]
    UnsupportedFilter {
        collection: Collection,
        filter: CountFilter,
    },
}

impl From<sea_orm::DbErr> for StoreError {
    fn from(error: sea_orm::DbErr) -> Self {
        StoreError::Unavailable {
            message: error.to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait StatsStore: Send + Sync {
    async fn count(&self, collection: Collection, filter: CountFilter) -> Result<u64, StoreError>;

    /// Every practice log, projected to date and duration.
    async fn find_practice_samples(&self) -> Result<Vec<PracticeSample>, StoreError>;
}
