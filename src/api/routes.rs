use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use sea_orm::DatabaseConnection;

use super::models::{
    BookmarkCreateDto, BookmarkCreateResponse, BookmarkListResponse, CareGuideListResponse,
    CareGuideResponse, DeleteResponse, HealthResponse, LessonListResponse, LessonResponse,
    PracticeLogCreateDto, PracticeLogCreateResponse, PracticeLogListResponse,
    ProgressListResponse, ProgressUpdateDto, ProgressUpdateResponse, ScheduleCreateDto,
    ScheduleCreateResponse, ScheduleListResponse, SheetMusicListResponse, SheetMusicResponse,
    StatisticsResponse, TheoryListResponse, TheoryResponse,
};
use super::services::{
    bookmarks::BookmarkService, catalog::CatalogService, health::HealthService,
    practice::PracticeLogService, progress::ProgressService, schedule::ScheduleService,
    stats::StatsService,
};
use crate::storage::{DbStore, StatsStore};

pub struct VirtuosoApi {
    pub db: Arc<DatabaseConnection>,
    pub stats_store: Arc<dyn StatsStore>,
}

impl VirtuosoApi {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let stats_store = Arc::new(DbStore::new(db.clone()));
        Self { db, stats_store }
    }

    /// Replaces the store the statistics endpoint reads from.
    #[cfg(test)]
    pub fn with_stats_store(mut self, stats_store: Arc<dyn StatsStore>) -> Self {
        self.stats_store = stats_store;
        self
    }
}

#[OpenApi]
impl VirtuosoApi {
    #[oai(path = "/health", method = "get")]
    #[tracing::instrument(level = "debug", skip(self))]
    async fn health(&self) -> HealthResponse {
        HealthService.status()
    }

    // ===== Catalog =====

    /// All lessons ordered by position
    #[oai(path = "/lessons", method = "get")]
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_lessons(&self) -> LessonListResponse {
        CatalogService::new(&self.db).list_lessons().await
    }

    #[oai(path = "/lessons/:lesson_id", method = "get")]
    #[tracing::instrument(level = "debug", skip(self, lesson_id))]
    async fn get_lesson(&self, lesson_id: Path<String>) -> LessonResponse {
        CatalogService::new(&self.db).get_lesson(&lesson_id.0).await
    }

    #[oai(path = "/theory", method = "get")]
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_theory(&self) -> TheoryListResponse {
        CatalogService::new(&self.db).list_theory().await
    }

    #[oai(path = "/theory/:topic_id", method = "get")]
    #[tracing::instrument(level = "debug", skip(self, topic_id))]
    async fn get_theory(&self, topic_id: Path<String>) -> TheoryResponse {
        CatalogService::new(&self.db).get_theory(&topic_id.0).await
    }

    /// Sheet music, optionally narrowed by difficulty and composer
    #[oai(path = "/sheet-music", method = "get")]
    #[tracing::instrument(level = "debug", skip(self, difficulty, composer))]
    async fn list_sheet_music(
        &self,
        /// beginner, intermediate or advanced
        Query(difficulty): Query<Option<String>>,
        /// Exact composer name
        Query(composer): Query<Option<String>>,
    ) -> SheetMusicListResponse {
        tracing::debug!(
            difficulty = difficulty.as_deref().unwrap_or(""),
            composer = composer.as_deref().unwrap_or(""),
            "handling list_sheet_music"
        );
        CatalogService::new(&self.db)
            .list_sheet_music(difficulty.as_deref(), composer.as_deref())
            .await
    }

    #[oai(path = "/sheet-music/:piece_id", method = "get")]
    #[tracing::instrument(level = "debug", skip(self, piece_id))]
    async fn get_sheet_music(&self, piece_id: Path<String>) -> SheetMusicResponse {
        CatalogService::new(&self.db)
            .get_sheet_music(&piece_id.0)
            .await
    }

    #[oai(path = "/care-guides", method = "get")]
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_care_guides(&self) -> CareGuideListResponse {
        CatalogService::new(&self.db).list_care_guides().await
    }

    #[oai(path = "/care-guides/:guide_id", method = "get")]
    #[tracing::instrument(level = "debug", skip(self, guide_id))]
    async fn get_care_guide(&self, guide_id: Path<String>) -> CareGuideResponse {
        CatalogService::new(&self.db).get_care_guide(&guide_id.0).await
    }

    // ===== Practice log =====

    /// Practice sessions, most recent first
    #[oai(path = "/practice-logs", method = "get")]
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_practice_logs(&self) -> PracticeLogListResponse {
        PracticeLogService::new(&self.db).list().await
    }

    #[oai(path = "/practice-logs", method = "post")]
    #[tracing::instrument(level = "debug", skip(self, body))]
    async fn create_practice_log(
        &self,
        body: Json<PracticeLogCreateDto>,
    ) -> PracticeLogCreateResponse {
        PracticeLogService::new(&self.db).create(body.0).await
    }

    #[oai(path = "/practice-logs/:log_id", method = "delete")]
    #[tracing::instrument(level = "debug", skip(self, log_id))]
    async fn delete_practice_log(&self, log_id: Path<String>) -> DeleteResponse {
        PracticeLogService::new(&self.db).delete(&log_id.0).await
    }

    // ===== Progress =====

    #[oai(path = "/progress", method = "get")]
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_progress(&self) -> ProgressListResponse {
        ProgressService::new(&self.db).list().await
    }

    /// Marks an item complete or incomplete
    #[oai(path = "/progress", method = "post")]
    #[tracing::instrument(level = "debug", skip(self, body))]
    async fn update_progress(&self, body: Json<ProgressUpdateDto>) -> ProgressUpdateResponse {
        ProgressService::new(&self.db).update(body.0).await
    }

    // ===== Bookmarks =====

    #[oai(path = "/bookmarks", method = "get")]
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_bookmarks(&self) -> BookmarkListResponse {
        BookmarkService::new(&self.db).list().await
    }

    #[oai(path = "/bookmarks", method = "post")]
    #[tracing::instrument(level = "debug", skip(self, body))]
    async fn add_bookmark(&self, body: Json<BookmarkCreateDto>) -> BookmarkCreateResponse {
        BookmarkService::new(&self.db).add(body.0).await
    }

    #[oai(path = "/bookmarks/:bookmark_id", method = "delete")]
    #[tracing::instrument(level = "debug", skip(self, bookmark_id))]
    async fn remove_bookmark(&self, bookmark_id: Path<String>) -> DeleteResponse {
        BookmarkService::new(&self.db).remove(&bookmark_id.0).await
    }

    // ===== Schedule =====

    /// Weekly plan ordered by day then time
    #[oai(path = "/schedule", method = "get")]
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_schedule(&self) -> ScheduleListResponse {
        ScheduleService::new(&self.db).list().await
    }

    #[oai(path = "/schedule", method = "post")]
    #[tracing::instrument(level = "debug", skip(self, body))]
    async fn create_schedule_entry(&self, body: Json<ScheduleCreateDto>) -> ScheduleCreateResponse {
        ScheduleService::new(&self.db).create(body.0).await
    }

    #[oai(path = "/schedule/:entry_id", method = "delete")]
    #[tracing::instrument(level = "debug", skip(self, entry_id))]
    async fn delete_schedule_entry(&self, entry_id: Path<String>) -> DeleteResponse {
        ScheduleService::new(&self.db).delete(&entry_id.0).await
    }

    // ===== Statistics =====

    #[oai(path = "/stats", method = "get")]
    #[tracing::instrument(level = "debug", skip(self))]
    async fn statistics(&self) -> StatisticsResponse {
        StatsService::new(self.stats_store.as_ref())
            .statistics()
            .await
    }
}
