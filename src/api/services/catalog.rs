use entities::{
    care_guide,
    lesson,
    prelude::{CareGuide, Lesson, SheetMusic, TheoryTopic},
    sheet_music, theory_topic,
};
use poem_openapi::payload::Json;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use super::unavailable;
use crate::{
    api::models::{
        CareGuideListResponse, CareGuideResponse, ErrorDto, LessonListResponse, LessonResponse,
        SheetMusicListResponse, SheetMusicResponse, TheoryListResponse, TheoryResponse,
    },
    domain::mapping::{map_care_guide, map_lesson, map_sheet_music, map_theory_topic},
};

const LESSON_LIMIT: u64 = 100;
const THEORY_LIMIT: u64 = 100;
const SHEET_MUSIC_LIMIT: u64 = 200;
const CARE_GUIDE_LIMIT: u64 = 50;

/// Read-only access to the seeded catalogs.
pub struct CatalogService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn list_lessons(&self) -> LessonListResponse {
        let res = Lesson::find()
            .order_by_asc(lesson::Column::DisplayOrder)
            .limit(LESSON_LIMIT)
            .all(self.db)
            .await;
        match res {
            Ok(rows) => LessonListResponse::Ok(Json(rows.into_iter().map(map_lesson).collect())),
            Err(e) => LessonListResponse::ServiceUnavailable(unavailable("failed to list lessons", e)),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_lesson(&self, lesson_id: &str) -> LessonResponse {
        match Lesson::find_by_id(lesson_id).one(self.db).await {
            Ok(Some(row)) => LessonResponse::Ok(Json(map_lesson(row))),
            Ok(None) => LessonResponse::NotFound(Json(ErrorDto::from("Lesson not found"))),
            Err(e) => LessonResponse::ServiceUnavailable(unavailable("failed to load lesson", e)),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn list_theory(&self) -> TheoryListResponse {
        let res = TheoryTopic::find()
            .order_by_asc(theory_topic::Column::DisplayOrder)
            .limit(THEORY_LIMIT)
            .all(self.db)
            .await;
        match res {
            Ok(rows) => {
                TheoryListResponse::Ok(Json(rows.into_iter().map(map_theory_topic).collect()))
            }
            Err(e) => {
                TheoryListResponse::ServiceUnavailable(unavailable("failed to list theory", e))
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_theory(&self, topic_id: &str) -> TheoryResponse {
        match TheoryTopic::find_by_id(topic_id).one(self.db).await {
            Ok(Some(row)) => TheoryResponse::Ok(Json(map_theory_topic(row))),
            Ok(None) => TheoryResponse::NotFound(Json(ErrorDto::from("Topic not found"))),
            Err(e) => {
                TheoryResponse::ServiceUnavailable(unavailable("failed to load theory topic", e))
            }
        }
    }

    /// Pieces matching both filters when given, exact match.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn list_sheet_music(
        &self,
        difficulty: Option<&str>,
        composer: Option<&str>,
    ) -> SheetMusicListResponse {
        let mut query = SheetMusic::find();
        if let Some(difficulty) = difficulty {
            query = query.filter(sheet_music::Column::Difficulty.eq(difficulty));
        }
        if let Some(composer) = composer {
            query = query.filter(sheet_music::Column::Composer.eq(composer));
        }
        let res = query
            .order_by_asc(sheet_music::Column::DisplayOrder)
            .limit(SHEET_MUSIC_LIMIT)
            .all(self.db)
            .await;
        match res {
            Ok(rows) => {
                SheetMusicListResponse::Ok(Json(rows.into_iter().map(map_sheet_music).collect()))
            }
            Err(e) => SheetMusicListResponse::ServiceUnavailable(unavailable(
                "failed to list sheet music",
                e,
            )),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_sheet_music(&self, piece_id: &str) -> SheetMusicResponse {
        match SheetMusic::find_by_id(piece_id).one(self.db).await {
            Ok(Some(row)) => SheetMusicResponse::Ok(Json(map_sheet_music(row))),
            Ok(None) => SheetMusicResponse::NotFound(Json(ErrorDto::from("Piece not found"))),
            Err(e) => SheetMusicResponse::ServiceUnavailable(unavailable(
                "failed to load sheet music piece",
                e,
            )),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn list_care_guides(&self) -> CareGuideListResponse {
        let res = CareGuide::find()
            .order_by_asc(care_guide::Column::DisplayOrder)
            .limit(CARE_GUIDE_LIMIT)
            .all(self.db)
            .await;
        match res {
            Ok(rows) => {
                CareGuideListResponse::Ok(Json(rows.into_iter().map(map_care_guide).collect()))
            }
            Err(e) => CareGuideListResponse::ServiceUnavailable(unavailable(
                "failed to list care guides",
                e,
            )),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_care_guide(&self, guide_id: &str) -> CareGuideResponse {
        match CareGuide::find_by_id(guide_id).one(self.db).await {
            Ok(Some(row)) => CareGuideResponse::Ok(Json(map_care_guide(row))),
            Ok(None) => CareGuideResponse::NotFound(Json(ErrorDto::from("Guide not found"))),
            Err(e) => {
                CareGuideResponse::ServiceUnavailable(unavailable("failed to load care guide", e))
            }
        }
    }
}
