use chrono::{DateTime, Utc};
use poem_openapi::{ApiResponse, Object, payload::Json};
use uuid::Uuid;

use crate::domain::models::{ContentBlock, ItemType};

#[derive(Debug, Clone, Object)]
pub struct ErrorDto {
    /// Human-readable error message
    pub message: String,
}

impl From<String> for ErrorDto {
    fn from(message: String) -> Self {
        ErrorDto { message }
    }
}

impl From<&str> for ErrorDto {
    fn from(message: &str) -> Self {
        ErrorDto {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct HealthDto {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Clone, Object)]
pub struct DeletedDto {
    /// Always "deleted"
    pub status: String,
}

impl DeletedDto {
    pub fn deleted() -> Self {
        DeletedDto {
            status: "deleted".into(),
        }
    }
}

// ===== Catalog =====

#[derive(Debug, Clone, Object)]
pub struct LessonDto {
    pub id: String,
    pub title: String,
    pub description: String,
    /// beginner, intermediate or advanced
    pub level: String,
    pub order: i32,
    pub duration_minutes: i32,
    pub category: String,
    pub youtube_id: Option<String>,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Object)]
pub struct TheoryTopicDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order: i32,
    pub category: String,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Object)]
pub struct SheetMusicDto {
    pub id: String,
    pub title: String,
    pub composer: String,
    pub difficulty: String,
    pub order: i32,
    pub genre: String,
    pub key: String,
    pub time_signature: String,
    pub description: String,
    pub notes: String,
    pub attribution: String,
}

#[derive(Debug, Clone, Object)]
pub struct CareGuideDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order: i32,
    pub icon: String,
    pub content: Vec<ContentBlock>,
}

// ===== User records =====

#[derive(Debug, Clone, Object)]
pub struct PracticeLogCreateDto {
    /// Practice day, `YYYY-MM-DD` or an ISO-8601 date-time
    pub date: String,
    #[oai(validator(minimum(value = "0")))]
    pub duration_minutes: i32,
    #[oai(default)]
    pub notes: String,
    pub lesson_id: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct PracticeLogDto {
    pub id: Uuid,
    pub date: String,
    pub duration_minutes: Option<i32>,
    pub notes: String,
    pub lesson_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Object)]
pub struct ProgressUpdateDto {
    pub item_id: String,
    pub item_type: ItemType,
    pub completed: bool,
}

#[derive(Debug, Clone, Object)]
pub struct ProgressDto {
    pub id: Uuid,
    pub item_id: String,
    pub item_type: String,
    pub completed: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Object)]
pub struct BookmarkCreateDto {
    pub item_id: String,
    pub item_type: ItemType,
    pub title: String,
}

#[derive(Debug, Clone, Object)]
pub struct BookmarkDto {
    pub id: Uuid,
    pub item_id: String,
    pub item_type: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

fn default_focus_area() -> String {
    "General Practice".to_string()
}

#[derive(Debug, Clone, Object)]
pub struct ScheduleCreateDto {
    /// 0 = Sunday .. 6 = Saturday
    #[oai(validator(minimum(value = "0"), maximum(value = "6")))]
    pub day_of_week: i32,
    pub time: String,
    #[oai(validator(minimum(value = "0")))]
    pub duration_minutes: i32,
    #[oai(default = "default_focus_area")]
    pub focus_area: String,
}

#[derive(Debug, Clone, Object)]
pub struct ScheduleEntryDto {
    pub id: Uuid,
    pub day_of_week: i32,
    pub time: String,
    pub duration_minutes: i32,
    pub focus_area: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Object)]
pub struct StatisticsDto {
    pub total_lessons: u64,
    pub completed_lessons: u64,
    pub total_theory: u64,
    pub completed_theory: u64,
    pub total_practice_minutes: i64,
    pub practice_streak: u32,
    pub total_sheet_music: u64,
    pub bookmarks_count: u64,
}

// ===== Responses =====

#[derive(ApiResponse)]
pub enum HealthResponse {
    #[oai(status = 200)]
    Ok(Json<HealthDto>),
}

#[derive(ApiResponse)]
pub enum LessonListResponse {
    /// Lessons ordered by position
    #[oai(status = 200)]
    Ok(Json<Vec<LessonDto>>),

    /// Database unreachable
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum LessonResponse {
    #[oai(status = 200)]
    Ok(Json<LessonDto>),

    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum TheoryListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<TheoryTopicDto>>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum TheoryResponse {
    #[oai(status = 200)]
    Ok(Json<TheoryTopicDto>),

    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum SheetMusicListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<SheetMusicDto>>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum SheetMusicResponse {
    #[oai(status = 200)]
    Ok(Json<SheetMusicDto>),

    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum CareGuideListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CareGuideDto>>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum CareGuideResponse {
    #[oai(status = 200)]
    Ok(Json<CareGuideDto>),

    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum PracticeLogListResponse {
    /// Most recent first
    #[oai(status = 200)]
    Ok(Json<Vec<PracticeLogDto>>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum PracticeLogCreateResponse {
    #[oai(status = 201)]
    Created(Json<PracticeLogDto>),

    /// Date could not be parsed
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum ProgressListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProgressDto>>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum ProgressUpdateResponse {
    /// Stored record after the upsert
    #[oai(status = 200)]
    Ok(Json<ProgressDto>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum BookmarkListResponse {
    /// Newest first
    #[oai(status = 200)]
    Ok(Json<Vec<BookmarkDto>>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum BookmarkCreateResponse {
    #[oai(status = 201)]
    Created(Json<BookmarkDto>),

    /// Item already bookmarked
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum ScheduleListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ScheduleEntryDto>>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum ScheduleCreateResponse {
    #[oai(status = 201)]
    Created(Json<ScheduleEntryDto>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum DeleteResponse {
    #[oai(status = 200)]
    Ok(Json<DeletedDto>),

    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum StatisticsResponse {
    /// Snapshot of progress and practice consistency
    #[oai(status = 200)]
    Ok(Json<StatisticsDto>),

    /// Database unreachable; no partial snapshot is returned
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorDto>),
}
