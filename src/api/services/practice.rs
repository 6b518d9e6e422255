use chrono::Utc;
use entities::{practice_log, prelude::PracticeLog};
use poem_openapi::payload::Json;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};
use uuid::Uuid;

use super::unavailable;
use crate::{
    api::models::{
        DeleteResponse, DeletedDto, ErrorDto, PracticeLogCreateDto, PracticeLogCreateResponse,
        PracticeLogListResponse,
    },
    domain::{mapping::map_practice_log, statistics::parse_practice_date},
};

const PRACTICE_LOG_LIMIT: u64 = 365;

pub struct PracticeLogService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PracticeLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn list(&self) -> PracticeLogListResponse {
        let res = PracticeLog::find()
            .order_by_desc(practice_log::Column::Date)
            .order_by_desc(practice_log::Column::CreatedAt)
            .limit(PRACTICE_LOG_LIMIT)
            .all(self.db)
            .await;
        match res {
            Ok(rows) => {
                PracticeLogListResponse::Ok(Json(rows.into_iter().map(map_practice_log).collect()))
            }
            Err(e) => PracticeLogListResponse::ServiceUnavailable(unavailable(
                "failed to list practice logs",
                e,
            )),
        }
    }

    #[tracing::instrument(level = "debug", skip(self, req))]
    pub async fn create(&self, req: PracticeLogCreateDto) -> PracticeLogCreateResponse {
        if parse_practice_date(&req.date).is_none() {
            return PracticeLogCreateResponse::BadRequest(Json(ErrorDto::from(format!(
                "Invalid date: {}",
                req.date
            ))));
        }

        let log = practice_log::ActiveModel {
            id: Set(Uuid::new_v4()),
            date: Set(req.date.trim().to_string()),
            duration_minutes: Set(Some(req.duration_minutes)),
            notes: Set(req.notes),
            lesson_id: Set(req.lesson_id),
            created_at: Set(Utc::now()),
        };
        match log.insert(self.db).await {
            Ok(row) => {
                tracing::info!(id = %row.id, date = %row.date, "logged practice");
                PracticeLogCreateResponse::Created(Json(map_practice_log(row)))
            }
            Err(e) => PracticeLogCreateResponse::ServiceUnavailable(unavailable(
                "failed to create practice log",
                e,
            )),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn delete(&self, log_id: &str) -> DeleteResponse {
        let not_found = || DeleteResponse::NotFound(Json(ErrorDto::from("Log not found")));
        let Ok(id) = Uuid::parse_str(log_id) else {
            return not_found();
        };
        match PracticeLog::delete_by_id(id).exec(self.db).await {
            Ok(res) if res.rows_affected == 0 => not_found(),
            Ok(_) => DeleteResponse::Ok(Json(DeletedDto::deleted())),
            Err(e) => {
                DeleteResponse::ServiceUnavailable(unavailable("failed to delete practice log", e))
            }
        }
    }
}
