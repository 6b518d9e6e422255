use chrono::Utc;
use entities::{prelude::ScheduleEntry, schedule_entry};
use poem_openapi::payload::Json;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};
use uuid::Uuid;

use super::unavailable;
use crate::{
    api::models::{
        DeleteResponse, DeletedDto, ErrorDto, ScheduleCreateDto, ScheduleCreateResponse,
        ScheduleListResponse,
    },
    domain::mapping::map_schedule_entry,
};

const SCHEDULE_LIMIT: u64 = 50;

pub struct ScheduleService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn list(&self) -> ScheduleListResponse {
        let res = ScheduleEntry::find()
            .order_by_asc(schedule_entry::Column::DayOfWeek)
            .order_by_asc(schedule_entry::Column::Time)
            .limit(SCHEDULE_LIMIT)
            .all(self.db)
            .await;
        match res {
            Ok(rows) => {
                ScheduleListResponse::Ok(Json(rows.into_iter().map(map_schedule_entry).collect()))
            }
            Err(e) => {
                ScheduleListResponse::ServiceUnavailable(unavailable("failed to list schedule", e))
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self, req))]
    pub async fn create(&self, req: ScheduleCreateDto) -> ScheduleCreateResponse {
        let entry = schedule_entry::ActiveModel {
            id: Set(Uuid::new_v4()),
            day_of_week: Set(req.day_of_week),
            time: Set(req.time),
            duration_minutes: Set(req.duration_minutes),
            focus_area: Set(req.focus_area),
            created_at: Set(Utc::now()),
        };
        match entry.insert(self.db).await {
            Ok(row) => ScheduleCreateResponse::Created(Json(map_schedule_entry(row))),
            Err(e) => ScheduleCreateResponse::ServiceUnavailable(unavailable(
                "failed to create schedule entry",
                e,
            )),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn delete(&self, entry_id: &str) -> DeleteResponse {
        let not_found = || DeleteResponse::NotFound(Json(ErrorDto::from("Entry not found")));
        let Ok(id) = Uuid::parse_str(entry_id) else {
            return not_found();
        };
        match ScheduleEntry::delete_by_id(id).exec(self.db).await {
            Ok(res) if res.rows_affected == 0 => not_found(),
            Ok(_) => DeleteResponse::Ok(Json(DeletedDto::deleted())),
            Err(e) => {
                DeleteResponse::ServiceUnavailable(unavailable("failed to delete schedule entry", e))
            }
        }
    }
}
