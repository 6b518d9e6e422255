use chrono::Utc;
use entities::{prelude::Progress, progress};
use poem_openapi::payload::Json;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect, Set,
    sea_query::OnConflict,
};
use uuid::Uuid;

use super::unavailable;
use crate::{
    api::models::{ProgressListResponse, ProgressUpdateDto, ProgressUpdateResponse},
    domain::mapping::map_progress,
};

const PROGRESS_LIMIT: u64 = 500;

pub struct ProgressService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ProgressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn list(&self) -> ProgressListResponse {
        match Progress::find().limit(PROGRESS_LIMIT).all(self.db).await {
            Ok(rows) => ProgressListResponse::Ok(Json(rows.into_iter().map(map_progress).collect())),
            Err(e) => {
                ProgressListResponse::ServiceUnavailable(unavailable("failed to list progress", e))
            }
        }
    }

    /// Sets the completion flag for an item, creating the record on first use.
    #[tracing::instrument(level = "debug", skip(self, req))]
    pub async fn update(&self, req: ProgressUpdateDto) -> ProgressUpdateResponse {
        match self.upsert(&req).await {
            Ok(row) => {
                tracing::debug!(item_id = %row.item_id, item_type = %row.item_type, completed = row.completed, "progress updated");
                ProgressUpdateResponse::Ok(Json(map_progress(row)))
            }
            Err(e) => {
                ProgressUpdateResponse::ServiceUnavailable(unavailable("failed to update progress", e))
            }
        }
    }

    // Single INSERT .. ON CONFLICT statement against the (item_id, item_type) unique index
    async fn upsert(&self, req: &ProgressUpdateDto) -> Result<progress::Model, DbErr> {
        let item_type = req.item_type.as_str();
        let record = progress::ActiveModel {
            id: Set(Uuid::new_v4()),
            item_id: Set(req.item_id.clone()),
            item_type: Set(item_type.to_string()),
            completed: Set(req.completed),
            updated_at: Set(Utc::now()),
        };
        Progress::insert(record)
            .on_conflict(
                OnConflict::columns([progress::Column::ItemId, progress::Column::ItemType])
                    .update_columns([progress::Column::Completed, progress::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Progress::find()
            .filter(progress::Column::ItemId.eq(req.item_id.as_str()))
            .filter(progress::Column::ItemType.eq(item_type))
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("progress for {}", req.item_id)))
    }
}
