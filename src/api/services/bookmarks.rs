use chrono::Utc;
use entities::{bookmark, prelude::Bookmark};
use poem_openapi::payload::Json;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set, sea_query::OnConflict};
use uuid::Uuid;

use super::unavailable;
use crate::{
    api::models::{
        BookmarkCreateDto, BookmarkCreateResponse, BookmarkListResponse, DeleteResponse,
        DeletedDto, ErrorDto,
    },
    domain::mapping::map_bookmark,
};

const BOOKMARK_LIMIT: u64 = 200;

pub struct BookmarkService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BookmarkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn list(&self) -> BookmarkListResponse {
        let res = Bookmark::find()
            .order_by_desc(bookmark::Column::CreatedAt)
            .limit(BOOKMARK_LIMIT)
            .all(self.db)
            .await;
        match res {
            Ok(rows) => BookmarkListResponse::Ok(Json(rows.into_iter().map(map_bookmark).collect())),
            Err(e) => {
                BookmarkListResponse::ServiceUnavailable(unavailable("failed to list bookmarks", e))
            }
        }
    }

    /// Rejects a second bookmark for the same item; the unique index decides.
    #[tracing::instrument(level = "debug", skip(self, req))]
    pub async fn add(&self, req: BookmarkCreateDto) -> BookmarkCreateResponse {
        let row = bookmark::Model {
            id: Uuid::new_v4(),
            item_id: req.item_id,
            item_type: req.item_type.as_str().to_string(),
            title: req.title,
            created_at: Utc::now(),
        };
        let record = bookmark::ActiveModel {
            id: Set(row.id),
            item_id: Set(row.item_id.clone()),
            item_type: Set(row.item_type.clone()),
            title: Set(row.title.clone()),
            created_at: Set(row.created_at),
        };
        let res = Bookmark::insert(record)
            .on_conflict(
                OnConflict::columns([bookmark::Column::ItemId, bookmark::Column::ItemType])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await;
        match res {
            Ok(0) => {
                tracing::debug!(item_id = %row.item_id, item_type = %row.item_type, "duplicate bookmark");
                BookmarkCreateResponse::BadRequest(Json(ErrorDto::from("Already bookmarked")))
            }
            Ok(_) => BookmarkCreateResponse::Created(Json(map_bookmark(row))),
            Err(e) => {
                BookmarkCreateResponse::ServiceUnavailable(unavailable("failed to add bookmark", e))
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn remove(&self, bookmark_id: &str) -> DeleteResponse {
        let not_found = || DeleteResponse::NotFound(Json(ErrorDto::from("Bookmark not found")));
        let Ok(id) = Uuid::parse_str(bookmark_id) else {
            return not_found();
        };
        match Bookmark::delete_by_id(id).exec(self.db).await {
            Ok(res) if res.rows_affected == 0 => not_found(),
            Ok(_) => DeleteResponse::Ok(Json(DeletedDto::deleted())),
            Err(e) => DeleteResponse::ServiceUnavailable(unavailable("failed to remove bookmark", e)),
        }
    }
}
