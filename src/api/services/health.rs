use poem_openapi::payload::Json;

use crate::api::models::{HealthDto, HealthResponse};

pub struct HealthService;

impl HealthService {
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn status(&self) -> HealthResponse {
        HealthResponse::Ok(Json(HealthDto {
            status: "ok".into(),
            service: "Virtuoso Violin API".into(),
        }))
    }
}
