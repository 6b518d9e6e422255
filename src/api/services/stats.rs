use poem_openapi::payload::Json;

use super::unavailable;
use crate::{
    api::models::StatisticsResponse,
    domain::{mapping::map_statistics, statistics::StatisticsAggregator},
    storage::StatsStore,
};

pub struct StatsService<'a> {
    pub store: &'a dyn StatsStore,
}

impl<'a> StatsService<'a> {
    pub fn new(store: &'a dyn StatsStore) -> Self {
        Self { store }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn statistics(&self) -> StatisticsResponse {
        match StatisticsAggregator::new(self.store).get_statistics().await {
            Ok(snapshot) => StatisticsResponse::Ok(Json(map_statistics(snapshot))),
            Err(e) => StatisticsResponse::ServiceUnavailable(unavailable(
                "failed to compute statistics",
                e,
            )),
        }
    }
}
