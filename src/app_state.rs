use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::api::dto::stats_dto::{QueryStatsEchoDto, QueryStatsParams, QueryStatsResultDto};
use crate::config::AppConfig;
use crate::core::granularity::granularity_lookup_trait::GranularityLookup;
use crate::core::granularity::granularity_table::GranularityTable;
use crate::domain::stats::error::StatsError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub stats_service: Arc<StatsService>,
}

pub fn build_app_state(config: AppConfig) -> AppState {
    AppState {
        config: Arc::new(config),
        stats_service: Arc::new(StatsService::default()),
    }
}

/// Stats queries over a shared, read-only granularity table.
pub struct StatsService {
    granularities: Arc<dyn GranularityLookup>,
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new(Arc::new(GranularityTable::default()))
    }
}

impl StatsService {
    pub fn new(granularities: Arc<dyn GranularityLookup>) -> Self {
        Self { granularities }
    }

    pub fn query_stats<R: Rng + ?Sized>(
        &self,
        params: &QueryStatsParams,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<(QueryStatsEchoDto, QueryStatsResultDto), StatsError> {
        crate::domain::stats::service::stats_query_service::query_stats(
            params,
            now,
            self.granularities.as_ref(),
            rng,
        )
    }

    pub fn granularity_names(&self) -> Vec<String> {
        self.granularities.names()
    }
}
