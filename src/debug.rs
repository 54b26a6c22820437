use chrono::Utc;
use tracing::{info, warn};

use crate::api::dto::stats_dto::QueryStatsParams;
use crate::app_state::AppState;

/// Runs only when in STATSVIEW_DEBUG_MODE
pub async fn run_debug(state: &AppState) {
    info!("🔧 Debug mode: running debug tasks...");
    info!("Config: {:?}", state.config);
    info!("Granularities: {}", state.stats_service.granularity_names().join(", "));

    // Plan the default query against the current clock
    let params = QueryStatsParams::default();
    match state
        .stats_service
        .query_stats(&params, Utc::now(), &mut rand::thread_rng())
    {
        Ok((_, result)) => info!(
            "Default query: {} buckets over {:?}",
            result.series.first().map(|s| s.data.len()).unwrap_or(0),
            result.timespan
        ),
        Err(e) => warn!("Default query failed: {}", e),
    }

    info!("Debug tasks completed. Exiting...");
}
