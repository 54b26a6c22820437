use chrono::{DateTime, Utc};
use rand::Rng;
use serde_json::Value;
use tracing::{debug, info};

use crate::api::dto::stats_dto::{QueryStatsEchoDto, QueryStatsParams, QueryStatsResultDto};
use crate::core::granularity::granularity_lookup_trait::GranularityLookup;
use crate::domain::stats::error::StatsError;
use crate::domain::stats::model::timespan_input::TimespanInput;
use crate::domain::stats::service::bucket_planner::plan_buckets;
use crate::domain::stats::service::series_synthesizer::{synthesize_series, DEFAULT_GENERATORS};
use crate::domain::stats::service::time_range_resolver::{parse_timespan, resolve_time_range};

/// Resolve → plan → synthesize for one request. `now` is captured once by the
/// caller so both ends of a relative span agree.
pub fn query_stats<R: Rng + ?Sized>(
    params: &QueryStatsParams,
    now: DateTime<Utc>,
    lookup: &dyn GranularityLookup,
    rng: &mut R,
) -> Result<(QueryStatsEchoDto, QueryStatsResultDto), StatsError> {
    debug!(
        source = %params.source,
        metric = %params.metric,
        granularity = %params.granularity,
        timespan = %params.timespan,
        "query-stats request"
    );

    let timespan = TimespanInput::try_from(&params.timespan)?;
    let spec = parse_timespan(&timespan)?;
    let range = resolve_time_range(&spec, now)?;
    let granularity = granularity_name(&params.granularity)?;
    let plan = plan_buckets(&range, &granularity, lookup)?;
    let series = synthesize_series(&plan, &DEFAULT_GENERATORS, rng)?;

    info!(granularity = %granularity, buckets = plan.count, "query-stats served");

    Ok((
        QueryStatsEchoDto {
            timespan,
            granularity: granularity.clone(),
        },
        QueryStatsResultDto {
            timespan: [
                plan.aligned_start.timestamp_millis(),
                plan.aligned_end.timestamp_millis(),
            ],
            granularity,
            series,
        },
    ))
}

/// Only strings can name a granularity; anything else is reported as unknown
/// using its JSON rendering.
fn granularity_name(value: &Value) -> Result<String, StatsError> {
    match value {
        Value::String(name) => Ok(name.clone()),
        other => Err(StatsError::UnknownGranularity(other.to_string())),
    }
}
