use tracing::debug;

use crate::core::granularity::granularity_lookup_trait::GranularityLookup;
use crate::core::util::calendar_util::{align_end, align_start};
use crate::domain::stats::error::StatsError;
use crate::domain::stats::model::bucket_plan::BucketPlan;
use crate::domain::stats::model::timespan::TimeRange;

/// Upper bound on buckets per series.
pub const MAX_BUCKETS: usize = 100_000;

/// Validate `range` against the named granularity and lay out aligned buckets.
pub fn plan_buckets(
    range: &TimeRange,
    granularity_name: &str,
    lookup: &dyn GranularityLookup,
) -> Result<BucketPlan, StatsError> {
    let granularity = lookup
        .lookup(granularity_name)
        .ok_or_else(|| StatsError::UnknownGranularity(granularity_name.to_string()))?;

    let span_millis = range.span_millis();
    if span_millis < granularity.duration_millis {
        return Err(StatsError::SpanTooNarrow {
            span_millis,
            granularity: granularity.name.clone(),
        });
    }

    let (aligned_start, aligned_end) = match (
        align_start(range.start, granularity.unit),
        align_end(range.end, granularity.unit),
    ) {
        (Some(start), Some(end)) => (start, end),
        _ => return Err(StatsError::InvalidTimespan("out of calendar range".into())),
    };

    let aligned_millis = (aligned_end - aligned_start).num_milliseconds();
    // aligned_millis > 0 here since the raw span already covers one bucket
    let count = (aligned_millis + granularity.duration_millis - 1) / granularity.duration_millis;
    let count = usize::try_from(count).unwrap_or(usize::MAX);

    if count > MAX_BUCKETS {
        return Err(StatsError::TooManyBuckets {
            count,
            granularity: granularity.name,
        });
    }

    debug!(
        granularity = %granularity.name,
        %aligned_start,
        %aligned_end,
        count,
        "bucket plan computed"
    );

    Ok(BucketPlan {
        aligned_start,
        aligned_end,
        count,
        granularity,
    })
}
