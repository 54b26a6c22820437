use chrono::{DateTime, Utc};

use crate::core::util::calendar_util::add_units;
use crate::domain::stats::model::granularity::GranularityDescriptor;

/// Aligned bucket layout for one query.
#[derive(Debug, Clone)]
pub struct BucketPlan {
    pub aligned_start: DateTime<Utc>,
    pub aligned_end: DateTime<Utc>,
    pub count: usize,
    pub granularity: GranularityDescriptor,
}

impl BucketPlan {
    /// Start of bucket `i`, stepped with calendar arithmetic so month and
    /// year buckets keep their real lengths.
    pub fn bucket_start(&self, i: usize) -> Option<DateTime<Utc>> {
        let steps = i64::try_from(i).ok()? * i64::from(self.granularity.quantity);
        add_units(self.aligned_start, self.granularity.unit, steps)
    }

    pub fn bucket_timestamps(&self) -> Option<Vec<i64>> {
        (0..self.count)
            .map(|i| self.bucket_start(i).map(|t| t.timestamp_millis()))
            .collect()
    }
}
