use thiserror::Error;

use crate::core::util::duration_util::humanize_millis;

/// Request-level failures of a stats query. Reported in-band, never as an
/// HTTP error status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("No such granularity: {0}")]
    UnknownGranularity(String),

    #[error(
        "Too narrow timespan ({}) for given granularity ({})",
        humanized(.span_millis),
        .granularity
    )]
    SpanTooNarrow { span_millis: i64, granularity: String },

    #[error("Invalid timespan: {0}")]
    InvalidTimespan(String),

    #[error("Too many data points ({count}) for given granularity ({granularity})")]
    TooManyBuckets { count: usize, granularity: String },
}

fn humanized(span_millis: &i64) -> String {
    humanize_millis(*span_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = StatsError::UnknownGranularity("fortnight".into());
        assert_eq!(err.to_string(), "No such granularity: fortnight");

        let err = StatsError::SpanTooNarrow {
            span_millis: 3_600_000,
            granularity: "day".into(),
        };
        assert_eq!(
            err.to_string(),
            "Too narrow timespan (an hour) for given granularity (day)"
        );
    }
}
