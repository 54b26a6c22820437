use chrono::{DateTime, Utc};

/// Relative timespans, evaluated against the request's `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimespanKeyword {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimespanKeyword {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hour" => Some(Self::Hour),
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimespanSpec {
    Keyword(TimespanKeyword),
    /// Explicit `[start, end)` range.
    Literal(DateTime<Utc>, DateTime<Utc>),
}

/// Absolute bounds of a query. `start <= end` holds for keywords only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn span_millis(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}
