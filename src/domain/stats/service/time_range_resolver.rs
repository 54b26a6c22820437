use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::core::util::calendar_util::{add_units, start_of};
use crate::domain::stats::error::StatsError;
use crate::domain::stats::model::granularity::CalendarUnit;
use crate::domain::stats::model::timespan::{TimeRange, TimespanKeyword, TimespanSpec};
use crate::domain::stats::model::timespan_input::TimespanInput;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Turn the caller's raw timespan into a tagged spec, rejecting unknown
/// keywords, wrong-length ranges and unparseable dates.
pub fn parse_timespan(input: &TimespanInput) -> Result<TimespanSpec, StatsError> {
    match input {
        TimespanInput::Keyword(word) => TimespanKeyword::parse(word)
            .map(TimespanSpec::Keyword)
            .ok_or_else(|| StatsError::InvalidTimespan(format!("unknown keyword \"{word}\""))),
        TimespanInput::Range(bounds) => match bounds.as_slice() {
            [start, end] => Ok(TimespanSpec::Literal(
                parse_instant(start)?,
                parse_instant(end)?,
            )),
            _ => Err(StatsError::InvalidTimespan(format!(
                "expected 2 dates, got {}",
                bounds.len()
            ))),
        },
    }
}

/// Parse an ISO-8601-ish instant. Inputs without an offset are read as UTC.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, StatsError> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| StatsError::InvalidTimespan(format!("cannot parse date \"{raw}\"")))
}

/// Resolve a spec into absolute bounds. Both ends of a relative span derive
/// from the same `now`.
pub fn resolve_time_range(
    spec: &TimespanSpec,
    now: DateTime<Utc>,
) -> Result<TimeRange, StatsError> {
    let (start, end) = match *spec {
        TimespanSpec::Keyword(TimespanKeyword::Hour) => (Some(now - Duration::hours(1)), Some(now)),
        TimespanSpec::Keyword(TimespanKeyword::Day) => current(now, CalendarUnit::Day, 1),
        TimespanSpec::Keyword(TimespanKeyword::Week) => current(now, CalendarUnit::Week, 1),
        TimespanSpec::Keyword(TimespanKeyword::Month) => current(now, CalendarUnit::Month, 1),
        TimespanSpec::Keyword(TimespanKeyword::Year) => current(now, CalendarUnit::Year, 1),
        TimespanSpec::Literal(start, end) => (Some(start), Some(end)),
    };

    match (start, end) {
        (Some(start), Some(end)) => Ok(TimeRange { start, end }),
        _ => Err(StatsError::InvalidTimespan("out of calendar range".into())),
    }
}

fn current(
    now: DateTime<Utc>,
    unit: CalendarUnit,
    amount: i64,
) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    let start = start_of(now, unit);
    let end = start.and_then(|s| add_units(s, unit, amount));
    (start, end)
}
