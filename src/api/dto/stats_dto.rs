//! Stats query API DTOs

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::stats::model::series::NamedSeries;
use crate::domain::stats::model::timespan_input::TimespanInput;

/// Raw request body. Missing and `null` fields both fall back to
/// [`QueryStatsParams::default`]; unknown fields are ignored. Values are kept
/// untyped so a wrong type becomes an in-band query error, not a 400.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct QueryStatsRequestDto {
    pub source: Option<Value>,
    pub metric: Option<Value>,
    pub granularity: Option<Value>,
    pub timespan: Option<Value>,
}

/// Effective query after defaults are merged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStatsParams {
    /// Data source, passed through. Default `"water"`.
    pub source: Value,
    /// Aggregate name, passed through. Default `"avg"`.
    pub metric: Value,
    /// Granularity table key. Default `"day"`.
    pub granularity: Value,
    /// Keyword or `[start, end]` literal. Default `"week"`.
    pub timespan: Value,
}

impl Default for QueryStatsParams {
    fn default() -> Self {
        Self {
            source: json!("water"),
            metric: json!("avg"),
            granularity: json!("day"),
            timespan: json!("week"),
        }
    }
}

impl From<QueryStatsRequestDto> for QueryStatsParams {
    fn from(dto: QueryStatsRequestDto) -> Self {
        let defaults = Self::default();
        Self {
            source: dto.source.unwrap_or(defaults.source),
            metric: dto.metric.unwrap_or(defaults.metric),
            granularity: dto.granularity.unwrap_or(defaults.granularity),
            timespan: dto.timespan.unwrap_or(defaults.timespan),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct QueryStatsEchoDto {
    pub timespan: TimespanInput,
    pub granularity: String,
}

#[derive(Serialize, Debug)]
pub struct QueryStatsResultDto {
    /// `[alignedStartMillis, alignedEndMillis]`
    pub timespan: [i64; 2],
    pub granularity: String,
    pub series: Vec<NamedSeries>,
}

/// In-band envelope: `error` is always present, `request`/`result` only on success.
#[derive(Serialize, Debug)]
pub struct QueryStatsResponseDto {
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<QueryStatsEchoDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<QueryStatsResultDto>,
}

impl QueryStatsResponseDto {
    pub fn ok(request: QueryStatsEchoDto, result: QueryStatsResultDto) -> Self {
        Self {
            error: None,
            request: Some(request),
            result: Some(result),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            request: None,
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_and_null_fields() {
        let dto: QueryStatsRequestDto =
            serde_json::from_value(json!({ "granularity": null, "extra": 1 })).unwrap();
        let params = QueryStatsParams::from(dto);
        assert_eq!(params, QueryStatsParams::default());
        assert_eq!(params.timespan, json!("week"));
    }

    #[test]
    fn test_literal_timespan_deserializes_as_range() {
        let dto: QueryStatsRequestDto = serde_json::from_value(json!({
            "timespan": ["2024-01-01T00:00:00Z", "2024-01-03T00:00:00Z"],
            "granularity": "hour"
        }))
        .unwrap();
        let params = QueryStatsParams::from(dto);
        assert_eq!(params.granularity, json!("hour"));
        assert_eq!(
            TimespanInput::try_from(&params.timespan),
            Ok(TimespanInput::Range(vec![
                "2024-01-01T00:00:00Z".into(),
                "2024-01-03T00:00:00Z".into()
            ]))
        );
    }

    #[test]
    fn test_wrong_field_types_still_deserialize() {
        let dto: QueryStatsRequestDto = serde_json::from_value(json!({
            "source": 3,
            "metric": ["avg"],
            "granularity": 5,
            "timespan": { "from": "2024-01-01" }
        }))
        .unwrap();
        let params = QueryStatsParams::from(dto);
        assert_eq!(params.source, json!(3));
        assert_eq!(params.granularity, json!(5));
    }

    #[test]
    fn test_error_envelope_has_no_result() {
        let value = serde_json::to_value(QueryStatsResponseDto::err("boom")).unwrap();
        assert_eq!(value, json!({ "error": "boom" }));
    }
}
