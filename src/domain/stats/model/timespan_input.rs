use serde::Serialize;
use serde_json::Value;

use crate::domain::stats::error::StatsError;

/// Timespan as sent by the caller: a keyword or a `[start, end]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TimespanInput {
    Keyword(String),
    Range(Vec<String>),
}

impl Default for TimespanInput {
    fn default() -> Self {
        TimespanInput::Keyword("week".to_string())
    }
}

impl TryFrom<&Value> for TimespanInput {
    type Error = StatsError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(word) => Ok(TimespanInput::Keyword(word.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(StatsError::InvalidTimespan(format!(
                        "expected a date string, got {other}"
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(TimespanInput::Range),
            other => Err(StatsError::InvalidTimespan(format!(
                "expected a keyword or a [start, end] pair, got {other}"
            ))),
        }
    }
}
