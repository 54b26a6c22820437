//! Echo API DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct EchoQuery {
    pub message: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct EchoRequestDto {
    pub message: Option<Value>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct EchoResponseDto {
    pub message: Option<Value>,
}

impl EchoResponseDto {
    /// Falsy messages (`""`, `0`, `false`, `null`) echo back as `null`.
    pub fn new(message: Option<Value>) -> Self {
        Self {
            message: message.filter(is_truthy),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_messages_become_null() {
        for falsy in [json!(""), json!(0), json!(false), Value::Null] {
            assert_eq!(EchoResponseDto::new(Some(falsy)).message, None);
        }
        assert_eq!(EchoResponseDto::new(Some(json!("hi"))).message, Some(json!("hi")));
        assert_eq!(EchoResponseDto::new(Some(json!({"a": 1}))).message, Some(json!({"a": 1})));
    }
}
