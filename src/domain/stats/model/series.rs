use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

/// `[timestampMillis, value]` on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub timestamp_millis: i64,
    pub value: f64,
}

impl Serialize for SeriesPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.timestamp_millis)?;
        tup.serialize_element(&self.value)?;
        tup.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedSeries {
    pub name: String,
    pub data: Vec<SeriesPoint>,
}
