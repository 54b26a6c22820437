//! Query-stats domain types (timespans, granularities, bucket plans, series)

pub mod bucket_plan;
pub mod granularity;
pub mod series;
pub mod timespan;
pub mod timespan_input;
