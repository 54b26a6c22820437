pub mod bucket_planner;
pub mod series_synthesizer;
pub mod stats_query_service;
pub mod time_range_resolver;
