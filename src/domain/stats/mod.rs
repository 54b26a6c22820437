//! Stats query: timespan resolution, bucket planning and mock series

pub mod error;
pub mod model;
pub mod service;
