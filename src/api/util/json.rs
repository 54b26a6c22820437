use axum::body::Bytes;
use axum::Json;
use http::{header, HeaderMap};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::api::dto::stats_dto::{QueryStatsEchoDto, QueryStatsResponseDto, QueryStatsResultDto};
use crate::domain::stats::error::StatsError;
use crate::errors::AppError;

/// Decode a JSON body. Bodies that are empty or not declared as JSON decode
/// to `T::default()`.
pub fn parse_json_body<T: DeserializeOwned + Default>(
    headers: &HeaderMap,
    body: &Bytes,
) -> Result<T, AppError> {
    if body.is_empty() || !is_json_content_type(headers) {
        return Ok(T::default());
    }

    Json::<T>::from_bytes(body)
        .map(|Json(value)| value)
        .map_err(AppError::from)
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Map a stats outcome into the in-band response envelope.
pub fn to_stats_response(
    result: Result<(QueryStatsEchoDto, QueryStatsResultDto), StatsError>,
) -> Json<QueryStatsResponseDto> {
    match result {
        Ok((request, result)) => Json(QueryStatsResponseDto::ok(request, result)),
        Err(e) => {
            warn!("query-stats rejected: {}", e);
            Json(QueryStatsResponseDto::err(e.to_string()))
        }
    }
}
