use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::Utc;

use crate::api::dto::stats_dto::{QueryStatsParams, QueryStatsRequestDto, QueryStatsResponseDto};
use crate::api::util::json::{parse_json_body, to_stats_response};
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct StatsController;

impl StatsController {
    pub async fn query_stats(
        State(state): State<AppState>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Json<QueryStatsResponseDto>, AppError> {
        let dto: QueryStatsRequestDto = parse_json_body(&headers, &body)?;
        let params = QueryStatsParams::from(dto);

        let outcome = state
            .stats_service
            .query_stats(&params, Utc::now(), &mut rand::thread_rng());

        Ok(to_stats_response(outcome))
    }
}
