use axum::body::Bytes;
use axum::extract::Query;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Value;

use crate::api::dto::echo_dto::{EchoQuery, EchoRequestDto, EchoResponseDto};
use crate::api::util::json::parse_json_body;
use crate::errors::AppError;

pub struct EchoController;

impl EchoController {
    pub async fn get_echo(Query(q): Query<EchoQuery>) -> Json<EchoResponseDto> {
        Json(EchoResponseDto::new(q.message.map(Value::String)))
    }

    pub async fn post_echo(
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Json<EchoResponseDto>, AppError> {
        let req: EchoRequestDto = parse_json_body(&headers, &body)?;
        Ok(Json(EchoResponseDto::new(req.message)))
    }
}
