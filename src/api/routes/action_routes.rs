//! Action routes (e.g., /api/action/*)

use axum::{routing::{get, post}, Router};

use crate::api::controller::echo::EchoController;
use crate::api::controller::stats::StatsController;
use crate::app_state::AppState;

pub fn action_routes() -> Router<AppState> {
    Router::new()
        .route("/echo", get(EchoController::get_echo).post(EchoController::post_echo))
        .route("/query-stats", post(StatsController::query_stats))
}
