use std::path::PathBuf;

use axum::{response::IntoResponse, routing::get, Router};
use http::{header, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeader;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::app_state::AppState;
use crate::config::AppConfig;
use crate::errors::AppError;

const STATIC_CACHE_CONTROL: &str = "public, max-age=86400";

/// Build the main application router
pub fn app_router(config: &AppConfig) -> Router<AppState> {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .nest("/api/action", crate::api::routes::action_routes::action_routes());

    if let Some(root) = config.doc_roots.first() {
        router = router.route_service(
            "/",
            with_cache_control(ServeFile::new(root.join("index.html"))),
        );
    }

    router
        // Static documents, then 404
        .fallback_service(static_files(&config.doc_roots))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::very_permissive())
}

fn with_cache_control<S>(inner: S) -> SetResponseHeader<S, HeaderValue> {
    SetResponseHeader::if_not_present(
        inner,
        header::CACHE_CONTROL,
        HeaderValue::from_static(STATIC_CACHE_CONTROL),
    )
}

/// Doc roots tried in order; the last miss falls through to the 404 handler.
fn static_files(doc_roots: &[PathBuf]) -> Router {
    doc_roots
        .iter()
        .rev()
        .fold(Router::new().fallback(handler_404), |next, root| {
            let serve_dir = ServeDir::new(root)
                .fallback(next)
                .call_fallback_on_method_not_allowed(true);
            Router::new().fallback_service(with_cache_control(serve_dir))
        })
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    AppError::NotFound("The requested resource was not found".to_string())
}
