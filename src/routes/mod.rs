//! Router assembly: HTTP endpoints, static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;

/// Build the application router with:
/// - REST-ish API under `/api/v1/...`
/// - Static SPA from `./static` with index fallback
/// - CORS (allow any origin/method/headers) – adjust for production if needed
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    // Static files with SPA fallback
    let static_service = ServeDir::new("./static")
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new("./static/index.html"));

    Router::new()
        .route("/api/v1/health", get(http::http_health))
        // Story mode
        .route("/api/v1/story/day/:n", get(http::http_get_story_day))
        .route("/api/v1/story/finale", get(http::http_get_finale))
        // Quick mode
        .route("/api/v1/quick/emails", get(http::http_get_quick_emails))
        // Progress
        .route(
            "/api/v1/progress",
            get(http::http_get_progress).post(http::http_post_progress),
        )
        // Boss phase
        .route("/api/v1/suspects", get(http::http_get_suspects))
        .route("/api/v1/boss/accuse", post(http::http_post_accuse))
        .route("/api/v1/boss/tasks", get(http::http_get_boss_tasks))
        .route("/api/v1/boss/submit", post(http::http_post_boss_submit))
        // Academy (template repository variant)
        .route("/api/v1/academy/emails", get(http::http_get_academy_emails))
        .route("/api/v1/academy/results", post(http::http_post_academy_result))
        .route("/api/v1/academy/leaderboard", get(http::http_get_leaderboard))
        .route("/api/v1/debug/seed", post(http::http_post_seed))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}
