//! API route configuration.

use crate::api::handlers::{recent_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create (or fetch) the short link for a URL
/// - `GET  /stats/{code}`  - Statistics for a short link
/// - `GET  /recent`        - Most recently created links
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/recent", get(recent_handler))
}
