//! HTML 404 page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::StatusCode, response::IntoResponse};

#[derive(Template, WebTemplate)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {}

/// Builds the 404 response used by unknown short codes and unmatched routes.
pub fn not_found_page() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate {})
}

/// Router fallback.
pub async fn not_found_handler() -> impl IntoResponse {
    not_found_page()
}
