//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::redirect_location;
use crate::web::handlers::not_found_page;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Atomically increment the click counter of the matching link
/// 2. Return 307 Temporary Redirect to the original URL
///
/// The increment is committed before the redirect is sent.
///
/// # Errors
///
/// Renders the HTML 404 page if the short code doesn't exist.
/// Returns 500 if the database is unavailable.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.resolve_and_count(&code).await {
        Ok(link) => {
            debug!(code = %code, clicks = link.clicks, "Redirecting");
            Ok(Redirect::temporary(&redirect_location(&link.original_url)).into_response())
        }
        Err(e) if e.is_not_found() => Ok(not_found_page().into_response()),
        Err(e) => Err(e),
    }
}
