//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use serde_json::json;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::{base_url, short_url};
use crate::utils::url_validator::{UrlValidationError, validate_url};

/// Creates a short link for a URL, or returns the existing one.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:3000/aB3xYz",
///   "original_url": "https://example.com/some/long/path",
///   "short_code": "aB3xYz",
///   "clicks": 0
/// }
/// ```
///
/// - **201 Created**: a new link was stored
/// - **200 OK**: the URL was already shortened; its record is returned unchanged
///
/// # Errors
///
/// - 400 `URL is required` for a missing or blank `url`
/// - 400 `Invalid URL format` for anything but an absolute http(s) URL up to 2048 characters
/// - 503 when no free short code was found
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let raw_url = payload.url.unwrap_or_default();
    let original_url = validate_url(&raw_url).map_err(|e| match e {
        UrlValidationError::Missing => AppError::bad_request(e.to_string(), json!({})),
        other => AppError::bad_request(
            "Invalid URL format",
            json!({ "reason": other.to_string() }),
        ),
    })?;

    let shortened = state.link_service.shorten(original_url).await?;

    let base = base_url(state.public_base_url.as_deref(), &headers);
    let short_url = short_url(&base, &shortened.link.short_code);

    let status = if shortened.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(ShortenResponse::from_link(shortened.link, short_url))))
}
