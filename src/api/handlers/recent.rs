//! Handler for the recent links listing.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::HeaderMap,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::recent::{RecentLinkItem, RecentParams};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::{base_url, short_url};

/// Lists the most recently created links, newest first.
///
/// # Endpoint
///
/// `GET /api/recent`
///
/// # Query Parameters
///
/// - `limit` (optional): number of links, 1 to 100 (default: 10)
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is not an integer in range.
pub async fn recent_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<Query<RecentParams>, QueryRejection>,
) -> Result<Json<Vec<RecentLinkItem>>, AppError> {
    let Query(params) = params.map_err(|rejection| {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    params.validate()?;

    let links = state.link_service.recent(params.limit()).await?;

    let base = base_url(state.public_base_url.as_deref(), &headers);
    let items = links
        .into_iter()
        .map(|link| {
            let url = short_url(&base, &link.short_code);
            RecentLinkItem::from_link(link, url)
        })
        .collect();

    Ok(Json(items))
}
