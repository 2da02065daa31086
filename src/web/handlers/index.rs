//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::HeaderMap, response::IntoResponse};

use crate::api::dto::recent::DEFAULT_RECENT_LIMIT;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::{base_url, short_url};

/// A recent link as shown on the landing page.
pub struct RecentLinkView {
    pub short_url: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: String,
}

/// Template for the landing page.
///
/// Renders `templates/index.html` with:
/// - URL shortening form (submitted by `static/js/app.js`)
/// - The most recently created links
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub recent: Vec<RecentLinkView>,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Errors
///
/// Returns 500 if the recent links cannot be loaded.
pub async fn index_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let links = state.link_service.recent(DEFAULT_RECENT_LIMIT).await?;

    let base = base_url(state.public_base_url.as_deref(), &headers);
    let recent = links
        .into_iter()
        .map(|link| RecentLinkView {
            short_url: short_url(&base, &link.short_code),
            original_url: link.original_url,
            clicks: link.clicks,
            created_at: link.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        })
        .collect();

    Ok(IndexTemplate { recent })
}
