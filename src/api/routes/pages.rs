use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::api::state::AppState;
use crate::api::ApiError;

/// Dashboard pages that can be served.
pub const AVAILABLE_PAGES: [&str; 3] = [
    "mean_time_weekday",
    "presence_weekday",
    "presence_start_end",
];

const DEFAULT_PAGE: &str = "presence_weekday";

/// Temporary (302) redirect to the default dashboard page.
pub async fn index() -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, format!("/{}", DEFAULT_PAGE))],
    )
}

/// Serve `<static_dir>/<page>.html` for a known dashboard page.
pub async fn page(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Response, ApiError> {
    if !AVAILABLE_PAGES.contains(&page.as_str()) {
        return Ok((StatusCode::NOT_FOUND, "Page does not exist").into_response());
    }

    let path = state.static_dir.join(format!("{}.html", page));
    let html = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::error!("Failed to read page {:?}: {}", path, e);
        ApiError::Internal(format!("Page {} unavailable", page))
    })?;

    Ok(Html(html).into_response())
}
