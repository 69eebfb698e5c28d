//! REST API endpoints.
//!
//! Axum-based HTTP API serving per-weekday presence reports as JSON,
//! plus the dashboard pages that consume them.

pub mod routes;
pub mod state;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::storage::StorageError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        tracing::error!("Presence data unavailable: {}", err);
        ApiError::Internal(err.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.static_dir.as_path());

    Router::new()
        .route("/api/v1/users", get(routes::presence::users))
        .route(
            "/api/v1/mean_time_weekday/",
            get(routes::presence::mean_time_weekday),
        )
        .route(
            "/api/v1/mean_time_weekday/:user_id",
            get(routes::presence::mean_time_weekday),
        )
        .route(
            "/api/v1/presence_weekday/",
            get(routes::presence::presence_weekday),
        )
        .route(
            "/api/v1/presence_weekday/:user_id",
            get(routes::presence::presence_weekday),
        )
        .route(
            "/api/v1/presence_start_end/",
            get(routes::presence::presence_start_end),
        )
        .route(
            "/api/v1/presence_start_end/:user_id",
            get(routes::presence::presence_start_end),
        )
        .route("/", get(routes::pages::index))
        .route("/:page", get(routes::pages::page))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_maps_to_internal() {
        let err = StorageError::SourceUnavailable {
            path: "missing.csv".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let api_err: ApiError = err.into();

        assert!(matches!(api_err, ApiError::Internal(_)));
        assert_eq!(
            api_err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_status() {
        let resp = ApiError::NotFound("page".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
