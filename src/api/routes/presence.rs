use axum::extract::{Path, State};
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::UserId;
use crate::query::{MeanTimeRow, StartEndRow, TotalTimeRow, UserSummary};

/// Resolve the optional `:user_id` segment. A missing id yields `None`,
/// which the handlers treat like an unknown user.
fn parse_user_id(segment: Option<Path<String>>) -> Result<Option<UserId>, ApiError> {
    match segment {
        None => Ok(None),
        Some(Path(raw)) => raw
            .parse::<UserId>()
            .map(Some)
            .map_err(|_| ApiError::NotFound(format!("Invalid user id {:?}", raw))),
    }
}

/// Users listing for the dashboard dropdown.
pub async fn users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>, ApiError> {
    Ok(Json(state.queries.users()?))
}

/// Mean presence time of a user grouped by weekday.
pub async fn mean_time_weekday(
    State(state): State<AppState>,
    user_id: Option<Path<String>>,
) -> Result<Json<Vec<MeanTimeRow>>, ApiError> {
    let result = match parse_user_id(user_id)? {
        Some(id) => state.queries.mean_time_by_weekday(id)?,
        None => Vec::new(),
    };
    Ok(Json(result))
}

/// Total presence time of a user grouped by weekday.
pub async fn presence_weekday(
    State(state): State<AppState>,
    user_id: Option<Path<String>>,
) -> Result<Json<Vec<TotalTimeRow>>, ApiError> {
    let result = match parse_user_id(user_id)? {
        Some(id) => state.queries.total_time_by_weekday(id)?,
        None => Vec::new(),
    };
    Ok(Json(result))
}

/// Mean arrival and departure time of a user grouped by weekday.
pub async fn presence_start_end(
    State(state): State<AppState>,
    user_id: Option<Path<String>>,
) -> Result<Json<Vec<StartEndRow>>, ApiError> {
    let result = match parse_user_id(user_id)? {
        Some(id) => state.queries.start_end_by_weekday(id)?,
        None => Vec::new(),
    };
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::query::tests::fixture_path;
    use crate::query::PresenceQueries;
    use crate::storage::{CachedStore, CsvSource, DEFAULT_VALIDITY};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn setup_test_state(csv: &Path) -> AppState {
        let cache = CachedStore::new(CsvSource::new(csv), DEFAULT_VALIDITY);
        AppState {
            queries: PresenceQueries::new(Arc::new(cache)),
            static_dir: Arc::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")),
        }
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        if status == StatusCode::OK {
            assert_eq!(
                resp.headers()[header::CONTENT_TYPE],
                "application/json"
            );
        }
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_api_users() {
        let app = build_router(setup_test_state(&fixture_path()));
        let (status, json) = get_json(app, "/api/v1/users").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[0], json!({"user_id": 10, "name": "User 10"}));
    }

    #[tokio::test]
    async fn test_api_mean_time_weekday() {
        let app = build_router(setup_test_state(&fixture_path()));
        let (status, json) = get_json(app, "/api/v1/mean_time_weekday/10").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!([
                ["Mon", 0.0],
                ["Tue", 30047.0],
                ["Wed", 24465.0],
                ["Thu", 23705.0],
                ["Fri", 0.0],
                ["Sat", 0.0],
                ["Sun", 0.0]
            ])
        );
    }

    #[tokio::test]
    async fn test_api_presence_weekday() {
        let app = build_router(setup_test_state(&fixture_path()));
        let (status, json) = get_json(app, "/api/v1/presence_weekday/10").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!([
                ["Weekday", "Presence (s)"],
                ["Mon", 0],
                ["Tue", 30047],
                ["Wed", 24465],
                ["Thu", 23705],
                ["Fri", 0],
                ["Sat", 0],
                ["Sun", 0]
            ])
        );
    }

    #[tokio::test]
    async fn test_api_presence_start_end() {
        let app = build_router(setup_test_state(&fixture_path()));
        let (status, json) = get_json(app, "/api/v1/presence_start_end/10").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!([
                ["Mon", 0.0, 0.0],
                ["Tue", 34745.0, 64792.0],
                ["Wed", 33592.0, 58057.0],
                ["Thu", 38926.0, 62631.0],
                ["Fri", 0.0, 0.0],
                ["Sat", 0.0, 0.0],
                ["Sun", 0.0, 0.0]
            ])
        );
    }

    #[tokio::test]
    async fn test_api_unknown_user_is_empty_array() {
        for uri in [
            "/api/v1/mean_time_weekday/999",
            "/api/v1/presence_weekday/999",
            "/api/v1/presence_start_end/999",
            "/api/v1/mean_time_weekday/",
            "/api/v1/presence_weekday/",
            "/api/v1/presence_start_end/",
        ] {
            let app = build_router(setup_test_state(&fixture_path()));
            let (status, json) = get_json(app, uri).await;

            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(json, json!([]), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_api_invalid_user_id() {
        let app = build_router(setup_test_state(&fixture_path()));
        let (status, json) = get_json(app, "/api/v1/mean_time_weekday/abc").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_api_source_unavailable() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_test_state(&tmp.path().join("missing.csv")));
        let (status, json) = get_json(app, "/api/v1/mean_time_weekday/10").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
