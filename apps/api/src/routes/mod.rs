pub mod health;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::presets;
use crate::state::AppState;

/// Router-wide request body ceiling. Individual resumes are capped at 10 MiB
/// in the submission handler; this bound covers a batch of them plus the
/// form overhead.
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/presets", get(presets::handle_list_presets))
        .route("/api/v1/presets/:name", get(presets::handle_get_preset))
        .route("/api/v1/submissions", post(handlers::handle_submit))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::testing::ScriptedModel;
    use crate::presets::PresetStore;

    fn test_app() -> Router {
        build_router(AppState {
            model: Arc::new(ScriptedModel::always_ok("unused")),
            presets: Arc::new(PresetStore::default()),
        })
    }

    async fn get_response(uri: &str) -> axum::response::Response {
        test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_route_is_wired() {
        let response = get_response("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_serves_html() {
        let response = get_response("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_preset_list_is_empty_json_array_without_files() {
        let response = get_response("/api/v1/presets").await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"[]");
    }

    #[tokio::test]
    async fn test_unknown_preset_is_404() {
        let response = get_response("/api/v1/presets/Nonexistent").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
