//! Routers and the HTTP middleware stack.

mod api;
mod common;
pub use api::api_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Largest accepted request body. Thesis abstracts are the biggest field.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Full application: common routes at the root, API under `/api`, with CORS, tracing and a body limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state))
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    /// App over a pool that never connects; only requests rejected before the store are sent.
    fn test_app() -> Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/thesis_registry_unused")
            .unwrap();
        app(AppState::new(pool).unwrap())
    }

    async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = test_app().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn health_and_version() {
        let (status, body) = send(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));

        let (status, body) = send(Method::GET, "/version", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "thesis-registry");

        let (status, _) = send(Method::GET, "/info", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_entity_is_not_found() {
        let (status, body) = send(Method::GET, "/api/students", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn theses_cannot_be_updated() {
        let (status, body) = send(Method::PUT, "/api/theses/1001", Some(json!({ "title": "x" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "bad request: update not allowed");
    }

    #[tokio::test]
    async fn people_cannot_be_deleted() {
        let (status, _) = send(Method::DELETE, "/api/people/3", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_integer_id_is_rejected() {
        let (status, body) = send(Method::DELETE, "/api/institutes/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "bad request: invalid id: abc");
    }

    #[tokio::test]
    async fn non_object_body_is_rejected() {
        let (status, _) = send(Method::POST, "/api/keywords", Some(json!(["rust"]))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn cors_preflight_is_answered() {
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/theses")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("access-control-allow-origin"));
    }
}
