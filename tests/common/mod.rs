use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use lesson_service::app::build_app;
use lesson_service::config::AppConfig;
use lesson_service::state::AppState;

/// The service does not own its schema; tests create the table it expects.
pub async fn create_schema(pool: &PgPool) {
    sqlx::query(
        r#"
        CREATE TABLE lesson (
            userid      TEXT    NOT NULL,
            id          SERIAL  PRIMARY KEY,
            name        TEXT    NOT NULL,
            description TEXT    NOT NULL,
            point       INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .unwrap();
}

pub async fn build_test_app(pool: PgPool) -> Router {
    create_schema(&pool).await;
    let state = AppState::from_parts(pool, Arc::new(AppConfig::default()));
    build_app(state).unwrap()
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(json) => request.body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let response = send(app, method, uri, body).await;
    let status = response.status();
    (status, body_json(response).await)
}
