//! Route table: catalog resources plus health, readiness and version.
//!
//! Category update/delete are deliberately absent; the method router
//! answers 405 for them.

use crate::handlers::{category, product};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

/// The full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(catalog_routes(state))
}

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(product::list).post(product::create))
        .route(
            "/products/:id",
            get(product::fetch)
                .put(product::update)
                .patch(product::update)
                .delete(product::remove),
        )
        .route("/categories", get(category::list).post(category::create))
        .route("/categories/:id", get(category::fetch))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    if sqlx::query("SELECT 1").fetch_optional(&state.pool).await.is_err() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "degraded", "database": "unavailable"})),
        );
    }
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
