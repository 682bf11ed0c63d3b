//! Product CRUD handlers: list, fetch, create, update, remove.

use super::body_to_map;
use crate::error::AppError;
use crate::model::{Product, ProductDraft};
use crate::repo;
use crate::response::Message;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = repo::product::list(&state.pool).await?;
    Ok(Json(products))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, AppError> {
    let product = repo::product::find(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound { entity: "Product", id })?;
    Ok(Json(product))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let draft = ProductDraft::from_body(&body_to_map(body)?);
    let product = repo::product::insert(&state.pool, &draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Serves both PUT and PATCH. The merge semantics depend on the
/// configured update policy; see `Product::apply_patch`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Json<Product>, AppError> {
    let body = body_to_map(body)?;
    let mut product = repo::product::find(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound { entity: "Product", id })?;
    product.apply_patch(&body, state.update_policy);
    let product = repo::product::update(&state.pool, &product).await?;
    Ok(Json(product))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Message>, AppError> {
    let product = repo::product::delete(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound { entity: "Product", id })?;
    Ok(Json(Message::new(format!(
        "Product '{}' deleted successfully",
        product.name
    ))))
}
