//! Category handlers. Update and delete are not part of the API surface.

use super::body_to_map;
use crate::error::AppError;
use crate::model::{Category, CategoryDraft};
use crate::repo;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Category>>, AppError> {
    let categories = repo::category::list(&state.pool).await?;
    Ok(Json(categories))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Category>, AppError> {
    let category = repo::category::find(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound { entity: "Category", id })?;
    Ok(Json(category))
}

/// A duplicate name propagates from the store as a constraint error.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let draft = CategoryDraft::from_body(&body_to_map(body)?);
    let category = repo::category::insert(&state.pool, &draft).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
