//! Item endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::errors::ApiError;
use crate::domain::{DomainError, Item, NewItem};
use crate::repository::{Page, Repository};
use crate::AppState;

pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.items.list(page).await?;
    Ok(Json(items))
}

pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(new_item): Json<NewItem>,
) -> Result<Json<Item>, ApiError> {
    let item = state.items.create(&new_item).await?;
    tracing::info!(id = item.id, name = %item.name, "item created");
    Ok(Json(item))
}

pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, ApiError> {
    let item = state
        .items
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound("Item not found".to_string()))?;
    Ok(Json(item))
}
