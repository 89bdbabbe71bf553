use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::error::AppError;
use crate::model::{DeleteConfirmation, ItemFields, ShoppingItem};
use crate::AppState;

fn validated(payload: Result<Json<ItemFields>, JsonRejection>) -> Result<ItemFields, AppError> {
    let Json(fields) = payload?;
    fields.validate().map_err(AppError::MalformedPayload)?;
    Ok(fields)
}

pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<ShoppingItem>>, AppError> {
    let items = state
        .store
        .list_all()
        .await
        .map_err(AppError::store("Error fetching items"))?;
    info!(count = items.len(), "retrieved items");
    Ok(Json(items))
}

pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemFields>, JsonRejection>,
) -> Result<(StatusCode, Json<ShoppingItem>), AppError> {
    let fields = validated(payload)?;
    let item = state
        .store
        .create(fields)
        .await
        .map_err(AppError::store("Error creating item"))?;
    info!(id = %item.id, name = %item.name, "created item");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace an item's fields. An unknown id answers `null` rather than 404.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ItemFields>, JsonRejection>,
) -> Result<Json<Option<ShoppingItem>>, AppError> {
    let fields = validated(payload)?;
    let updated = state
        .store
        .update_by_id(&id, fields)
        .await
        .map_err(AppError::store("Error updating item"))?;
    match &updated {
        Some(item) => info!(id = %item.id, checked = item.checked, amount = ?item.amount, "updated item"),
        None => debug!(%id, "update target not found"),
    }
    Ok(Json(updated))
}

/// Delete an item. Succeeds whether or not the id existed.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    let removed = state
        .store
        .delete_by_id(&id)
        .await
        .map_err(AppError::store("Error deleting item"))?;
    if removed {
        info!(%id, "deleted item");
    } else {
        debug!(%id, "delete target not found");
    }
    Ok(Json(DeleteConfirmation::item_deleted()))
}
