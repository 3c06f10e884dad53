//! Item HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

use crate::application::{CreateItem, GetItem, GetItemByName};
use crate::config::CreateResponseMode;
use crate::domain::{Item, ItemId, NewItem};
use crate::infrastructure::http::dto::{CreateItemResponseBody, CreatedItemResponse, ItemNameQuery};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建物品
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Result<Json<CreateItemResponseBody>, ApiError> {
    let Json(new_item) = payload?;

    let result = state
        .create_item_handler
        .handle(CreateItem {
            name: new_item.name,
            age: new_item.age,
        })
        .await?;

    let body = match state.create_response {
        CreateResponseMode::Collection => CreateItemResponseBody::Collection(result.items),
        CreateResponseMode::Created => {
            CreateItemResponseBody::Created(CreatedItemResponse::from(result.created))
        }
    };

    Ok(Json(body))
}

/// 按 ID 获取物品，ID 必须大于 0
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    item_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(raw_id) = item_id.map_err(|e| ApiError::invalid_path("item_id", e))?;
    let item_id = ItemId::new(raw_id).ok_or_else(|| {
        ApiError::validation(
            &["path", "item_id"],
            "Input should be greater than 0",
            "greater_than",
        )
    })?;

    let item = state.get_item_handler.handle(GetItem { item_id }).await?;

    Ok(Json(item))
}

/// 按 ID + 名称获取物品
pub async fn get_item_by_name(
    State(state): State<Arc<AppState>>,
    item_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<ItemNameQuery>, QueryRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(item_id) = item_id.map_err(|e| ApiError::invalid_path("item_id", e))?;
    let Query(ItemNameQuery { name }) = query?;

    let item = state
        .get_item_by_name_handler
        .handle(GetItemByName { item_id, name })
        .await?;

    Ok(Json(item))
}
