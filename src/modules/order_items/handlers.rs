use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::dtos::{CreateOrderItemRequest, UpdateOrderItemRequest};
use super::service::OrderItemService;
use crate::modules::orders::entities::order_item;
use crate::shared::{error::AppResult, extract::AppJson, handlers::message, state::AppState};

pub async fn list_order_items(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<order_item::Model>>> {
    Ok(Json(OrderItemService::list(&*state.db).await?))
}

pub async fn get_order_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<order_item::Model>> {
    Ok(Json(OrderItemService::find(&*state.db, id).await?))
}

pub async fn create_order_item(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateOrderItemRequest>,
) -> AppResult<(StatusCode, Json<order_item::Model>)> {
    let item = OrderItemService::create(&*state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_order_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateOrderItemRequest>,
) -> AppResult<Json<order_item::Model>> {
    Ok(Json(OrderItemService::update(&*state.db, id, payload).await?))
}

pub async fn delete_order_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    OrderItemService::delete(&*state.db, id).await?;
    Ok(message("Order item deleted"))
}
