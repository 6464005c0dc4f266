use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::dtos::{
    CreateOrderRequest, OrderDetail, PlaceOrderRequest, PlaceOrderResponse, UpdateOrderRequest,
};
use super::entities::order;
use super::service::OrderService;
use crate::shared::{
    error::AppResult,
    extract::{AppJson, AppQuery},
    handlers::message,
    pagination::{Page, PageParams},
    state::AppState,
};

pub async fn list_orders(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<Page<order::Model>>> {
    Ok(Json(OrderService::list(&*state.db, &params).await?))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<OrderDetail>> {
    Ok(Json(OrderService::get(&*state.db, id).await?))
}

pub async fn create_order(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<order::Model>)> {
    let order = OrderService::create(&*state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateOrderRequest>,
) -> AppResult<Json<order::Model>> {
    Ok(Json(OrderService::update(&*state.db, id, payload).await?))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    OrderService::delete(&*state.db, id).await?;
    Ok(message("Order deleted"))
}

pub async fn process_order(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PlaceOrderRequest>,
) -> AppResult<(StatusCode, Json<PlaceOrderResponse>)> {
    let placed = OrderService::place_order(&*state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(placed)))
}
