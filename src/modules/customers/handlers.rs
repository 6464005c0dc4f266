use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::dtos::{CreateCustomerRequest, UpdateCustomerRequest};
use super::entities::customer;
use super::service::CustomerService;
use crate::shared::{
    error::AppResult,
    extract::{AppJson, AppQuery},
    handlers::message,
    pagination::{Page, PageParams},
    state::AppState,
};

pub async fn list_customers(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<Page<customer::Model>>> {
    Ok(Json(CustomerService::list(&*state.db, &params).await?))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<customer::Model>> {
    Ok(Json(CustomerService::find(&*state.db, id).await?))
}

pub async fn create_customer(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<customer::Model>)> {
    let customer = CustomerService::create(&*state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateCustomerRequest>,
) -> AppResult<Json<customer::Model>> {
    Ok(Json(CustomerService::update(&*state.db, id, payload).await?))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    CustomerService::delete(&*state.db, id).await?;
    Ok(message("Customer deleted"))
}
