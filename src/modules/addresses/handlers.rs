use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::dtos::{CreateAddressRequest, UpdateAddressRequest};
use super::service::AddressService;
use crate::modules::customers::entities::address;
use crate::shared::{error::AppResult, extract::AppJson, handlers::message, state::AppState};

pub async fn list_addresses(State(state): State<AppState>) -> AppResult<Json<Vec<address::Model>>> {
    Ok(Json(AddressService::list(&*state.db).await?))
}

pub async fn get_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<address::Model>> {
    Ok(Json(AddressService::find(&*state.db, id).await?))
}

pub async fn create_address(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateAddressRequest>,
) -> AppResult<(StatusCode, Json<address::Model>)> {
    let address = AddressService::create(&*state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateAddressRequest>,
) -> AppResult<Json<address::Model>> {
    Ok(Json(AddressService::update(&*state.db, id, payload).await?))
}

pub async fn delete_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    AddressService::delete(&*state.db, id).await?;
    Ok(message("Address deleted"))
}
