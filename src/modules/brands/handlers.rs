use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::dtos::{CreateBrandRequest, UpdateBrandRequest};
use super::entities::brand;
use super::service::BrandService;
use crate::shared::{error::AppResult, extract::AppJson, handlers::message, state::AppState};

pub async fn list_brands(State(state): State<AppState>) -> AppResult<Json<Vec<brand::Model>>> {
    Ok(Json(BrandService::list(&*state.db).await?))
}

pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<brand::Model>> {
    Ok(Json(BrandService::find(&*state.db, id).await?))
}

pub async fn create_brand(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateBrandRequest>,
) -> AppResult<(StatusCode, Json<brand::Model>)> {
    let brand = BrandService::create(&*state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(brand)))
}

pub async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateBrandRequest>,
) -> AppResult<Json<brand::Model>> {
    Ok(Json(BrandService::update(&*state.db, id, payload).await?))
}

pub async fn delete_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    BrandService::delete(&*state.db, id).await?;
    Ok(message("Brand deleted"))
}
