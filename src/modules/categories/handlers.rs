use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::dtos::{CategoryTree, CreateCategoryRequest, UpdateCategoryRequest};
use super::entities::category;
use super::service::CategoryService;
use crate::shared::{error::AppResult, extract::AppJson, handlers::message, state::AppState};

pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryTree>>> {
    Ok(Json(CategoryService::list(&*state.db).await?))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CategoryTree>> {
    Ok(Json(CategoryService::get(&*state.db, id).await?))
}

pub async fn create_category(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<category::Model>)> {
    let category = CategoryService::create(&*state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateCategoryRequest>,
) -> AppResult<Json<category::Model>> {
    Ok(Json(CategoryService::update(&*state.db, id, payload).await?))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    CategoryService::delete(&*state.db, id).await?;
    Ok(message("Category deleted"))
}
