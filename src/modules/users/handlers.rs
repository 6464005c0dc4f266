use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::dtos::{CreateUserRequest, UpdateUserRequest, UserResponse};
use super::service::UserService;
use crate::shared::{error::AppResult, extract::AppJson, handlers::message, state::AppState};

pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    Ok(Json(UserService::list(&*state.db).await?))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserResponse>> {
    Ok(Json(UserService::get(&*state.db, id).await?))
}

pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = UserService::create(&*state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    Ok(Json(UserService::update(&*state.db, id, payload).await?))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    UserService::delete(&*state.db, id).await?;
    Ok(message("User deleted"))
}
