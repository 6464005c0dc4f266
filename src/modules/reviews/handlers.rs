use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::dtos::{CreateReviewRequest, UpdateReviewRequest};
use super::entities::review;
use super::service::ReviewService;
use crate::shared::{error::AppResult, extract::AppJson, handlers::message, state::AppState};

pub async fn list_reviews(State(state): State<AppState>) -> AppResult<Json<Vec<review::Model>>> {
    Ok(Json(ReviewService::list(&*state.db).await?))
}

pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<review::Model>> {
    Ok(Json(ReviewService::find(&*state.db, id).await?))
}

pub async fn create_review(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<review::Model>)> {
    let review = ReviewService::create(&*state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateReviewRequest>,
) -> AppResult<Json<review::Model>> {
    Ok(Json(ReviewService::update(&*state.db, id, payload).await?))
}

pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    ReviewService::delete(&*state.db, id).await?;
    Ok(message("Review deleted"))
}
