use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use super::dtos::{LoginRequest, LoginResponse};
use super::service::{AuthService, Claims};
use crate::modules::users::dtos::RegisterRequest;
use crate::shared::{error::AppResult, extract::AppJson, handlers::message, state::AppState};

pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let user = AuthService::register(&*state.db, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "msg": "User registered successfully", "user": user })),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    Ok(Json(AuthService::login(&state, payload).await?))
}

pub async fn logout(State(state): State<AppState>, claims: Claims) -> AppResult<Json<Value>> {
    AuthService::logout(&state, &claims).await?;
    Ok(message("Successfully logged out"))
}
