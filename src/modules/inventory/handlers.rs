use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dtos::{CreateInventoryLogRequest, InventoryLogFilter};
use super::entities::inventory_log;
use super::service::InventoryService;
use crate::modules::auth::service::Claims;
use crate::shared::{
    error::AppResult,
    extract::{AppJson, AppQuery},
    state::AppState,
};

pub async fn list_inventory_logs(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<InventoryLogFilter>,
) -> AppResult<Json<Vec<inventory_log::Model>>> {
    Ok(Json(InventoryService::list(&*state.db, &filter).await?))
}

pub async fn get_inventory_log(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<inventory_log::Model>> {
    Ok(Json(InventoryService::find(&*state.db, id).await?))
}

pub async fn create_inventory_log(
    State(state): State<AppState>,
    claims: Claims,
    AppJson(payload): AppJson<CreateInventoryLogRequest>,
) -> AppResult<(StatusCode, Json<inventory_log::Model>)> {
    let caller = claims.user_id().ok();
    let log = InventoryService::record(&*state.db, payload, caller).await?;
    Ok((StatusCode::CREATED, Json(log)))
}
