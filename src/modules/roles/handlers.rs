use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::dtos::{CreateRoleRequest, UpdateRoleRequest};
use super::entities::role;
use super::service::RoleService;
use crate::shared::{
    error::AppResult, extract::AppJson, handlers::message, state::AppState,
};

pub async fn list_roles(State(state): State<AppState>) -> AppResult<Json<Vec<role::Model>>> {
    Ok(Json(RoleService::list(&*state.db).await?))
}

pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<role::Model>> {
    Ok(Json(RoleService::get(&*state.db, id).await?))
}

pub async fn create_role(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateRoleRequest>,
) -> AppResult<(StatusCode, Json<role::Model>)> {
    let role = RoleService::create(&*state.db, payload).await?;
    tracing::info!("Created role {} (level {})", role.name, role.level);
    Ok((StatusCode::CREATED, Json(role)))
}

pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateRoleRequest>,
) -> AppResult<Json<role::Model>> {
    Ok(Json(RoleService::update(&*state.db, id, payload).await?))
}

pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    RoleService::delete(&*state.db, id).await?;
    Ok(message("Role deleted"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::revocation::InMemoryRevocationStore;
    use crate::shared::config::test_config;
    use crate::shared::error::AppError;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn state_with(db: sea_orm::DatabaseConnection) -> AppState {
        AppState {
            config: Arc::new(test_config()),
            db: Arc::new(db),
            revocations: Arc::new(InMemoryRevocationStore::default()),
        }
    }

    #[tokio::test]
    async fn test_get_role_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![role::Model {
                id: 2,
                name: "manager".to_owned(),
                level: 2,
            }]])
            .into_connection();

        let response = get_role(State(state_with(db)), Path(2)).await;

        let role = response.unwrap().0;
        assert_eq!(role.name, "manager");
        assert_eq!(role.level, 2);
    }

    #[tokio::test]
    async fn test_get_role_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<role::Model>::new()])
            .into_connection();

        let response = get_role(State(state_with(db)), Path(99)).await;
        assert!(matches!(response, Err(AppError::NotFound(_))));
    }
}
