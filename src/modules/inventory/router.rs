use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::modules::roles::MANAGER;
use crate::shared::middleware::{require_role, RequiredRole};
use crate::shared::state::AppState;

/// Logs are append-only: no update or delete routes.
pub fn router(state: &AppState) -> Router<AppState> {
    let manager = middleware::from_fn_with_state(RequiredRole::new(state, MANAGER), require_role);

    Router::new()
        .route(
            "/inventory_logs",
            get(handlers::list_inventory_logs)
                .merge(post(handlers::create_inventory_log).route_layer(manager)),
        )
        .route("/inventory_logs/:id", get(handlers::get_inventory_log))
}
