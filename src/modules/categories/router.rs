use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use super::handlers;
use crate::modules::roles::MANAGER;
use crate::shared::middleware::{require_role, RequiredRole};
use crate::shared::state::AppState;

/// Reads are public; writes need a manager.
pub fn router(state: &AppState) -> Router<AppState> {
    let manager = middleware::from_fn_with_state(RequiredRole::new(state, MANAGER), require_role);

    Router::new()
        .route(
            "/categories",
            get(handlers::list_categories)
                .merge(post(handlers::create_category).route_layer(manager.clone())),
        )
        .route(
            "/category/:id",
            get(handlers::get_category).merge(
                patch(handlers::update_category)
                    .delete(handlers::delete_category)
                    .route_layer(manager),
            ),
        )
}
