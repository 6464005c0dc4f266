use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use super::handlers;
use crate::modules::roles::MANAGER;
use crate::shared::middleware::{require_role, RequiredRole};
use crate::shared::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    let manager = middleware::from_fn_with_state(RequiredRole::new(state, MANAGER), require_role);

    Router::new()
        .route(
            "/brands",
            get(handlers::list_brands)
                .merge(post(handlers::create_brand).route_layer(manager.clone())),
        )
        .route(
            "/brands/:id",
            get(handlers::get_brand).merge(
                patch(handlers::update_brand)
                    .delete(handlers::delete_brand)
                    .route_layer(manager),
            ),
        )
}
