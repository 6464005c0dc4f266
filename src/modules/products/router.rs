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
            "/products",
            get(handlers::list_products)
                .merge(post(handlers::create_product).route_layer(manager.clone())),
        )
        .route(
            "/product/:id",
            get(handlers::get_product).merge(
                patch(handlers::update_product)
                    .delete(handlers::delete_product)
                    .route_layer(manager.clone()),
            ),
        )
        .route(
            "/create-product",
            post(handlers::upload_product).route_layer(manager),
        )
}
