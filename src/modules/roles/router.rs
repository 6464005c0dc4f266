use axum::{
    middleware,
    routing::get,
    Router,
};

use super::{handlers, ADMIN};
use crate::shared::middleware::{require_role, RequiredRole};
use crate::shared::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/roles", get(handlers::list_roles).post(handlers::create_role))
        .route(
            "/role/:id",
            get(handlers::get_role)
                .patch(handlers::update_role)
                .delete(handlers::delete_role),
        )
        .route_layer(middleware::from_fn_with_state(
            RequiredRole::new(state, ADMIN),
            require_role,
        ))
}
