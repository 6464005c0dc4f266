use axum::{middleware, routing::get, Router};

use crate::modules::roles::ADMIN;
use crate::modules::users::handlers;
use crate::shared::middleware::{require_role, RequiredRole};
use crate::shared::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/users/:id",
            get(handlers::get_user)
                .patch(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route_layer(middleware::from_fn_with_state(
            RequiredRole::new(state, ADMIN),
            require_role,
        ))
}
