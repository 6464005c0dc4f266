use axum::{routing::get, Router};

use super::handlers;
use crate::shared::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/addresses",
            get(handlers::list_addresses).post(handlers::create_address),
        )
        .route(
            "/addresses/:id",
            get(handlers::get_address)
                .patch(handlers::update_address)
                .delete(handlers::delete_address),
        )
}
