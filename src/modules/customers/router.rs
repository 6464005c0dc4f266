use axum::{routing::get, Router};

use super::handlers;
use crate::shared::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            "/customer/:id",
            get(handlers::get_customer)
                .patch(handlers::update_customer)
                .delete(handlers::delete_customer),
        )
}
