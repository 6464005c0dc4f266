use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::shared::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(handlers::list_orders).post(handlers::create_order))
        .route(
            "/order/:id",
            get(handlers::get_order)
                .patch(handlers::update_order)
                .delete(handlers::delete_order),
        )
        .route("/create-order/process", post(handlers::process_order))
}
