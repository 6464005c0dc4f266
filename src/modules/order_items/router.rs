use axum::{routing::get, Router};

use super::handlers;
use crate::shared::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/order_items",
            get(handlers::list_order_items).post(handlers::create_order_item),
        )
        .route(
            "/order_item/:id",
            get(handlers::get_order_item)
                .patch(handlers::update_order_item)
                .delete(handlers::delete_order_item),
        )
}
