use axum::{routing::get, Router};

use super::handlers;
use crate::shared::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/reviews",
            get(handlers::list_reviews).post(handlers::create_review),
        )
        .route(
            "/reviews/:id",
            get(handlers::get_review)
                .patch(handlers::update_review)
                .delete(handlers::delete_review),
        )
}
