use axum::{extract::DefaultBodyLimit, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::modules::{
    addresses, auth, brands, categories, customers, inventory, order_items, orders, products,
    reviews, roles, users,
};
use crate::shared::handlers::{handler_404, handler_500};
use crate::shared::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn api_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(auth::router::router())
        .merge(roles::router::router(state))
        .merge(users::router::router(state))
        .merge(categories::router::router(state))
        .merge(brands::router::router(state))
        .merge(products::router::router(state))
        .merge(customers::router::router())
        .merge(addresses::router::router())
        .merge(orders::router::router())
        .merge(order_items::router::router())
        .merge(reviews::router::router())
        .merge(inventory::router::router(state))
}

pub fn init_router(state: AppState) -> Router {
    let upload_dir = state.config.upload_dir.trim_matches('/').to_string();
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_router(&state))
        .nest_service(
            &format!("/{}", upload_dir),
            ServeDir::new(&state.config.upload_dir),
        )
        .fallback(handler_404)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handler_500))
        .with_state(state)
}
