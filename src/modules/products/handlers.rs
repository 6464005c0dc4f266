use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};

use super::dtos::{CreateProductRequest, ProductDetail, UpdateProductRequest};
use super::entities::product;
use super::service::ProductService;
use super::upload::{ensure_multipart, ProductForm, UploadService};
use crate::shared::{
    error::{AppError, AppResult},
    extract::{AppJson, AppQuery},
    handlers::message,
    pagination::{Page, PageParams},
    state::AppState,
};

pub async fn list_products(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<Page<product::Model>>> {
    Ok(Json(ProductService::list(&*state.db, &params).await?))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ProductDetail>> {
    Ok(Json(ProductService::get(&*state.db, id).await?))
}

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<product::Model>)> {
    let product = ProductService::create(&*state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateProductRequest>,
) -> AppResult<Json<product::Model>> {
    Ok(Json(ProductService::update(&*state.db, id, payload).await?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    ProductService::delete(&*state.db, id).await?;
    Ok(message("Product deleted"))
}

pub async fn upload_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    ensure_multipart(&headers)?;
    let multipart = multipart.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let form = ProductForm::read(multipart).await?;
    let product = UploadService::create_product(&state, form).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "msg": format!("product {} created successfully", product.name),
            "product": product,
        })),
    ))
}
