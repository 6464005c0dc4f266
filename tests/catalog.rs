mod common;

use axum::http::{header, Method, Request, StatusCode};
use axum::body::Body;
use chrono::Utc;
use common::{
    checkout_payload, delete, get, patch, post, seed_category, seed_product, send, spawn_app,
    token_for,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use serde_json::json;
use storefront_backend::modules::{
    customers::entities::address,
    inventory::entities::inventory_log,
    products::entities::{product, product_image},
    reviews::entities::review,
};

#[tokio::test]
async fn test_category_delete_is_restricted_by_products() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;
    let category = seed_category(&app, "engine").await;
    seed_product(&app, category, "ENG-1", 1).await;

    let (status, body) = delete(&app, &format!("/api/v1/category/{}", category), Some(&manager)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");
    let (status, _) = get(&app, &format!("/api/v1/category/{}", category)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_category_delete_promotes_subcategories_to_roots() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;
    let parent = seed_category(&app, "suspension").await;
    let (status, child) = post(
        &app,
        "/api/v1/categories",
        json!({ "name": "Shocks", "slug": "shocks", "parent_id": parent }),
        Some(&manager),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(child["parent_id"], parent);

    let (_, tree) = get(&app, "/api/v1/categories").await;
    assert_eq!(tree.as_array().unwrap().len(), 1);
    assert_eq!(tree[0]["subcategories"][0]["slug"], "shocks");

    let (status, body) = delete(&app, &format!("/api/v1/category/{}", parent), Some(&manager)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Category deleted");

    let (_, tree) = get(&app, "/api/v1/categories").await;
    assert_eq!(tree.as_array().unwrap().len(), 1);
    assert_eq!(tree[0]["slug"], "shocks");
    assert!(tree[0]["parent_id"].is_null());
}

#[tokio::test]
async fn test_category_cannot_move_under_its_subcategory() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;
    let parent = seed_category(&app, "body").await;
    let (_, child) = post(
        &app,
        "/api/v1/categories",
        json!({ "name": "Doors", "slug": "doors", "parent_id": parent }),
        Some(&manager),
    )
    .await;
    let child_id = child["id"].as_i64().unwrap();

    let (status, body) = patch(
        &app,
        &format!("/api/v1/category/{}", parent),
        json!({ "parent_id": child_id }),
        Some(&manager),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");

    let (_, tree) = get(&app, "/api/v1/categories").await;
    assert_eq!(tree.as_array().unwrap().len(), 1);
    assert_eq!(tree[0]["id"], parent);
    assert_eq!(tree[0]["subcategories"][0]["id"], child_id);
}

#[tokio::test]
async fn test_unknown_parent_category_is_not_found() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;

    let (status, body) = post(
        &app,
        "/api/v1/categories",
        json!({ "name": "Orphan", "slug": "orphan", "parent_id": 4242 }),
        Some(&manager),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Parent category not found");
}

#[tokio::test]
async fn test_brand_name_conflict_and_delete_detaches_products() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;
    let category = seed_category(&app, "lighting").await;
    let product = seed_product(&app, category, "LGT-1", 3).await;

    let (status, brand) = post(
        &app,
        "/api/v1/brands",
        json!({ "name": "Bosch", "slug": "bosch" }),
        Some(&manager),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let brand_id = brand["id"].as_i64().unwrap();

    let (status, body) = post(
        &app,
        "/api/v1/brands",
        json!({ "name": "Bosch", "slug": "bosch-2" }),
        Some(&manager),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "conflict");

    let (status, _) = patch(
        &app,
        &format!("/api/v1/product/{}", product.id),
        json!({ "brand_id": brand_id }),
        Some(&manager),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = delete(&app, &format!("/api/v1/brands/{}", brand_id), Some(&manager)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, detail) = get(&app, &format!("/api/v1/product/{}", product.id)).await;
    assert!(detail["brand_id"].is_null());
}

#[tokio::test]
async fn test_product_delete_restricted_by_order_items() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;
    let category = seed_category(&app, "clutch").await;
    let product = seed_product(&app, category, "CL-1", 4).await;

    let items = json!([
        {"product_id": product.id, "quantity": 1, "unit_price": 25.0, "total_price": 25.0}
    ]);
    let (status, _) = post(
        &app,
        "/api/v1/create-order/process",
        checkout_payload("clutch@example.com", items),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = delete(&app, &format!("/api/v1/product/{}", product.id), Some(&manager)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");
}

#[tokio::test]
async fn test_product_delete_cascades_dependents() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;
    let category = seed_category(&app, "exhaust").await;
    let product = seed_product(&app, category, "EX-1", 4).await;
    let db = &*app.state.db;

    product_image::ActiveModel {
        product_id: Set(product.id),
        url: Set("http://shop.test/uploads/ex.png".to_string()),
        is_primary: Set(true),
        alt_text: Set(None),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let (status, _) = post(
        &app,
        "/api/v1/reviews",
        json!({ "product_id": product.id, "rating": 4, "comment": "Quiet" }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = post(
        &app,
        "/api/v1/inventory_logs",
        json!({ "product_id": product.id, "quantity_change": 2, "change_type": "restock" }),
        Some(&manager),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, detail) = get(&app, &format!("/api/v1/product/{}", product.id)).await;
    assert_eq!(detail["images"][0], "http://shop.test/uploads/ex.png");

    let (status, body) = delete(&app, &format!("/api/v1/product/{}", product.id), Some(&manager)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Product deleted");

    assert!(product::Entity::find_by_id(product.id).one(db).await.unwrap().is_none());
    assert_eq!(product_image::Entity::find().count(db).await.unwrap(), 0);
    assert_eq!(review::Entity::find().count(db).await.unwrap(), 0);
    assert_eq!(inventory_log::Entity::find().count(db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_customer_delete_policies() {
    let app = spawn_app().await;
    let category = seed_category(&app, "seats").await;
    let product = seed_product(&app, category, "ST-1", 4).await;
    let db = &*app.state.db;

    // a customer with an order cannot be removed
    let items = json!([
        {"product_id": product.id, "quantity": 1, "unit_price": 25.0, "total_price": 25.0}
    ]);
    let (_, placed) = post(
        &app,
        "/api/v1/create-order/process",
        checkout_payload("buyer@example.com", items),
        None,
    )
    .await;
    let buyer_id = placed["customer"]["id"].as_i64().unwrap();
    let (status, _) = delete(&app, &format!("/api/v1/customer/{}", buyer_id), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // one without orders takes its addresses along and leaves reviews anonymous
    let (status, customer) = post(
        &app,
        "/api/v1/customers",
        json!({ "first_name": "Juma", "last_name": "Kariuki", "email": "juma@example.com" }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let customer_id = customer["id"].as_i64().unwrap();

    let (status, _) = post(
        &app,
        "/api/v1/addresses",
        json!({
            "customer_id": customer_id,
            "specific_address": "Moi Avenue 4",
            "county": "Mombasa",
            "area_town": "Old Town",
            "city_town": "Mombasa"
        }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, review_body) = post(
        &app,
        "/api/v1/reviews",
        json!({ "product_id": product.id, "customer_id": customer_id, "rating": 5 }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let review_id = review_body["id"].as_i64().unwrap() as i32;

    let (status, body) = delete(&app, &format!("/api/v1/customer/{}", customer_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Customer deleted");

    let remaining = address::Entity::find()
        .filter(address::Column::CustomerId.eq(customer_id as i32))
        .count(db)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
    let review = review::Entity::find_by_id(review_id).one(db).await.unwrap().unwrap();
    assert!(review.customer_id.is_none());
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;
    let category = seed_category(&app, "radiators").await;
    let product = seed_product(&app, category, "RAD-1", 6).await;

    let (status, updated) = patch(
        &app,
        &format!("/api/v1/product/{}", product.id),
        json!({ "price": 31.5 }),
        Some(&manager),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 31.5);
    assert_eq!(updated["name"], product.name);
    assert_eq!(updated["sku"], "RAD-1");
    assert_eq!(updated["stock"], 6);
}

#[tokio::test]
async fn test_product_list_is_paginated() {
    let app = spawn_app().await;
    let category = seed_category(&app, "sensors").await;
    for i in 0..3 {
        seed_product(&app, category, &format!("SN-{}", i), 1).await;
    }

    let (status, page) = get(&app, "/api/v1/products?page=2&per_page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 3);
    assert_eq!(page["pages"], 2);
    assert_eq!(page["current_page"], 2);
    assert_eq!(page["has_next"], false);
    assert_eq!(page["has_prev"], true);
    assert_eq!(page["content"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_out_of_range_page_params() {
    let app = spawn_app().await;
    let category = seed_category(&app, "gaskets").await;
    seed_product(&app, category, "GK-1", 1).await;

    let (status, page) = get(&app, "/api/v1/products?page=18446744073709551615").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 1);
    assert!(page["content"].as_array().unwrap().is_empty());

    let (status, body) = get(&app, "/api/v1/products?page=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");

    let (status, body) = get(&app, "/api/v1/customers?per_page=lots").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], 400);
}

#[tokio::test]
async fn test_unknown_resources_return_json_not_found() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/v1/product/777").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");

    let (status, body) = get(&app, "/api/v1/no-such-route").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/brands")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", manager))
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");
}

#[tokio::test]
async fn test_review_rating_out_of_range_is_rejected() {
    let app = spawn_app().await;
    let category = seed_category(&app, "pads").await;
    let product = seed_product(&app, category, "PAD-1", 2).await;

    let (status, body) = post(
        &app,
        "/api/v1/reviews",
        json!({ "product_id": product.id, "rating": 6 }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Rating must be between 1 and 5");
}
