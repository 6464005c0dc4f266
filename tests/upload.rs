mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{json_request, send, seed_category, seed_product, spawn_app, token_for, TestApp};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::Value;
use storefront_backend::modules::products::entities::{product, product_image};

const BOUNDARY: &str = "----storefront-test-boundary";

enum Part<'a> {
    Text(&'a str, String),
    File(&'a str, &'a [u8]),
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(file_name, data) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"images\"; filename=\"{}\"\r\n",
                        file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn product_parts<'a>(sku: &str, category_id: i32) -> Vec<Part<'a>> {
    vec![
        Part::Text("name", "Spark plug".to_string()),
        Part::Text("sku", sku.to_string()),
        Part::Text("description", "Iridium tip".to_string()),
        Part::Text("price", "12.50".to_string()),
        Part::Text("category_id", category_id.to_string()),
        Part::Text("stock", "8".to_string()),
    ]
}

async fn upload(app: &TestApp, parts: &[Part<'_>], token: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/create-product")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn test_upload_creates_product_images_and_files() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;
    let category = seed_category(&app, "ignition").await;

    let mut parts = product_parts("SP-1", category);
    parts.push(Part::File("front view.png", b"\x89PNG fake"));
    parts.push(Part::File("side.JPG", b"jpeg bytes"));
    let (status, body) = upload(&app, &parts, &manager).await;

    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["msg"], "product Spark plug created successfully");
    assert_eq!(body["product"]["stock"], 8);

    let dir_name = app.upload_dir().file_name().unwrap().to_string_lossy().into_owned();
    let img_url = body["product"]["imgUrl"].as_str().unwrap();
    assert!(
        img_url.starts_with(&format!("http://shop.test/{}/", dir_name)),
        "{}",
        img_url
    );
    assert!(img_url.ends_with("_front_view.png"));

    let files = app.uploaded_files();
    assert_eq!(files.len(), 2);
    assert_eq!(product_image::Entity::find().count(&*app.state.db).await.unwrap(), 2);

    let product_id = body["product"]["id"].as_i64().unwrap();
    let (_, detail) = send(
        &app,
        json_request(Method::GET, &format!("/api/v1/product/{}", product_id), None, None),
    )
    .await;
    assert_eq!(detail["images"].as_array().unwrap().len(), 2);
    assert_eq!(detail["images"][0], img_url);

    // stored files are served back under the upload directory
    let stored = img_url.rsplit('/').next().unwrap();
    let request = Request::builder()
        .uri(format!("/{}/{}", dir_name, stored))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_disallowed_extension_writes_nothing() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;
    let category = seed_category(&app, "fuel").await;

    let mut parts = product_parts("FUEL-1", category);
    parts.push(Part::File("good.png", b"png"));
    parts.push(Part::File("payload.exe", b"MZ"));
    let (status, body) = upload(&app, &parts, &manager).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "File type not allowed");
    assert!(app.uploaded_files().is_empty());
    assert_eq!(product::Entity::find().count(&*app.state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_upload_without_images_is_rejected() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;
    let category = seed_category(&app, "cooling").await;

    let (status, body) = upload(&app, &product_parts("COOL-1", category), &manager).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "At least one valid image is required.");
}

#[tokio::test]
async fn test_missing_field_is_named() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;

    let parts = vec![
        Part::Text("name", "No sku".to_string()),
        Part::File("a.png", b"png"),
    ];
    let (status, body) = upload(&app, &parts, &manager).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required field: sku");
}

#[tokio::test]
async fn test_unknown_category_writes_nothing() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;

    let mut parts = product_parts("LOST-1", 404);
    parts.push(Part::File("a.png", b"png"));
    let (status, _) = upload(&app, &parts, &manager).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(app.uploaded_files().is_empty());
}

#[tokio::test]
async fn test_non_multipart_request_is_unsupported() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;

    let request = json_request(
        Method::POST,
        "/api/v1/create-product",
        Some(serde_json::json!({ "name": "x" })),
        Some(&manager),
    );
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error"], "Unsupported Media Type: Use multipart/form-data");
}

#[tokio::test]
async fn test_duplicate_sku_removes_written_files() {
    let app = spawn_app().await;
    let manager = token_for(&app, "manager").await;
    let category = seed_category(&app, "filters").await;
    seed_product(&app, category, "DUP-1", 1).await;

    let mut parts = product_parts("DUP-1", category);
    parts.push(Part::File("dup.webp", b"webp"));
    let (status, body) = upload(&app, &parts, &manager).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "integrity");
    assert!(app.uploaded_files().is_empty());
    assert_eq!(product::Entity::find().count(&*app.state.db).await.unwrap(), 1);
    assert_eq!(product_image::Entity::find().count(&*app.state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_upload_requires_manager() {
    let app = spawn_app().await;
    let user = token_for(&app, "user").await;
    let category = seed_category(&app, "trim").await;

    let mut parts = product_parts("TRIM-1", category);
    parts.push(Part::File("a.png", b"png"));
    let (status, _) = upload(&app, &parts, &user).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(app.uploaded_files().is_empty());
}
