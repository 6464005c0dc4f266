#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use storefront_backend::{
    bootstrap,
    modules::{
        auth::service::AuthService,
        categories::{dtos::CreateCategoryRequest, service::CategoryService},
        products::{dtos::CreateProductRequest, entities::product, service::ProductService},
        users::{dtos::CreateUserRequest, service::UserService},
    },
    routers,
    shared::{config::Config, state::AppState},
};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub state: AppState,
    pub router: Router,
    pub uploads: TempDir,
}

impl TestApp {
    pub fn upload_dir(&self) -> &std::path::Path {
        self.uploads.path()
    }

    pub fn uploaded_files(&self) -> Vec<String> {
        std::fs::read_dir(self.upload_dir())
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn test_config(upload_dir: String) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        // a single connection keeps every query on the same in-memory database
        database_max_connections: 1,
        database_min_connections: 1,
        database_connect_timeout: 8,
        database_idle_timeout: 60,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        rust_log: "warn".to_string(),
        app_env: "test".to_string(),
        jwt_secret: "integration-secret".to_string(),
        jwt_ttl_hours: 1,
        redis_url: None,
        upload_dir,
        public_base_url: "http://shop.test".to_string(),
        max_upload_bytes: 2 * 1024 * 1024,
    }
}

pub async fn spawn_app() -> TestApp {
    let uploads = tempfile::Builder::new()
        .prefix("test-uploads-")
        .tempdir_in(".")
        .expect("create upload dir");
    let dir_name = uploads
        .path()
        .file_name()
        .expect("upload dir name")
        .to_string_lossy()
        .into_owned();

    let state = bootstrap::create_app_state(test_config(dir_name))
        .await
        .expect("bootstrap app state");
    let router = routers::init_router(state.clone());

    TestApp {
        state,
        router,
        uploads,
    }
}

pub async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

pub fn json_request(method: Method, uri: &str, body: Option<Value>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

pub async fn get(app: &TestApp, uri: &str) -> (StatusCode, Value) {
    send(app, json_request(Method::GET, uri, None, None)).await
}

pub async fn post(app: &TestApp, uri: &str, body: Value, token: Option<&str>) -> (StatusCode, Value) {
    send(app, json_request(Method::POST, uri, Some(body), token)).await
}

pub async fn patch(app: &TestApp, uri: &str, body: Value, token: Option<&str>) -> (StatusCode, Value) {
    send(app, json_request(Method::PATCH, uri, Some(body), token)).await
}

pub async fn delete(app: &TestApp, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(app, json_request(Method::DELETE, uri, None, token)).await
}

/// Creates a user holding `role` and returns a signed token for them.
pub async fn token_for(app: &TestApp, role: &str) -> String {
    let email = format!("{}-{}@example.com", role, uuid::Uuid::new_v4().simple());
    UserService::create(
        &*app.state.db,
        CreateUserRequest {
            email: email.clone(),
            password: "correct horse".to_string(),
            first_name: None,
            last_name: None,
            role: role.to_string(),
            is_active: true,
        },
    )
    .await
    .expect("create user");

    let user = UserService::find_by_email(&*app.state.db, &email)
        .await
        .expect("lookup user")
        .expect("user exists");
    AuthService::issue_token(&app.state.config, &user, role).expect("issue token")
}

pub async fn seed_category(app: &TestApp, slug: &str) -> i32 {
    CategoryService::create(
        &*app.state.db,
        CreateCategoryRequest {
            name: slug.to_uppercase(),
            slug: slug.to_string(),
            description: None,
            parent_id: None,
            image_url: None,
        },
    )
    .await
    .expect("create category")
    .id
}

pub async fn seed_product(app: &TestApp, category_id: i32, sku: &str, stock: i32) -> product::Model {
    ProductService::create(
        &*app.state.db,
        CreateProductRequest {
            name: format!("Product {}", sku),
            sku: sku.to_string(),
            description: "Test product".to_string(),
            price: 25.0,
            category_id,
            brand_id: None,
            cost: None,
            discount: None,
            stock,
            weight: None,
            dimensions: None,
            features: None,
            specifications: None,
            status: None,
            meta_title: None,
            meta_description: None,
            is_featured: false,
            compatible_makes: None,
            compatible_models: None,
        },
    )
    .await
    .expect("create product")
}

pub fn checkout_payload(email: &str, items: Value) -> Value {
    json!({
        "customer": {
            "first_name": "Achieng",
            "last_name": "Otieno",
            "email": email,
            "phone": "0712345678"
        },
        "address": {
            "specific_address": "Plot 12, Kenyatta Ave",
            "county": "Nairobi",
            "area_town": "CBD",
            "city_town": "Nairobi"
        },
        "order": {
            "status": "pending",
            "total_amount": 50.0,
            "payment_status": "unpaid",
            "estimated_delivery_date": "2025-04-01"
        },
        "order_items": items
    })
}
