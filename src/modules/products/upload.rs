use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::{header, HeaderMap};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, TransactionTrait};
use uuid::Uuid;

use super::dtos::CreateProductRequest;
use super::entities::{product, product_image};
use super::service::ProductService;
use crate::shared::error::{AppError, AppResult};
use crate::shared::state::AppState;
use crate::shared::transaction::finish;

pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];
const REQUIRED_FIELDS: [&str; 5] = ["name", "sku", "description", "price", "category_id"];

pub fn ensure_multipart(headers: &HeaderMap) -> AppResult<()> {
    let is_multipart = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("multipart/form-data"))
        .unwrap_or(false);

    if !is_multipart {
        return Err(AppError::UnsupportedMediaType(
            "Unsupported Media Type: Use multipart/form-data".to_string(),
        ));
    }
    Ok(())
}

/// Reduces a client file name to a safe basename of `[A-Za-z0-9._-]`.
pub fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}

pub fn has_allowed_extension(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        }
        _ => false,
    }
}

pub fn stored_name(sanitized: &str) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("{}_{}", &token[..12], sanitized)
}

pub fn public_url(base_url: &str, upload_dir: &str, stored: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        upload_dir.trim_matches('/'),
        stored
    )
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

fn multipart_error(err: MultipartError) -> AppError {
    AppError::Validation(err.body_text())
}

pub struct ImageFile {
    pub file_name: String,
    pub data: Bytes,
}

/// A `/create-product` submission: text fields plus every `images` part.
#[derive(Default)]
pub struct ProductForm {
    pub fields: HashMap<String, String>,
    pub images: Vec<ImageFile>,
}

impl ProductForm {
    pub async fn read(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            if name == "images" {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                form.images.push(ImageFile { file_name, data });
            } else {
                let value = field.text().await.map_err(multipart_error)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    fn text(&self, key: &str) -> Option<String> {
        self.fields
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn number<T: FromStr>(&self, key: &str) -> AppResult<Option<T>> {
        match self.text(key) {
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|_| AppError::Validation(format!("Invalid value for {}: {}", key, raw))),
            None => Ok(None),
        }
    }

    fn required<T: FromStr>(&self, key: &str) -> AppResult<T> {
        self.number(key)?
            .ok_or_else(|| AppError::Validation(format!("Missing required field: {}", key)))
    }

    pub fn product_request(&self) -> AppResult<CreateProductRequest> {
        for field in REQUIRED_FIELDS {
            if self.text(field).is_none() {
                return Err(AppError::Validation(format!(
                    "Missing required field: {}",
                    field
                )));
            }
        }

        let brand_id = match self.number::<i32>("brand_id")? {
            Some(id) => Some(id),
            None => self.number::<i32>("branch_id")?,
        };

        let request = CreateProductRequest {
            name: self.required("name")?,
            sku: self.required("sku")?,
            description: self.required("description")?,
            price: self.required("price")?,
            category_id: self.required("category_id")?,
            brand_id,
            cost: self.number("cost")?,
            discount: self.number("discount")?,
            stock: self.number("stock")?.unwrap_or(0),
            weight: self.number("weight")?,
            dimensions: self.text("dimensions"),
            features: self.text("features"),
            specifications: self.text("specifications"),
            status: self.text("status"),
            meta_title: self.text("meta_title"),
            meta_description: self.text("meta_description"),
            is_featured: self.text("is_featured").map(|v| parse_flag(&v)).unwrap_or(false),
            compatible_makes: self.text("compatible_makes"),
            compatible_models: self.text("compatible_models"),
        };
        request.validate()?;
        Ok(request)
    }

    /// Sanitized file names paired with their bytes. Empty parts are skipped.
    pub fn accepted_images(&self) -> AppResult<Vec<(String, Bytes)>> {
        let mut accepted = Vec::new();
        for image in &self.images {
            if image.file_name.is_empty() || image.data.is_empty() {
                continue;
            }
            let name = sanitize_filename(&image.file_name);
            if !has_allowed_extension(&name) {
                return Err(AppError::Validation("File type not allowed".to_string()));
            }
            accepted.push((name, image.data.clone()));
        }

        if accepted.is_empty() {
            return Err(AppError::Validation(
                "At least one valid image is required.".to_string(),
            ));
        }
        Ok(accepted)
    }
}

/// Files written so far, removed newest first if the request fails.
#[derive(Default)]
struct Compensations {
    written: Vec<PathBuf>,
}

impl Compensations {
    fn record(&mut self, path: PathBuf) {
        self.written.push(path);
    }

    async fn run(self) {
        for path in self.written.into_iter().rev() {
            if let Err(err) = tokio::fs::remove_file(&path).await {
                tracing::warn!("Failed to remove uploaded file {}: {}", path.display(), err);
            }
        }
    }
}

fn io_error(path: &Path, err: std::io::Error) -> AppError {
    AppError::InternalServerError(format!("Could not write {}: {}", path.display(), err))
}

pub struct UploadService;

impl UploadService {
    /// Validates the form, stores its images and inserts the product with one
    /// image row per file. Nothing is written to disk until every check passes.
    pub async fn create_product(state: &AppState, form: ProductForm) -> AppResult<product::Model> {
        let payload = form.product_request()?;
        let images = form.accepted_images()?;

        ProductService::ensure_references(&*state.db, Some(payload.category_id), payload.brand_id)
            .await?;

        let mut compensations = Compensations::default();
        let result = Self::persist(state, payload, images, &mut compensations).await;

        if let Err(err) = &result {
            tracing::warn!("Product upload failed, cleaning up files: {:?}", err);
            compensations.run().await;
        }
        result
    }

    async fn persist(
        state: &AppState,
        payload: CreateProductRequest,
        images: Vec<(String, Bytes)>,
        compensations: &mut Compensations,
    ) -> AppResult<product::Model> {
        let dir = PathBuf::from(&state.config.upload_dir);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| io_error(&dir, e))?;

        let mut urls = Vec::with_capacity(images.len());
        for (name, data) in images {
            let stored = stored_name(&name);
            let path = dir.join(&stored);
            // recorded first so a partial write is cleaned up too
            compensations.record(path.clone());
            tokio::fs::write(&path, &data)
                .await
                .map_err(|e| io_error(&path, e))?;
            urls.push(public_url(
                &state.config.public_base_url,
                &state.config.upload_dir,
                &stored,
            ));
        }

        let txn = state.db.begin().await?;
        let result = Self::insert_with_images(&txn, payload, urls).await;
        finish(txn, result).await
    }

    async fn insert_with_images<C>(
        db: &C,
        payload: CreateProductRequest,
        urls: Vec<String>,
    ) -> AppResult<product::Model>
    where
        C: ConnectionTrait,
    {
        let product = ProductService::insert(db, payload, urls.first().cloned()).await?;

        for (idx, url) in urls.into_iter().enumerate() {
            product_image::ActiveModel {
                product_id: Set(product.id),
                url: Set(url),
                is_primary: Set(idx == 0),
                alt_text: Set(Some(product.name.clone())),
                created_at: Set(chrono::Utc::now().naive_utc()),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        Ok(product)
    }
}
