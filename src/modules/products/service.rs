use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::dtos::{CreateProductRequest, ProductDetail, UpdateProductRequest, DEFAULT_STATUS};
use super::entities::{product, product_image};
use crate::modules::brands::service::BrandService;
use crate::modules::categories::service::CategoryService;
use crate::modules::inventory::entities::inventory_log;
use crate::modules::orders::entities::order_item;
use crate::modules::reviews::entities::review;
use crate::shared::error::{AppError, AppResult};
use crate::shared::pagination::{paginate, Page, PageParams};
use crate::shared::transaction::finish;

pub struct ProductService;

impl ProductService {
    pub async fn find<C>(db: &C, id: i32) -> AppResult<product::Model>
    where
        C: ConnectionTrait,
    {
        product::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("Product"))
    }

    pub async fn list<C>(db: &C, params: &PageParams) -> AppResult<Page<product::Model>>
    where
        C: ConnectionTrait,
    {
        let select = product::Entity::find().order_by_asc(product::Column::Id);
        paginate(db, select, params).await
    }

    pub async fn image_urls<C>(db: &C, product_id: i32) -> AppResult<Vec<String>>
    where
        C: ConnectionTrait,
    {
        let images = product_image::Entity::find()
            .filter(product_image::Column::ProductId.eq(product_id))
            .order_by_desc(product_image::Column::IsPrimary)
            .order_by_asc(product_image::Column::Id)
            .all(db)
            .await?;
        Ok(images.into_iter().map(|image| image.url).collect())
    }

    pub async fn get<C>(db: &C, id: i32) -> AppResult<ProductDetail>
    where
        C: ConnectionTrait,
    {
        let product = Self::find(db, id).await?;
        let images = Self::image_urls(db, id).await?;
        Ok(ProductDetail { product, images })
    }

    /// Category is mandatory, brand is optional; both must exist when named.
    pub async fn ensure_references<C>(
        db: &C,
        category_id: Option<i32>,
        brand_id: Option<i32>,
    ) -> AppResult<()>
    where
        C: ConnectionTrait,
    {
        if let Some(id) = category_id {
            CategoryService::find(db, id).await?;
        }
        if let Some(id) = brand_id {
            BrandService::find(db, id).await?;
        }
        Ok(())
    }

    pub async fn create<C>(db: &C, payload: CreateProductRequest) -> AppResult<product::Model>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;
        Self::ensure_references(db, Some(payload.category_id), payload.brand_id).await?;
        Self::insert(db, payload, None).await
    }

    /// Inserts without reference checks; callers validate first.
    pub(crate) async fn insert<C>(
        db: &C,
        payload: CreateProductRequest,
        img_url: Option<String>,
    ) -> AppResult<product::Model>
    where
        C: ConnectionTrait,
    {
        let product = product::ActiveModel {
            name: Set(payload.name),
            sku: Set(payload.sku),
            description: Set(payload.description),
            img_url: Set(img_url),
            price: Set(payload.price),
            cost: Set(payload.cost),
            discount: Set(payload.discount),
            category_id: Set(payload.category_id),
            brand_id: Set(payload.brand_id),
            stock: Set(payload.stock),
            weight: Set(payload.weight),
            dimensions: Set(payload.dimensions),
            features: Set(payload.features),
            specifications: Set(payload.specifications),
            status: Set(payload
                .status
                .unwrap_or_else(|| DEFAULT_STATUS.to_string())),
            meta_title: Set(payload.meta_title),
            meta_description: Set(payload.meta_description),
            is_featured: Set(payload.is_featured),
            compatible_makes: Set(payload.compatible_makes),
            compatible_models: Set(payload.compatible_models),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::info!("Created product {} (sku {})", product.id, product.sku);
        Ok(product)
    }

    pub async fn update<C>(
        db: &C,
        id: i32,
        payload: UpdateProductRequest,
    ) -> AppResult<product::Model>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;
        let existing = Self::find(db, id).await?;
        Self::ensure_references(db, payload.category_id, payload.brand_id).await?;

        let mut active: product::ActiveModel = existing.into();
        payload.apply(&mut active);
        Ok(active.update(db).await?)
    }

    /// Refuses while order items reference the product. Images, reviews and
    /// inventory history go with it.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let txn = db.begin().await?;
        let result = Self::delete_internal(&txn, id).await;
        finish(txn, result).await
    }

    async fn delete_internal<C>(db: &C, id: i32) -> AppResult<()>
    where
        C: ConnectionTrait,
    {
        let existing = Self::find(db, id).await?;

        let ordered = order_item::Entity::find()
            .filter(order_item::Column::ProductId.eq(id))
            .count(db)
            .await?;
        if ordered > 0 {
            return Err(AppError::Validation(format!(
                "Cannot delete product: {} order item(s) still reference it",
                ordered
            )));
        }

        product_image::Entity::delete_many()
            .filter(product_image::Column::ProductId.eq(id))
            .exec(db)
            .await?;
        review::Entity::delete_many()
            .filter(review::Column::ProductId.eq(id))
            .exec(db)
            .await?;
        inventory_log::Entity::delete_many()
            .filter(inventory_log::Column::ProductId.eq(id))
            .exec(db)
            .await?;

        existing.delete(db).await?;
        tracing::info!("Deleted product {}", id);
        Ok(())
    }
}
