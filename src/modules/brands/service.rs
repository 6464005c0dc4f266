use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait, Value,
};

use super::dtos::{CreateBrandRequest, UpdateBrandRequest};
use super::entities::brand;
use crate::modules::products::entities::product;
use crate::shared::error::{AppError, AppResult};
use crate::shared::transaction::finish;

pub struct BrandService;

impl BrandService {
    pub async fn find<C>(db: &C, id: i32) -> AppResult<brand::Model>
    where
        C: ConnectionTrait,
    {
        brand::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("Brand"))
    }

    pub async fn list<C>(db: &C) -> AppResult<Vec<brand::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(brand::Entity::find()
            .order_by_asc(brand::Column::Name)
            .all(db)
            .await?)
    }

    async fn name_taken<C>(db: &C, name: &str, except: Option<i32>) -> AppResult<bool>
    where
        C: ConnectionTrait,
    {
        let mut query = brand::Entity::find().filter(brand::Column::Name.eq(name));
        if let Some(id) = except {
            query = query.filter(brand::Column::Id.ne(id));
        }
        Ok(query.one(db).await?.is_some())
    }

    pub async fn create<C>(db: &C, payload: CreateBrandRequest) -> AppResult<brand::Model>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;

        if Self::name_taken(db, &payload.name, None).await? {
            return Err(AppError::Conflict(format!(
                "Brand '{}' already exists",
                payload.name
            )));
        }

        let brand = brand::ActiveModel {
            name: Set(payload.name),
            slug: Set(payload.slug),
            description: Set(payload.description),
            logo_url: Set(payload.logo_url),
            website: Set(payload.website),
            country_of_origin: Set(payload.country_of_origin),
            year_established: Set(payload.year_established),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::info!("Created brand {} ({})", brand.id, brand.name);
        Ok(brand)
    }

    pub async fn update<C>(db: &C, id: i32, payload: UpdateBrandRequest) -> AppResult<brand::Model>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;
        let existing = Self::find(db, id).await?;

        if let Some(name) = &payload.name {
            if Self::name_taken(db, name, Some(id)).await? {
                return Err(AppError::Conflict(format!("Brand '{}' already exists", name)));
            }
        }

        let mut active: brand::ActiveModel = existing.into();
        payload.apply(&mut active);
        Ok(active.update(db).await?)
    }

    /// Products keep existing without a brand.
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

        product::Entity::update_many()
            .col_expr(product::Column::BrandId, Expr::value(Value::Int(None)))
            .filter(product::Column::BrandId.eq(id))
            .exec(db)
            .await?;

        existing.delete(db).await?;
        Ok(())
    }
}
