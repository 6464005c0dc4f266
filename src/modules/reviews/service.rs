use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder, Set};

use super::dtos::{CreateReviewRequest, UpdateReviewRequest};
use super::entities::review;
use crate::modules::customers::service::CustomerService;
use crate::modules::products::service::ProductService;
use crate::shared::error::{AppError, AppResult};

pub struct ReviewService;

impl ReviewService {
    pub async fn find<C>(db: &C, id: i32) -> AppResult<review::Model>
    where
        C: ConnectionTrait,
    {
        review::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("Review"))
    }

    pub async fn list<C>(db: &C) -> AppResult<Vec<review::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(review::Entity::find()
            .order_by_desc(review::Column::CreatedAt)
            .order_by_desc(review::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn create<C>(db: &C, payload: CreateReviewRequest) -> AppResult<review::Model>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;
        ProductService::find(db, payload.product_id).await?;
        if let Some(customer_id) = payload.customer_id {
            CustomerService::find(db, customer_id).await?;
        }

        Ok(review::ActiveModel {
            product_id: Set(payload.product_id),
            customer_id: Set(payload.customer_id),
            rating: Set(payload.rating),
            comment: Set(payload.comment),
            is_approved: Set(payload.is_approved),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await?)
    }

    pub async fn update<C>(db: &C, id: i32, payload: UpdateReviewRequest) -> AppResult<review::Model>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;
        let existing = Self::find(db, id).await?;
        let mut active: review::ActiveModel = existing.into();
        payload.apply(&mut active);
        Ok(active.update(db).await?)
    }

    pub async fn delete<C>(db: &C, id: i32) -> AppResult<()>
    where
        C: ConnectionTrait,
    {
        let existing = Self::find(db, id).await?;
        existing.delete(db).await?;
        Ok(())
    }
}
