use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder};

use super::dtos::{CreateOrderItemRequest, UpdateOrderItemRequest};
use crate::modules::orders::entities::order_item;
use crate::modules::orders::service::OrderService;
use crate::shared::error::{AppError, AppResult};

pub struct OrderItemService;

impl OrderItemService {
    pub async fn find<C>(db: &C, id: i32) -> AppResult<order_item::Model>
    where
        C: ConnectionTrait,
    {
        order_item::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("Order item"))
    }

    pub async fn list<C>(db: &C) -> AppResult<Vec<order_item::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(order_item::Entity::find()
            .order_by_asc(order_item::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn create<C>(db: &C, payload: CreateOrderItemRequest) -> AppResult<order_item::Model>
    where
        C: ConnectionTrait,
    {
        OrderService::find(db, payload.order_id).await?;
        OrderService::check_item(db, payload.item.product_id, payload.item.quantity).await?;
        OrderService::insert_item(db, payload.order_id, payload.item).await
    }

    pub async fn update<C>(
        db: &C,
        id: i32,
        payload: UpdateOrderItemRequest,
    ) -> AppResult<order_item::Model>
    where
        C: ConnectionTrait,
    {
        let existing = Self::find(db, id).await?;

        if let Some(order_id) = payload.order_id {
            OrderService::find(db, order_id).await?;
        }
        if payload.product_id.is_some() || payload.quantity.is_some() {
            OrderService::check_item(
                db,
                payload.product_id.unwrap_or(existing.product_id),
                payload.quantity.unwrap_or(existing.quantity),
            )
            .await?;
        }

        let mut active: order_item::ActiveModel = existing.into();
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
