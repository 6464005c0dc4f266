use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::dtos::{next_stock, CreateInventoryLogRequest, InventoryLogFilter};
use super::entities::inventory_log;
use crate::modules::products::entities::product;
use crate::modules::products::service::ProductService;
use crate::modules::users::entities::user;
use crate::shared::error::{AppError, AppResult};
use crate::shared::transaction::finish;

pub struct InventoryService;

impl InventoryService {
    pub async fn find<C>(db: &C, id: i32) -> AppResult<inventory_log::Model>
    where
        C: ConnectionTrait,
    {
        inventory_log::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("Inventory log"))
    }

    pub async fn list<C>(db: &C, filter: &InventoryLogFilter) -> AppResult<Vec<inventory_log::Model>>
    where
        C: ConnectionTrait,
    {
        let mut query = inventory_log::Entity::find().order_by_asc(inventory_log::Column::Id);
        if let Some(product_id) = filter.product_id {
            query = query.filter(inventory_log::Column::ProductId.eq(product_id));
        }
        Ok(query.all(db).await?)
    }

    /// Records a stock movement and applies it to the product in one transaction.
    pub async fn record(
        db: &DatabaseConnection,
        payload: CreateInventoryLogRequest,
        caller_id: Option<i32>,
    ) -> AppResult<inventory_log::Model> {
        payload.validate()?;
        let txn = db.begin().await?;
        let result = Self::record_internal(&txn, payload, caller_id).await;
        finish(txn, result).await
    }

    async fn record_internal<C>(
        db: &C,
        payload: CreateInventoryLogRequest,
        caller_id: Option<i32>,
    ) -> AppResult<inventory_log::Model>
    where
        C: ConnectionTrait,
    {
        let product = ProductService::find(db, payload.product_id).await?;

        let created_by = payload.created_by.or(caller_id);
        if let Some(user_id) = created_by {
            user::Entity::find_by_id(user_id)
                .one(db)
                .await?
                .ok_or_else(|| AppError::not_found("User"))?;
        }

        let previous_stock = product.stock;
        let new_stock = next_stock(previous_stock, payload.quantity_change).ok_or_else(|| {
            AppError::Validation(format!(
                "Insufficient stock for Product ID {}: have {}, change {}",
                product.id, previous_stock, payload.quantity_change
            ))
        })?;

        let mut active: product::ActiveModel = product.into();
        active.stock = Set(new_stock);
        active.update(db).await?;

        let log = inventory_log::ActiveModel {
            product_id: Set(payload.product_id),
            quantity_change: Set(payload.quantity_change),
            previous_stock: Set(previous_stock),
            new_stock: Set(new_stock),
            change_type: Set(payload.change_type),
            reference_id: Set(payload.reference_id),
            notes: Set(payload.notes),
            created_by: Set(created_by),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::info!(
            "Stock for product {} moved {} -> {} ({:?})",
            log.product_id,
            previous_stock,
            new_stock,
            log.change_type
        );
        Ok(log)
    }
}
