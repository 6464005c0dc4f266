use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::dtos::{
    parse_delivery_date, CreateOrderRequest, OrderDetail, OrderFields, OrderItemInput,
    PlaceOrderRequest, PlaceOrderResponse, UpdateOrderRequest,
};
use super::entities::{order, order_item};
use super::numbers::{generate_unique_order_number, generate_unique_tracking_number};
use crate::modules::addresses::service::AddressService;
use crate::modules::customers::service::CustomerService;
use crate::modules::products::entities::product;
use crate::shared::error::{AppError, AppResult};
use crate::shared::pagination::{paginate, Page, PageParams};
use crate::shared::transaction::finish;

pub struct OrderService;

impl OrderService {
    pub async fn find<C>(db: &C, id: i32) -> AppResult<order::Model>
    where
        C: ConnectionTrait,
    {
        order::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("Order"))
    }

    pub async fn list<C>(db: &C, params: &PageParams) -> AppResult<Page<order::Model>>
    where
        C: ConnectionTrait,
    {
        let select = order::Entity::find().order_by_desc(order::Column::Id);
        paginate(db, select, params).await
    }

    pub async fn get<C>(db: &C, id: i32) -> AppResult<OrderDetail>
    where
        C: ConnectionTrait,
    {
        let order = Self::find(db, id).await?;
        let items = order
            .find_related(order_item::Entity)
            .order_by_asc(order_item::Column::Id)
            .all(db)
            .await?;
        Ok(OrderDetail { order, items })
    }

    /// Checkout: customer, address, order and items are written in one
    /// transaction. Any failure leaves no rows behind.
    pub async fn place_order(
        db: &DatabaseConnection,
        payload: PlaceOrderRequest,
    ) -> AppResult<PlaceOrderResponse> {
        let txn = db.begin().await?;
        let result = Self::place_order_internal(&txn, payload).await;
        finish(txn, result).await
    }

    async fn place_order_internal<C>(db: &C, payload: PlaceOrderRequest) -> AppResult<PlaceOrderResponse>
    where
        C: ConnectionTrait,
    {
        let PlaceOrderRequest {
            customer,
            address,
            order,
            order_items,
        } = payload;

        order.validate()?;
        if order_items.is_empty() {
            return Err(AppError::Validation(
                "Order must contain at least one item.".to_string(),
            ));
        }

        let (customer, customer_created) = CustomerService::get_or_create(db, customer).await?;
        let (address, address_created) =
            AddressService::get_or_create(db, customer.id, address).await?;

        let order = Self::insert_order(db, customer.id, address.id, Some(address.id), order).await?;
        let items = Self::create_order_items(db, order.id, order_items).await?;

        tracing::info!(
            "Placed order {} for customer {} with {} item(s)",
            order.order_number,
            customer.id,
            items.len()
        );

        Ok(PlaceOrderResponse {
            msg: "Order placed successfully".to_string(),
            order,
            customer,
            address,
            items,
            customer_created,
            address_created,
        })
    }

    async fn insert_order<C>(
        db: &C,
        customer_id: i32,
        shipping_address_id: i32,
        billing_address_id: Option<i32>,
        fields: OrderFields,
    ) -> AppResult<order::Model>
    where
        C: ConnectionTrait,
    {
        let estimated_delivery_date = parse_delivery_date(fields.estimated_delivery_date.as_deref())?;
        let order_number = generate_unique_order_number(db).await?;
        let tracking_number = generate_unique_tracking_number(db).await?;
        let now = Utc::now().naive_utc();

        Ok(order::ActiveModel {
            customer_id: Set(customer_id),
            order_number: Set(order_number),
            status: Set(fields.status),
            total_amount: Set(fields.total_amount),
            shipping_address_id: Set(shipping_address_id),
            billing_address_id: Set(billing_address_id),
            payment_method: Set(fields.payment_method),
            payment_status: Set(fields.payment_status),
            shipping_method: Set(fields.shipping_method),
            shipping_cost: Set(fields.shipping_cost),
            tax_amount: Set(fields.tax_amount),
            discount_amount: Set(fields.discount_amount),
            notes: Set(fields.notes),
            delivery_company: Set(fields.delivery_company),
            tracking_number: Set(tracking_number),
            delivery_person: Set(fields.delivery_person),
            estimated_delivery_date: Set(estimated_delivery_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?)
    }

    /// Every product must exist and every quantity must be positive.
    pub async fn create_order_items<C>(
        db: &C,
        order_id: i32,
        items: Vec<OrderItemInput>,
    ) -> AppResult<Vec<order_item::Model>>
    where
        C: ConnectionTrait,
    {
        let mut created = Vec::with_capacity(items.len());
        for item in items {
            Self::check_item(db, item.product_id, item.quantity).await?;
            created.push(Self::insert_item(db, order_id, item).await?);
        }
        Ok(created)
    }

    pub async fn check_item<C>(db: &C, product_id: i32, quantity: i32) -> AppResult<()>
    where
        C: ConnectionTrait,
    {
        if product::Entity::find_by_id(product_id).one(db).await?.is_none() {
            return Err(AppError::Validation(format!(
                "Product ID {} not found.",
                product_id
            )));
        }
        if quantity <= 0 {
            return Err(AppError::Validation(format!(
                "Invalid quantity ({}) for Product ID {}.",
                quantity, product_id
            )));
        }
        Ok(())
    }

    pub async fn insert_item<C>(
        db: &C,
        order_id: i32,
        item: OrderItemInput,
    ) -> AppResult<order_item::Model>
    where
        C: ConnectionTrait,
    {
        Ok(order_item::ActiveModel {
            order_id: Set(order_id),
            product_id: Set(item.product_id),
            quantity: Set(item.quantity),
            unit_price: Set(item.unit_price),
            total_price: Set(item.total_price),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await?)
    }

    /// Direct creation against an existing customer and addresses.
    pub async fn create(db: &DatabaseConnection, payload: CreateOrderRequest) -> AppResult<order::Model> {
        payload.fields.validate()?;
        CustomerService::find(db, payload.customer_id).await?;
        AddressService::find(db, payload.shipping_address_id).await?;
        if let Some(id) = payload.billing_address_id {
            AddressService::find(db, id).await?;
        }

        let txn = db.begin().await?;
        let result = Self::insert_order(
            &txn,
            payload.customer_id,
            payload.shipping_address_id,
            payload.billing_address_id,
            payload.fields,
        )
        .await;
        finish(txn, result).await
    }

    pub async fn update<C>(db: &C, id: i32, payload: UpdateOrderRequest) -> AppResult<order::Model>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;
        let existing = Self::find(db, id).await?;

        if let Some(customer_id) = payload.customer_id {
            CustomerService::find(db, customer_id).await?;
        }
        for address_id in [payload.shipping_address_id, payload.billing_address_id]
            .into_iter()
            .flatten()
        {
            AddressService::find(db, address_id).await?;
        }

        let mut active: order::ActiveModel = existing.into();
        payload.apply(&mut active)?;
        active.updated_at = Set(Utc::now().naive_utc());
        Ok(active.update(db).await?)
    }

    /// Items go with the order.
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
        order_item::Entity::delete_many()
            .filter(order_item::Column::OrderId.eq(id))
            .exec(db)
            .await?;
        existing.delete(db).await?;
        tracing::info!("Deleted order {}", id);
        Ok(())
    }
}
