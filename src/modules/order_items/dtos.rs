use sea_orm::Set;
use serde::Deserialize;

use crate::modules::orders::dtos::OrderItemInput;
use crate::modules::orders::entities::order_item;

#[derive(Debug, Deserialize)]
pub struct CreateOrderItemRequest {
    pub order_id: i32,
    #[serde(flatten)]
    pub item: OrderItemInput,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateOrderItemRequest {
    pub order_id: Option<i32>,
    pub product_id: Option<i32>,
    pub quantity: Option<i32>,
    pub unit_price: Option<f64>,
    pub total_price: Option<f64>,
}

impl UpdateOrderItemRequest {
    pub fn apply(self, item: &mut order_item::ActiveModel) {
        if let Some(v) = self.order_id {
            item.order_id = Set(v);
        }
        if let Some(v) = self.product_id {
            item.product_id = Set(v);
        }
        if let Some(v) = self.quantity {
            item.quantity = Set(v);
        }
        if let Some(v) = self.unit_price {
            item.unit_price = Set(v);
        }
        if let Some(v) = self.total_price {
            item.total_price = Set(v);
        }
    }
}
