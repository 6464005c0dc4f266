use chrono::NaiveDateTime;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use super::entities::{order, order_item};
use crate::modules::addresses::dtos::AddressFields;
use crate::modules::customers::dtos::CreateCustomerRequest;
use crate::modules::customers::entities::{address, customer};
use crate::shared::error::{AppError, AppResult};
use crate::shared::validation::{non_empty, non_empty_opt};

pub const DEFAULT_PAYMENT_METHOD: &str = "mpesa";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepts `YYYY-MM-DD HH:MM:SS` or a bare `YYYY-MM-DD` (midnight). Blank is no date.
pub fn parse_delivery_date(raw: Option<&str>) -> AppResult<Option<NaiveDateTime>> {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return Ok(None),
    };

    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT) {
        return Ok(Some(parsed));
    }
    chrono::NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(Some)
        .ok_or_else(|| {
            AppError::Validation(format!("Invalid estimated_delivery_date: {}", raw))
        })
}

/// Order attributes supplied by the caller. Numbers, parties and
/// addresses are filled in server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderFields {
    pub status: String,
    pub total_amount: f64,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
    pub payment_status: String,
    pub shipping_method: Option<String>,
    pub shipping_cost: Option<f64>,
    pub tax_amount: Option<f64>,
    pub discount_amount: Option<f64>,
    pub notes: Option<String>,
    pub delivery_company: Option<String>,
    pub delivery_person: Option<String>,
    pub estimated_delivery_date: Option<String>,
}

fn default_payment_method() -> String {
    DEFAULT_PAYMENT_METHOD.to_string()
}

impl OrderFields {
    pub fn validate(&self) -> AppResult<()> {
        non_empty("status", &self.status)?;
        non_empty("payment_method", &self.payment_method)?;
        non_empty("payment_status", &self.payment_status)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemInput {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Checkout submission for `/create-order/process`.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub customer: CreateCustomerRequest,
    pub address: AddressFields,
    pub order: OrderFields,
    pub order_items: Vec<OrderItemInput>,
}

#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
    pub msg: String,
    pub order: order::Model,
    pub customer: customer::Model,
    pub address: address::Model,
    pub items: Vec<order_item::Model>,
    pub customer_created: bool,
    pub address_created: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: i32,
    pub shipping_address_id: i32,
    pub billing_address_id: Option<i32>,
    #[serde(flatten)]
    pub fields: OrderFields,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateOrderRequest {
    pub customer_id: Option<i32>,
    pub shipping_address_id: Option<i32>,
    pub billing_address_id: Option<i32>,
    pub status: Option<String>,
    pub total_amount: Option<f64>,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    pub shipping_method: Option<String>,
    pub shipping_cost: Option<f64>,
    pub tax_amount: Option<f64>,
    pub discount_amount: Option<f64>,
    pub notes: Option<String>,
    pub delivery_company: Option<String>,
    pub delivery_person: Option<String>,
    pub estimated_delivery_date: Option<String>,
}

impl UpdateOrderRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_empty_opt("status", self.status.as_ref())?;
        non_empty_opt("payment_method", self.payment_method.as_ref())?;
        non_empty_opt("payment_status", self.payment_status.as_ref())
    }

    pub fn apply(self, order: &mut order::ActiveModel) -> AppResult<()> {
        if let Some(raw) = self.estimated_delivery_date.as_deref() {
            order.estimated_delivery_date = Set(parse_delivery_date(Some(raw))?);
        }
        if let Some(v) = self.customer_id {
            order.customer_id = Set(v);
        }
        if let Some(v) = self.shipping_address_id {
            order.shipping_address_id = Set(v);
        }
        if let Some(v) = self.billing_address_id {
            order.billing_address_id = Set(Some(v));
        }
        if let Some(v) = self.status {
            order.status = Set(v);
        }
        if let Some(v) = self.total_amount {
            order.total_amount = Set(v);
        }
        if let Some(v) = self.payment_method {
            order.payment_method = Set(v);
        }
        if let Some(v) = self.payment_status {
            order.payment_status = Set(v);
        }
        if let Some(v) = self.shipping_method {
            order.shipping_method = Set(Some(v));
        }
        if let Some(v) = self.shipping_cost {
            order.shipping_cost = Set(Some(v));
        }
        if let Some(v) = self.tax_amount {
            order.tax_amount = Set(Some(v));
        }
        if let Some(v) = self.discount_amount {
            order.discount_amount = Set(Some(v));
        }
        if let Some(v) = self.notes {
            order.notes = Set(Some(v));
        }
        if let Some(v) = self.delivery_company {
            order.delivery_company = Set(Some(v));
        }
        if let Some(v) = self.delivery_person {
            order.delivery_person = Set(Some(v));
        }
        Ok(())
    }
}

/// An order with its line items.
#[derive(Debug, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: order::Model,
    pub items: Vec<order_item::Model>,
}
