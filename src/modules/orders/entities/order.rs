use crate::modules::customers::entities::{address, customer};
use crate::modules::orders::entities::order_item;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    #[sea_orm(unique)]
    pub order_number: String,
    pub status: String,
    pub total_amount: f64,
    pub shipping_address_id: i32,
    pub billing_address_id: Option<i32>,
    pub payment_method: String,
    pub payment_status: String,
    pub shipping_method: Option<String>,
    pub shipping_cost: Option<f64>,
    pub tax_amount: Option<f64>,
    pub discount_amount: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub delivery_company: Option<String>,
    #[sea_orm(unique)]
    pub tracking_number: String,
    pub delivery_person: Option<String>,
    pub estimated_delivery_date: Option<DateTime>,
    #[serde(skip_deserializing)]
    pub created_at: DateTime,
    #[serde(skip_deserializing)]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "customer::Entity",
        from = "Column::CustomerId",
        to = "customer::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "address::Entity",
        from = "Column::ShippingAddressId",
        to = "address::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    ShippingAddress,
    #[sea_orm(
        belongs_to = "address::Entity",
        from = "Column::BillingAddressId",
        to = "address::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    BillingAddress,
    #[sea_orm(has_many = "order_item::Entity")]
    Items,
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
