use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use super::dtos::{AddressFields, CreateAddressRequest, UpdateAddressRequest};
use crate::modules::customers::entities::address;
use crate::modules::customers::service::CustomerService;
use crate::modules::orders::entities::order;
use crate::shared::error::{AppError, AppResult};

pub struct AddressService;

impl AddressService {
    pub async fn find<C>(db: &C, id: i32) -> AppResult<address::Model>
    where
        C: ConnectionTrait,
    {
        address::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("Address"))
    }

    pub async fn list<C>(db: &C) -> AppResult<Vec<address::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(address::Entity::find()
            .order_by_asc(address::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn create<C>(db: &C, payload: CreateAddressRequest) -> AppResult<address::Model>
    where
        C: ConnectionTrait,
    {
        payload.fields.validate()?;
        CustomerService::find(db, payload.customer_id).await?;
        Self::insert(db, payload.customer_id, payload.fields).await
    }

    async fn insert<C>(db: &C, customer_id: i32, fields: AddressFields) -> AppResult<address::Model>
    where
        C: ConnectionTrait,
    {
        Ok(address::ActiveModel {
            customer_id: Set(customer_id),
            specific_address: Set(fields.specific_address),
            county: Set(fields.county),
            area_town: Set(fields.area_town),
            city_town: Set(fields.city_town),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await?)
    }

    /// Matches on all four identity fields within the customer's addresses.
    pub async fn get_or_create<C>(
        db: &C,
        customer_id: i32,
        fields: AddressFields,
    ) -> AppResult<(address::Model, bool)>
    where
        C: ConnectionTrait,
    {
        fields.validate()?;

        let existing = address::Entity::find()
            .filter(address::Column::CustomerId.eq(customer_id))
            .filter(address::Column::SpecificAddress.eq(fields.specific_address.as_str()))
            .filter(address::Column::County.eq(fields.county.as_str()))
            .filter(address::Column::AreaTown.eq(fields.area_town.as_str()))
            .filter(address::Column::CityTown.eq(fields.city_town.as_str()))
            .one(db)
            .await?;

        match existing {
            Some(address) => Ok((address, false)),
            None => Ok((Self::insert(db, customer_id, fields).await?, true)),
        }
    }

    pub async fn update<C>(
        db: &C,
        id: i32,
        payload: UpdateAddressRequest,
    ) -> AppResult<address::Model>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;
        let existing = Self::find(db, id).await?;
        if let Some(customer_id) = payload.customer_id {
            CustomerService::find(db, customer_id).await?;
        }

        let mut active: address::ActiveModel = existing.into();
        payload.apply(&mut active);
        Ok(active.update(db).await?)
    }

    /// Refuses while any order ships or bills to the address.
    pub async fn delete<C>(db: &C, id: i32) -> AppResult<()>
    where
        C: ConnectionTrait,
    {
        let existing = Self::find(db, id).await?;

        let orders = order::Entity::find()
            .filter(
                Condition::any()
                    .add(order::Column::ShippingAddressId.eq(id))
                    .add(order::Column::BillingAddressId.eq(id)),
            )
            .count(db)
            .await?;
        if orders > 0 {
            return Err(AppError::Validation(format!(
                "Cannot delete address: {} order(s) still reference it",
                orders
            )));
        }

        existing.delete(db).await?;
        Ok(())
    }
}
