use sea_orm::Set;
use serde::Deserialize;

use crate::modules::customers::entities::address;
use crate::shared::error::AppResult;
use crate::shared::validation::{non_empty, non_empty_opt};

/// The four fields that identify an address for a given customer.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressFields {
    pub specific_address: String,
    pub county: String,
    pub area_town: String,
    pub city_town: String,
}

impl AddressFields {
    pub fn validate(&self) -> AppResult<()> {
        non_empty("specific_address", &self.specific_address)?;
        non_empty("county", &self.county)?;
        non_empty("area_town", &self.area_town)?;
        non_empty("city_town", &self.city_town)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateAddressRequest {
    pub customer_id: i32,
    #[serde(flatten)]
    pub fields: AddressFields,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateAddressRequest {
    pub customer_id: Option<i32>,
    pub specific_address: Option<String>,
    pub county: Option<String>,
    pub area_town: Option<String>,
    pub city_town: Option<String>,
}

impl UpdateAddressRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_empty_opt("specific_address", self.specific_address.as_ref())?;
        non_empty_opt("county", self.county.as_ref())?;
        non_empty_opt("area_town", self.area_town.as_ref())?;
        non_empty_opt("city_town", self.city_town.as_ref())
    }

    pub fn apply(self, address: &mut address::ActiveModel) {
        if let Some(v) = self.customer_id {
            address.customer_id = Set(v);
        }
        if let Some(v) = self.specific_address {
            address.specific_address = Set(v);
        }
        if let Some(v) = self.county {
            address.county = Set(v);
        }
        if let Some(v) = self.area_town {
            address.area_town = Set(v);
        }
        if let Some(v) = self.city_town {
            address.city_town = Set(v);
        }
    }
}
