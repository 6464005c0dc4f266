use sea_orm::Set;
use serde::Deserialize;

use super::entities::customer;
use crate::shared::error::AppResult;
use crate::shared::validation::{non_empty, non_empty_opt};

/// Also the `customer` block of a checkout submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub user_id: Option<i32>,
}

impl CreateCustomerRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_empty("first_name", &self.first_name)?;
        non_empty("last_name", &self.last_name)?;
        non_empty("email", &self.email)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCustomerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub user_id: Option<i32>,
}

impl UpdateCustomerRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_empty_opt("first_name", self.first_name.as_ref())?;
        non_empty_opt("last_name", self.last_name.as_ref())?;
        non_empty_opt("email", self.email.as_ref())
    }

    pub fn apply(self, customer: &mut customer::ActiveModel) {
        if let Some(v) = self.first_name {
            customer.first_name = Set(v);
        }
        if let Some(v) = self.last_name {
            customer.last_name = Set(v);
        }
        if let Some(v) = self.email {
            customer.email = Set(v);
        }
        if let Some(v) = self.phone {
            customer.phone = Set(Some(v));
        }
        if let Some(v) = self.user_id {
            customer.user_id = Set(Some(v));
        }
    }
}
