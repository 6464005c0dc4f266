use sea_orm::Set;
use serde::Deserialize;

use super::entities::role;
use crate::shared::error::AppResult;
use crate::shared::validation::{non_empty, non_empty_opt};

#[derive(Debug, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
    pub level: i32,
}

impl CreateRoleRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_empty("name", &self.name)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateRoleRequest {
    pub name: Option<String>,
    pub level: Option<i32>,
}

impl UpdateRoleRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_empty_opt("name", self.name.as_ref())
    }

    pub fn apply(self, role: &mut role::ActiveModel) {
        if let Some(v) = self.name {
            role.name = Set(v);
        }
        if let Some(v) = self.level {
            role.level = Set(v);
        }
    }
}
