use serde::{Deserialize, Serialize};

use super::entities::user;
use crate::modules::roles::entities::role;
use crate::modules::roles::USER;
use crate::shared::error::{AppError, AppResult};
use crate::shared::validation::{non_empty, non_empty_opt};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CreateUserRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_empty("email", &self.email)?;
        non_empty("password", &self.password)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    /// Plain text; re-hashed before storage.
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_empty_opt("email", self.email.as_ref())?;
        non_empty_opt("password", self.password.as_ref())
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
}

impl RegisterRequest {
    /// Turns the loosely-typed form into a user creation request.
    pub fn into_create(self) -> AppResult<CreateUserRequest> {
        let (email, password, confirm) = match (self.email, self.password, self.confirm_password) {
            (Some(e), Some(p), Some(c)) if !e.is_empty() && !p.is_empty() && !c.is_empty() => {
                (e, p, c)
            }
            _ => return Err(AppError::Validation("Missing required fields".to_string())),
        };

        if password != confirm {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        Ok(CreateUserRequest {
            email,
            password,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            is_active: true,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub last_login: Option<chrono::NaiveDateTime>,
    pub is_active: bool,
    pub role: Option<String>,
}

impl UserResponse {
    pub fn new(user: user::Model, role: Option<role::Model>) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            last_login: user.last_login,
            is_active: user.is_active,
            role: role.map(|r| r.name),
        }
    }
}

fn default_role() -> String {
    USER.to_string()
}

fn default_active() -> bool {
    true
}
