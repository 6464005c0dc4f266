use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait, Value,
};

use super::dtos::{CreateUserRequest, UpdateUserRequest, UserResponse};
use super::entities::user;
use crate::modules::auth::password;
use crate::modules::customers::entities::customer;
use crate::modules::inventory::entities::inventory_log;
use crate::modules::roles::entities::role;
use crate::modules::roles::service::RoleService;
use crate::shared::error::{AppError, AppResult};
use crate::shared::transaction::finish;

pub struct UserService;

impl UserService {
    pub async fn find_by_email<C>(db: &C, email: &str) -> AppResult<Option<user::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await?)
    }

    pub async fn find_with_role<C>(
        db: &C,
        id: i32,
    ) -> AppResult<Option<(user::Model, Option<role::Model>)>>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find_by_id(id)
            .find_also_related(role::Entity)
            .one(db)
            .await?)
    }

    pub async fn list<C>(db: &C) -> AppResult<Vec<UserResponse>>
    where
        C: ConnectionTrait,
    {
        let rows = user::Entity::find()
            .find_also_related(role::Entity)
            .order_by_asc(user::Column::Id)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(u, r)| UserResponse::new(u, r))
            .collect())
    }

    pub async fn get<C>(db: &C, id: i32) -> AppResult<UserResponse>
    where
        C: ConnectionTrait,
    {
        let (user, role) = Self::find_with_role(db, id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;
        Ok(UserResponse::new(user, role))
    }

    /// Shared by `/register` and the admin `/users` endpoint.
    pub async fn create<C>(db: &C, payload: CreateUserRequest) -> AppResult<UserResponse>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;

        if Self::find_by_email(db, &payload.email).await?.is_some() {
            return Err(AppError::Validation("Email already exists".to_string()));
        }

        let role = RoleService::find_by_name(db, &payload.role)
            .await?
            .ok_or_else(|| AppError::not_found("Role"))?;

        let password_hash = password::hash_password(&payload.password)?;

        let user = user::ActiveModel {
            email: Set(payload.email),
            password_hash: Set(password_hash),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            role_id: Set(Some(role.id)),
            is_active: Set(payload.is_active),
            created_at: Set(Utc::now().naive_utc()),
            last_login: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::info!("Created user {} with role {}", user.id, role.name);
        Ok(UserResponse::new(user, Some(role)))
    }

    pub async fn update<C>(db: &C, id: i32, payload: UpdateUserRequest) -> AppResult<UserResponse>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;

        let (existing, current_role) = Self::find_with_role(db, id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        if let Some(email) = &payload.email {
            if email != &existing.email && Self::find_by_email(db, email).await?.is_some() {
                return Err(AppError::Validation("Email already exists".to_string()));
            }
        }

        let role = match &payload.role {
            Some(name) => Some(
                RoleService::find_by_name(db, name)
                    .await?
                    .ok_or_else(|| AppError::not_found("Role"))?,
            ),
            None => current_role,
        };

        let mut active: user::ActiveModel = existing.into();
        if let Some(v) = payload.email {
            active.email = Set(v);
        }
        if let Some(v) = payload.password {
            active.password_hash = Set(password::hash_password(&v)?);
        }
        if let Some(v) = payload.first_name {
            active.first_name = Set(Some(v));
        }
        if let Some(v) = payload.last_name {
            active.last_name = Set(Some(v));
        }
        if let Some(v) = payload.is_active {
            active.is_active = Set(v);
        }
        if payload.role.is_some() {
            active.role_id = Set(role.as_ref().map(|r| r.id));
        }

        let user = active.update(db).await?;
        Ok(UserResponse::new(user, role))
    }

    pub async fn touch_last_login<C>(db: &C, user: user::Model) -> AppResult<user::Model>
    where
        C: ConnectionTrait,
    {
        let mut active: user::ActiveModel = user.into();
        active.last_login = Set(Some(Utc::now().naive_utc()));
        Ok(active.update(db).await?)
    }

    /// Customers and inventory logs that point at the user keep their rows;
    /// the reference is nulled.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let txn = db.begin().await?;
        let result = Self::delete_internal(&txn, id).await;
        finish(txn, result).await
    }

    async fn delete_internal<C>(db: &C, id: i32) -> AppResult<()>
    where
        C: ConnectionTrait,
    {
        let existing = user::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        customer::Entity::update_many()
            .col_expr(customer::Column::UserId, Expr::value(Value::Int(None)))
            .filter(customer::Column::UserId.eq(id))
            .exec(db)
            .await?;

        inventory_log::Entity::update_many()
            .col_expr(inventory_log::Column::CreatedBy, Expr::value(Value::Int(None)))
            .filter(inventory_log::Column::CreatedBy.eq(id))
            .exec(db)
            .await?;

        existing.delete(db).await?;
        Ok(())
    }
}
