use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::dtos::{CreateRoleRequest, UpdateRoleRequest};
use super::entities::role;
use super::DEFAULT_ROLES;
use crate::modules::users::entities::user;
use crate::shared::error::{AppError, AppResult};

pub struct RoleService;

impl RoleService {
    /// Higher level means more privilege; equal level is enough.
    pub fn has_clearance(caller_level: i32, required_level: i32) -> bool {
        caller_level >= required_level
    }

    /// Fails closed: an unknown caller or required role is a not-found, never a pass.
    pub async fn authorize<C>(db: &C, caller_role: &str, required_role: &str) -> AppResult<()>
    where
        C: ConnectionTrait,
    {
        let caller = Self::find_by_name(db, caller_role).await?;
        let required = Self::find_by_name(db, required_role).await?;

        let (caller, required) = match (caller, required) {
            (Some(c), Some(r)) => (c, r),
            _ => return Err(AppError::not_found("Role")),
        };

        if !Self::has_clearance(caller.level, required.level) {
            tracing::info!(
                "Denied role {} (level {}) for route requiring {} (level {})",
                caller.name,
                caller.level,
                required.name,
                required.level
            );
            return Err(AppError::Forbidden(
                "Access denied insufficient permissions".to_string(),
            ));
        }

        Ok(())
    }

    pub async fn find_by_name<C>(db: &C, name: &str) -> AppResult<Option<role::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(role::Entity::find()
            .filter(role::Column::Name.eq(name))
            .one(db)
            .await?)
    }

    /// Inserts any of the default roles that are missing; existing rows are left alone.
    pub async fn seed_defaults<C>(db: &C) -> AppResult<usize>
    where
        C: ConnectionTrait,
    {
        let mut created = 0;
        for (name, level) in DEFAULT_ROLES {
            if Self::find_by_name(db, name).await?.is_none() {
                role::ActiveModel {
                    name: Set(name.to_string()),
                    level: Set(level),
                    ..Default::default()
                }
                .insert(db)
                .await?;
                created += 1;
            }
        }
        Ok(created)
    }

    pub async fn list<C>(db: &C) -> AppResult<Vec<role::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(role::Entity::find()
            .order_by_asc(role::Column::Level)
            .all(db)
            .await?)
    }

    pub async fn get<C>(db: &C, id: i32) -> AppResult<role::Model>
    where
        C: ConnectionTrait,
    {
        role::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("Role"))
    }

    pub async fn create<C>(db: &C, payload: CreateRoleRequest) -> AppResult<role::Model>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;
        if Self::find_by_name(db, &payload.name).await?.is_some() {
            return Err(AppError::Validation("Role already exists".to_string()));
        }

        Ok(role::ActiveModel {
            name: Set(payload.name),
            level: Set(payload.level),
            ..Default::default()
        }
        .insert(db)
        .await?)
    }

    pub async fn update<C>(db: &C, id: i32, payload: UpdateRoleRequest) -> AppResult<role::Model>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;
        let existing = Self::get(db, id).await?;

        let mut active: role::ActiveModel = existing.into();
        payload.apply(&mut active);
        Ok(active.update(db).await?)
    }

    /// Restricted while any user still holds the role.
    pub async fn delete<C>(db: &C, id: i32) -> AppResult<()>
    where
        C: ConnectionTrait,
    {
        let existing = Self::get(db, id).await?;

        let holders = user::Entity::find()
            .filter(user::Column::RoleId.eq(id))
            .count(db)
            .await?;
        if holders > 0 {
            return Err(AppError::Validation(format!(
                "Role {} is still assigned to {} user(s)",
                existing.name, holders
            )));
        }

        existing.delete(db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn role(id: i32, name: &str, level: i32) -> role::Model {
        role::Model {
            id,
            name: name.to_string(),
            level,
        }
    }

    #[test]
    fn test_has_clearance() {
        assert!(RoleService::has_clearance(3, 2));
        assert!(RoleService::has_clearance(2, 2));
        assert!(!RoleService::has_clearance(1, 2));
    }

    #[tokio::test]
    async fn test_authorize_forbids_lower_level() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![role(1, "user", 1)], vec![role(3, "admin", 3)]])
            .into_connection();

        let result = RoleService::authorize(&db, "user", "admin").await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_authorize_allows_equal_level() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![role(2, "manager", 2)], vec![role(2, "manager", 2)]])
            .into_connection();

        assert!(RoleService::authorize(&db, "manager", "manager").await.is_ok());
    }

    #[tokio::test]
    async fn test_authorize_fails_closed_on_unknown_role() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<role::Model>::new(), vec![role(3, "admin", 3)]])
            .into_connection();

        let result = RoleService::authorize(&db, "ghost", "admin").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
