use chrono::Utc;
use sea_orm::{
    sea_query::Expr,
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait, Value,
};

use super::dtos::{CreateCustomerRequest, UpdateCustomerRequest};
use super::entities::{address, customer};
use crate::modules::orders::entities::order;
use crate::modules::reviews::entities::review;
use crate::modules::users::entities::user;
use crate::shared::error::{AppError, AppResult};
use crate::shared::pagination::{paginate, Page, PageParams};
use crate::shared::transaction::finish;

pub struct CustomerService;

impl CustomerService {
    pub async fn find<C>(db: &C, id: i32) -> AppResult<customer::Model>
    where
        C: ConnectionTrait,
    {
        customer::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("Customer"))
    }

    pub async fn find_by_email<C>(db: &C, email: &str) -> AppResult<Option<customer::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(customer::Entity::find()
            .filter(customer::Column::Email.eq(email))
            .one(db)
            .await?)
    }

    pub async fn list<C>(db: &C, params: &PageParams) -> AppResult<Page<customer::Model>>
    where
        C: ConnectionTrait,
    {
        let select = customer::Entity::find().order_by_asc(customer::Column::Id);
        paginate(db, select, params).await
    }

    async fn ensure_user<C>(db: &C, user_id: Option<i32>) -> AppResult<()>
    where
        C: ConnectionTrait,
    {
        if let Some(id) = user_id {
            user::Entity::find_by_id(id)
                .one(db)
                .await?
                .ok_or_else(|| AppError::not_found("User"))?;
        }
        Ok(())
    }

    pub async fn create<C>(db: &C, payload: CreateCustomerRequest) -> AppResult<customer::Model>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;
        if Self::find_by_email(db, &payload.email).await?.is_some() {
            return Err(AppError::Validation(
                "Customer email already exists".to_string(),
            ));
        }
        Self::ensure_user(db, payload.user_id).await?;
        Self::insert(db, payload).await
    }

    /// Inserts without pre-checks; the unique email constraint still applies.
    pub(crate) async fn insert<C>(
        db: &C,
        payload: CreateCustomerRequest,
    ) -> AppResult<customer::Model>
    where
        C: ConnectionTrait,
    {
        let customer = customer::ActiveModel {
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            email: Set(payload.email),
            phone: Set(payload.phone),
            user_id: Set(payload.user_id),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::info!("Created customer {}", customer.id);
        Ok(customer)
    }

    /// Existing customers are returned untouched, whatever else the payload says.
    pub async fn get_or_create<C>(
        db: &C,
        payload: CreateCustomerRequest,
    ) -> AppResult<(customer::Model, bool)>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;
        if let Some(existing) = Self::find_by_email(db, &payload.email).await? {
            return Ok((existing, false));
        }
        if let Some(id) = payload.user_id {
            user::Entity::find_by_id(id)
                .one(db)
                .await?
                .ok_or_else(|| AppError::Validation(format!("User ID {} not found.", id)))?;
        }
        Ok((Self::insert(db, payload).await?, true))
    }

    pub async fn update<C>(
        db: &C,
        id: i32,
        payload: UpdateCustomerRequest,
    ) -> AppResult<customer::Model>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;
        let existing = Self::find(db, id).await?;

        if let Some(email) = &payload.email {
            if email != &existing.email && Self::find_by_email(db, email).await?.is_some() {
                return Err(AppError::Validation(
                    "Customer email already exists".to_string(),
                ));
            }
        }
        Self::ensure_user(db, payload.user_id).await?;

        let mut active: customer::ActiveModel = existing.into();
        payload.apply(&mut active);
        Ok(active.update(db).await?)
    }

    /// Refuses while orders exist. Addresses go with the customer; reviews
    /// stay, detached.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let txn = db.begin().await?;
        let result = Self::delete_internal(&txn, id).await;
        finish(txn, result).await
    }

    async fn delete_internal<C>(db: &C, id: i32) -> AppResult<()>
    where
        C: ConnectionTrait,
    {
        let existing = Self::find(db, id).await?;

        let orders = order::Entity::find()
            .filter(order::Column::CustomerId.eq(id))
            .count(db)
            .await?;
        if orders > 0 {
            return Err(AppError::Validation(format!(
                "Cannot delete customer: {} order(s) still reference it",
                orders
            )));
        }

        review::Entity::update_many()
            .col_expr(review::Column::CustomerId, Expr::value(Value::Int(None)))
            .filter(review::Column::CustomerId.eq(id))
            .exec(db)
            .await?;
        address::Entity::delete_many()
            .filter(address::Column::CustomerId.eq(id))
            .exec(db)
            .await?;

        existing.delete(db).await?;
        tracing::info!("Deleted customer {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn customer(id: i32, email: &str) -> customer::Model {
        customer::Model {
            id,
            first_name: "Wanjiku".to_string(),
            last_name: "Kamau".to_string(),
            email: email.to_string(),
            phone: None,
            user_id: None,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[tokio::test]
    async fn test_get_or_create_reuses_existing_customer() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![customer(4, "w@example.com")]])
            .into_connection();

        let payload = CreateCustomerRequest {
            first_name: "Someone".to_string(),
            last_name: "Else".to_string(),
            email: "w@example.com".to_string(),
            phone: Some("0700".to_string()),
            user_id: None,
        };

        let (found, created) = CustomerService::get_or_create(&db, payload).await.unwrap();
        assert!(!created);
        assert_eq!(found.id, 4);
        assert_eq!(found.first_name, "Wanjiku");
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![customer(1, "dup@example.com")]])
            .into_connection();

        let payload = CreateCustomerRequest {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "dup@example.com".to_string(),
            phone: None,
            user_id: None,
        };

        let result = CustomerService::create(&db, payload).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_lost_email_race_is_integrity_error_and_rolls_back() {
        let config = crate::shared::config::test_config();
        let db = crate::bootstrap::database::connect(&config).await.unwrap();
        crate::bootstrap::database::migrate(&db).await.unwrap();

        let payload = CreateCustomerRequest {
            first_name: "Amina".to_string(),
            last_name: "Hassan".to_string(),
            email: "amina@example.com".to_string(),
            phone: None,
            user_id: None,
        };

        // both inserts skip the pre-check, as two racing checkouts would
        let txn = db.begin().await.unwrap();
        let result = async {
            CustomerService::insert(&txn, payload.clone()).await?;
            CustomerService::insert(&txn, payload).await
        }
        .await;
        let err = finish(txn, result).await.unwrap_err();

        assert!(matches!(err, AppError::Integrity(_)), "{:?}", err);
        assert_eq!(err.kind(), "integrity");
        assert_eq!(customer::Entity::find().count(&db).await.unwrap(), 0);
    }
}
