use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use super::entities::order;
use crate::shared::error::AppResult;

pub const ORDER_PREFIX: &str = "ATS_";
pub const TRACKING_PREFIX: &str = "TN_";
const TOKEN_LEN: usize = 6;

/// First six lowercase hex digits of a v4 UUID.
pub fn random_token() -> String {
    Uuid::new_v4().simple().to_string()[..TOKEN_LEN].to_string()
}

pub fn order_number_candidate() -> String {
    format!("{}{}", ORDER_PREFIX, random_token())
}

pub fn tracking_number_candidate() -> String {
    format!("{}{}", TRACKING_PREFIX, random_token())
}

async fn is_taken<C>(db: &C, column: order::Column, value: &str) -> AppResult<bool>
where
    C: ConnectionTrait,
{
    let count = order::Entity::find()
        .filter(column.eq(value))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Retries until a candidate is free. The unique index still guards the insert.
pub async fn generate_unique_order_number<C>(db: &C) -> AppResult<String>
where
    C: ConnectionTrait,
{
    loop {
        let candidate = order_number_candidate();
        if !is_taken(db, order::Column::OrderNumber, &candidate).await? {
            return Ok(candidate);
        }
        tracing::debug!("Order number {} already taken, retrying", candidate);
    }
}

pub async fn generate_unique_tracking_number<C>(db: &C) -> AppResult<String>
where
    C: ConnectionTrait,
{
    loop {
        let candidate = tracking_number_candidate();
        if !is_taken(db, order::Column::TrackingNumber, &candidate).await? {
            return Ok(candidate);
        }
        tracing::debug!("Tracking number {} already taken, retrying", candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<String, sea_orm::Value> {
        BTreeMap::from([("num_items".to_string(), n.into())])
    }

    #[test]
    fn test_candidate_formats() {
        let order = order_number_candidate();
        assert!(order.starts_with("ATS_"));
        assert_eq!(order.len(), ORDER_PREFIX.len() + TOKEN_LEN);

        let tracking = tracking_number_candidate();
        assert!(tracking.starts_with("TN_"));
        let token = &tracking[TRACKING_PREFIX.len()..];
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[tokio::test]
    async fn test_generator_retries_on_collision() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(1)], vec![count_row(1)], vec![count_row(0)]])
            .into_connection();

        let number = generate_unique_order_number(&db).await.unwrap();
        assert!(number.starts_with(ORDER_PREFIX));

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 3);
    }
}
