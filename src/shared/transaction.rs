use sea_orm::DatabaseTransaction;

use crate::shared::error::AppResult;

/// Commits on success, rolls back on failure. A failed rollback is logged and
/// the original error is still returned.
pub async fn finish<T>(txn: DatabaseTransaction, result: AppResult<T>) -> AppResult<T> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Rollback failed after {:?}: {:?}", err, rollback_err);
            }
            Err(err)
        }
    }
}
