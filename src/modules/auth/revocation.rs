use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::{Config as RedisConfig, CreatePoolError, Pool, Runtime};
use tokio::sync::RwLock;

use crate::shared::error::{AppError, AppResult};

/// Denylist of token ids (`jti`). Entries only need to outlive the token
/// they block, so each carries the token's own expiry.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    async fn revoke(&self, jti: &str, expires_at: i64) -> AppResult<()>;
    async fn is_revoked(&self, jti: &str) -> AppResult<bool>;
}

/// Process-local store. Revocations are lost on restart.
#[derive(Default)]
pub struct InMemoryRevocationStore {
    entries: RwLock<HashMap<String, i64>>,
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn revoke(&self, jti: &str, expires_at: i64) -> AppResult<()> {
        let now = Utc::now().timestamp();
        let mut entries = self.entries.write().await;
        entries.retain(|_, exp| *exp >= now);
        entries.insert(jti.to_string(), expires_at);
        Ok(())
    }

    async fn is_revoked(&self, jti: &str) -> AppResult<bool> {
        Ok(self.entries.read().await.contains_key(jti))
    }
}

pub struct RedisRevocationStore {
    pool: Pool,
}

impl RedisRevocationStore {
    pub fn connect(url: &str) -> Result<Self, CreatePoolError> {
        let pool = RedisConfig::from_url(url).create_pool(Some(Runtime::Tokio1))?;
        Ok(Self { pool })
    }

    fn key(jti: &str) -> String {
        format!("revoked:{}", jti)
    }
}

fn redis_error(err: impl std::fmt::Display) -> AppError {
    AppError::InternalServerError(format!("Revocation store error: {}", err))
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn revoke(&self, jti: &str, expires_at: i64) -> AppResult<()> {
        let ttl = (expires_at - Utc::now().timestamp() + 1).max(1) as u64;
        let mut conn = self.pool.get().await.map_err(redis_error)?;
        conn.set_ex::<_, _, ()>(Self::key(jti), 1, ttl)
            .await
            .map_err(redis_error)
    }

    async fn is_revoked(&self, jti: &str) -> AppResult<bool> {
        let mut conn = self.pool.get().await.map_err(redis_error)?;
        conn.exists::<_, bool>(Self::key(jti))
            .await
            .map_err(redis_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_revoked_jti_is_reported() {
        let store = InMemoryRevocationStore::default();
        let exp = Utc::now().timestamp() + 60;

        assert!(!store.is_revoked("abc").await.unwrap());
        store.revoke("abc", exp).await.unwrap();
        assert!(store.is_revoked("abc").await.unwrap());
        assert!(!store.is_revoked("other").await.unwrap());
    }

    #[tokio::test]
    async fn test_expired_entries_are_purged_on_write() {
        let store = InMemoryRevocationStore::default();
        let now = Utc::now().timestamp();

        store.revoke("old", now - 10).await.unwrap();
        store.revoke("fresh", now + 60).await.unwrap();

        assert!(!store.is_revoked("old").await.unwrap());
        assert!(store.is_revoked("fresh").await.unwrap());
    }
}
