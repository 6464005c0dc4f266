use crate::modules::auth::revocation::{
    InMemoryRevocationStore, RedisRevocationStore, RevocationStore,
};
use crate::shared::config::Config;
use deadpool_redis::CreatePoolError;
use std::sync::Arc;

pub fn init_revocation_store(config: &Config) -> Result<Arc<dyn RevocationStore>, CreatePoolError> {
    match &config.redis_url {
        Some(url) => {
            tracing::info!("Using Redis revocation store");
            Ok(Arc::new(RedisRevocationStore::connect(url)?))
        }
        None => {
            tracing::warn!("REDIS_URL not set, revoked tokens are kept in memory only");
            Ok(Arc::new(InMemoryRevocationStore::default()))
        }
    }
}
