use crate::modules::auth::revocation::RevocationStore;
use crate::shared::config::Config;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<DatabaseConnection>,
    pub revocations: Arc<dyn RevocationStore>,
}
