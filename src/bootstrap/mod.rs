pub mod database;
pub mod services;

use crate::modules::roles::service::RoleService;
use crate::shared::{config::Config, error::AppError, state::AppState};
use sea_orm::DbErr;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("database setup failed: {0}")]
    Database(#[from] DbErr),

    #[error("redis pool setup failed: {0}")]
    Redis(#[from] deadpool_redis::CreatePoolError),

    #[error("could not prepare upload directory {path}: {source}")]
    UploadDir {
        path: String,
        source: std::io::Error,
    },

    #[error("role seeding failed: {0}")]
    Seed(#[from] AppError),
}

/// Connects, migrates, seeds roles and picks the revocation store.
pub async fn create_app_state(config: Config) -> Result<AppState, BootstrapError> {
    let db = database::connect(&config).await?;
    database::migrate(&db).await?;

    let seeded = RoleService::seed_defaults(&db).await?;
    if seeded > 0 {
        tracing::info!("Seeded {} default role(s)", seeded);
    }

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .map_err(|source| BootstrapError::UploadDir {
            path: config.upload_dir.clone(),
            source,
        })?;

    let revocations = services::init_revocation_store(&config)?;

    Ok(AppState {
        config: Arc::new(config),
        db: Arc::new(db),
        revocations,
    })
}
