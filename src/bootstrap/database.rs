use crate::shared::config::Config;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use std::time::Duration;

pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .connect_timeout(Duration::from_secs(config.database_connect_timeout))
        .idle_timeout(Duration::from_secs(config.database_idle_timeout))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    tracing::info!("Connected to database ({:?})", db.get_database_backend());
    Ok(db)
}

pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
