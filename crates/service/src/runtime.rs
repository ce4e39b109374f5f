//! Runtime bootstrap
//!
//! Wires configuration, logging, the database pool and migrations into a
//! ready-to-use [`TutorialService`].

use std::sync::Arc;

use configs::AppConfig;
use migration::MigratorTrait;
use tracing::info;

use crate::tutorial::{SeaOrmTutorialStore, TutorialService};

/// Load `.env` and configuration, then bootstrap.
pub async fn bootstrap_from_env() -> anyhow::Result<TutorialService<SeaOrmTutorialStore>> {
    common::env::load_dotenv();
    let cfg = AppConfig::load_and_validate()?;
    bootstrap(&cfg).await
}

/// Build a SeaORM-backed service from an already loaded configuration.
pub async fn bootstrap(cfg: &AppConfig) -> anyhow::Result<TutorialService<SeaOrmTutorialStore>> {
    common::utils::logging::init_logging(cfg.logging.format);
    cfg.database.validate()?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("tutorial_service_ready");

    Ok(TutorialService::new(Arc::new(SeaOrmTutorialStore::new(db))))
}
