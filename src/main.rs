use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use dotenv::dotenv;
use slotbook_api::config::{ApiConfig, StoreBackend};
use slotbook_core::store::SchedulingStore;
use slotbook_db::{create_pool, schema::initialize_database, InMemoryStore, PgSchedulingStore};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = ApiConfig::from_env()?;
    slotbook_api::init_tracing(&config)?;

    let store: Arc<dyn SchedulingStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| eyre!("DATABASE_URL must be set for the postgres backend"))?;
            let db_pool = create_pool(database_url, config.database_max_connections).await?;
            initialize_database(&db_pool).await?;
            info!("Using PostgreSQL store");
            Arc::new(PgSchedulingStore::new(db_pool))
        }
        StoreBackend::Memory => {
            info!("Using in-memory store seeded with the demo directory");
            Arc::new(InMemoryStore::seeded())
        }
    };

    slotbook_api::start_server(config, store).await?;

    Ok(())
}
