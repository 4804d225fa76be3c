use clinic_api::config::Config;
use clinic_api::server;
use clinic_api::storage::MemStorage;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    tracing::info!("Starting clinic API on {}", config.bind_addr);
    tracing::info!("Allowing requests from {}", config.client_url);

    let storage = Arc::new(MemStorage::new());

    server::run(config, storage.clone()).await?;

    tracing::info!(
        "Discarding {} contact messages and {} appointments held in memory",
        storage.contact_message_count(),
        storage.appointment_count()
    );

    Ok(())
}
