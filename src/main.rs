use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stylist_api::api::{create_router, AppState};
use stylist_api::config::Config;
use stylist_api::services::HttpInventoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let inventory = Arc::new(HttpInventoryStore::new(config.inventory_api_url.clone()));
    let state = AppState::new(&config, inventory);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "stylist api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
