mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod router;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;

use config::Config;
use state::AppState;
use store::MemStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-sensor-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let state = AppState {
        store: Arc::new(MemStore::new()),
    };
    let app = router::build(state);

    let bind_addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
