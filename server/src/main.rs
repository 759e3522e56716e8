//! LED webhook server - long-running HTTP variant of the fulfillment.

use std::net::SocketAddr;

use led_server::{router, AppState};
use shared::{Config, ParticleClient};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(ParticleClient::new(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Starting server at http://{}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
