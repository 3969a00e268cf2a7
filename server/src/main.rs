//! stocklabel server — upload a product sheet, download a printable PDF of
//! QR inventory labels.

mod app;
mod config;
mod server;
mod services;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use app::SharedState;
use config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting stocklabel server");

    let config = ServerConfig::load();
    let font = label_engine::resolve_font(config.font_path.as_deref())
        .context("failed to acquire a label font")?;
    let state = SharedState::new(config, font);

    server::start_server(state).await
}
