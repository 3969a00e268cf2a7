pub mod api;
pub mod assets;
pub mod router;

use anyhow::Result;

use crate::app::SharedState;

/// Start the axum HTTP server.
pub async fn start_server(state: SharedState) -> Result<()> {
    let addr = format!("0.0.0.0:{}", state.server_port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Label server listening on http://{}", addr);

    axum::serve(listener, router::create_router(state).into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}
