//! Control Map - HTTP server entry point
//!
//! Starts serving immediately and loads the dataset in the background;
//! searches answer "data not loaded" until the load resolves.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use control_map::api::{create_router, AppState};
use control_map::{AppResult, Config, Session};

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("control_map=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let session = Arc::new(Session::new());

    let loader = Arc::clone(&session);
    let data_path = config.data_path.clone();
    tokio::spawn(async move {
        if let Err(e) = loader.load_from_path(&data_path).await {
            error!(error = %e, "dataset unavailable for this session");
        }
    });

    let app = create_router(Arc::new(AppState::new(session)));
    let listener = TcpListener::bind(config.bind_address).await?;
    info!(
        version = control_map::VERSION,
        address = %config.bind_address,
        "control map listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
