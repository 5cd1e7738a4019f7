use advent_calendar::{AppState, Config, load_store, pool::FileSource, router};
use std::net::SocketAddr;
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.store_path.parent() {
        fs::create_dir_all(parent).await?;
    }
    if fs::metadata(&config.sentences_path).await.is_err() {
        warn!(
            "sentence pool {} not found; opening a gift will fail until it exists",
            config.sentences_path.display()
        );
    }

    let store = load_store(&config.store_path).await;
    let state = AppState::new(
        config.store_path.clone(),
        FileSource::new(config.sentences_path.clone()),
        store,
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
