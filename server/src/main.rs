use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use todo_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = config.open_store()?;
    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, backend = ?config.storage.backend, "todo server listening");

    todo_server::serve(listener, store, shutdown_signal()).await?;
    info!("todo server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
