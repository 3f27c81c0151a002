use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::ServeError;
use crate::routes;
use crate::state::AppState;

/// Listen on every interface.
const HOST: &str = "0.0.0.0";

pub async fn bind(port: &str) -> Result<TcpListener, ServeError> {
    let addr = format!("{HOST}:{port}");
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })
}

/// Runs until the accept loop fails; each connection is handled on its own task.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), ServeError> {
    axum::serve(listener, routes::router(state)).await?;
    Ok(())
}

pub async fn start(config: &Config) -> Result<(), ServeError> {
    tracing::info!(port = %config.port, "server starting");

    let listener = bind(&config.port).await?;
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "listening");
    }

    serve(listener, AppState::from(config)).await
}
