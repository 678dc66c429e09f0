//! HTTP front end: a JSON API over the roll-call logic plus one static page.

mod error;
mod routes;
mod state;

pub use routes::router;
pub use state::AppState;

use crate::config::Config;
use crate::db::ActivityLog;
use crate::errors::{AppError, AppResult};
use crate::storage::JsonStore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::net::TcpListener;

/// Build the shared state for a server backed by the configured data
/// directory.
pub fn state_from_config(cfg: &Config) -> AppResult<AppState> {
    let store = JsonStore::open(cfg.data_path())?;

    Ok(AppState::new(
        Box::new(store),
        StdRng::from_os_rng(),
        cfg.history_limit,
        ActivityLog::for_config(cfg),
    ))
}

/// Serve until Ctrl-C.
pub async fn serve(cfg: &Config, bind: &str) -> AppResult<()> {
    let state = state_from_config(cfg)?;
    let listener = TcpListener::bind(bind)
        .await
        .map_err(|e| AppError::Other(format!("cannot listen on {bind}: {e}")))?;

    let addr = listener.local_addr()?;
    tracing::info!(%addr, data_dir = %cfg.data_path().display(), "rollcall server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("rollcall server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %error, "cannot listen for Ctrl-C, shutting down");
    }
}
