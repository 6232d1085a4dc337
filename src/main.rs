//! `chaos-console`: SSR host for the DevOps chaos console.
//!
//! Serves the Leptos app and relays `/api/*` to the backend.

mod config;
mod error;
mod routes;
mod state;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(&config)?;
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, backend = %config.backend_url, "chaos console listening");
    axum::serve(listener, app).await?;
    Ok(())
}
