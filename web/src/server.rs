// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use superlists_core::Superlists;
use tokio::net::TcpListener;

use crate::views;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct ServerConfig {
    /// Address to bind the server to.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}

/// Builds the application's routes on top of the given core.
pub fn router(app: Superlists) -> Router {
    Router::new()
        .route("/", get(views::home_page).post(views::home_page))
        .route("/lists/new", post(views::new_list))
        .route("/lists/{id}/", get(views::view_list))
        .route("/lists/{id}/add_item", post(views::add_item))
        .fallback(views::not_found)
        .with_state(app)
}

/// Serves the application until Ctrl-C is received.
pub async fn serve(config: ServerConfig, app: Superlists) -> Result<(), Box<dyn Error>> {
    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|e| format!("Failed to bind {}: {e}", config.bind))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router(app.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    app.close().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(err = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_to_localhost_8000() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "127.0.0.1:8000".parse().unwrap());
    }

    #[test]
    fn deserializes_bind_address() {
        let config: ServerConfig = toml::from_str(r#"bind = "0.0.0.0:8080""#).unwrap();
        assert_eq!(config.bind, "0.0.0.0:8080".parse().unwrap());

        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
    }
}
