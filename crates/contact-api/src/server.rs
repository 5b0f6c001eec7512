//! Server lifecycle

use std::future::Future;
use std::net::SocketAddr;
use thiserror::Error;

use crate::config::{ConfigError, ServerConfig};
use crate::handler::{create_router, AppState};

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: ServerConfig, state: AppState) -> Result<(), ServerError> {
    serve_until(config, state, shutdown_signal()).await
}

/// Bind and serve until `shutdown` completes, then drain open connections
pub async fn serve_until<F>(
    config: ServerConfig,
    state: AppState,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr()?;
    let router = create_router(state, &config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(
        addr = %addr,
        max_body_bytes = config.max_body_bytes,
        "Contact server listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Contact server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(err) => {
            tracing::error!(error = %err, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(port: u16) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port,
            ..ServerConfig::default()
        }
    }

    #[tokio::test]
    async fn test_stops_on_shutdown_signal() {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(serve_until(local(0), AppState::in_memory(), async {
            let _ = rx.await;
        }));

        tx.send(()).unwrap();
        let outcome = tokio::time::timeout(std::time::Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();
        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn test_port_in_use_is_bind_error() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = serve_until(local(port), AppState::in_memory(), async {})
            .await
            .unwrap_err();

        match err {
            ServerError::Bind { addr, .. } => assert_eq!(addr.port(), port),
            other => panic!("expected bind error, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_host_is_config_error() {
        let config = ServerConfig {
            host: "not an address".to_string(),
            ..ServerConfig::default()
        };

        let err = serve_until(config, AppState::in_memory(), async {})
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }
}
