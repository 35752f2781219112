//! Service lifecycle with deferred startup.
//!
//! Implements the deferred startup pattern: `new()` creates the module,
//! `start()` binds the TCP listener, and `serve()` starts accepting
//! connections. The split lets the binary bind all three services (and
//! report their actual ports) before any of them begins serving.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use super::config::ServiceConfig;
use super::middleware::build_http_layers;

/// Manages one catalog service's HTTP server lifecycle.
pub struct ServiceModule {
    name: &'static str,
    config: ServiceConfig,
    listener: Option<TcpListener>,
}

impl ServiceModule {
    /// Creates a new service module without binding any port.
    #[must_use]
    pub fn new(name: &'static str, config: ServiceConfig) -> Self {
        Self {
            name,
            config,
            listener: None,
        }
    }

    /// Binds the TCP listener to the configured host and port.
    ///
    /// Returns the actual bound port, which may differ from the
    /// configured port when port 0 is used (OS-assigned ephemeral port).
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound (e.g., port in use).
    pub async fn start(&mut self) -> anyhow::Result<u16> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();

        info!(service = self.name, host = %self.config.host, port, "listener bound");

        self.listener = Some(listener);
        Ok(port)
    }

    /// Serves `router` (wrapped in the shared middleware stack) until the
    /// shutdown future fires.
    ///
    /// Consumes `self` because the listener is moved into the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server encounters a fatal I/O error.
    ///
    /// # Panics
    ///
    /// Panics if `start()` was not called before `serve()`.
    pub async fn serve(
        self,
        router: Router,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let listener = self
            .listener
            .expect("start() must be called before serve()");

        let router = router.layer(build_http_layers(&self.config));

        info!(service = self.name, "serving HTTP connections");
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!(service = self.name, "server stopped");
        Ok(())
    }
}
