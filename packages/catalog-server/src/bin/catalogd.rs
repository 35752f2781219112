//! catalogd — boots the series (REST), anime (GraphQL), and movies
//! (SOAP) catalog services and runs them until Ctrl-C.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog_server::network::{status_router, ServiceConfig, ServiceModule};
use catalog_server::storage::seed;
use catalog_server::{graphql, rest, soap};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (shutdown_tx, shutdown_rx) = watch::channel(());
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
        }
        let _ = shutdown_tx.send(());
    });

    let series_router = rest::router(Arc::new(seed::sample_series())).merge(status_router(
        "series",
        "Series REST API is running. Try /api/series",
    ));
    let anime_router = graphql::router(Arc::new(seed::sample_anime())).merge(status_router(
        "anime",
        "Anime GraphQL API is running. Access GraphiQL at /graphql",
    ));
    let movies_router = soap::router(Arc::new(seed::sample_movies())).merge(status_router(
        "movies",
        "Movies SOAP API is running. POST requests to /soap",
    ));

    let services = [
        (
            "series",
            ServiceConfig::series().with_env_port("CATALOG_SERIES_PORT"),
            series_router,
        ),
        (
            "anime",
            ServiceConfig::anime().with_env_port("CATALOG_ANIME_PORT"),
            anime_router,
        ),
        (
            "movies",
            ServiceConfig::movies().with_env_port("CATALOG_MOVIES_PORT"),
            movies_router,
        ),
    ];

    let mut handles = Vec::new();
    for (name, config, router) in services {
        let mut module = ServiceModule::new(name, config);
        let port = module.start().await?;
        info!(service = name, port, "service ready");
        handles.push(tokio::spawn(
            module.serve(router, on_shutdown(shutdown_rx.clone())),
        ));
    }
    drop(shutdown_rx);

    for handle in handles {
        handle.await??;
    }
    info!("all services stopped");
    Ok(())
}

/// Resolves when the shutdown signal fires (or the sender goes away).
fn on_shutdown(mut rx: watch::Receiver<()>) -> impl Future<Output = ()> + Send + 'static {
    async move {
        let _ = rx.changed().await;
    }
}
