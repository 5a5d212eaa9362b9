use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use persons_core::{
    CoreConfig, DEFAULT_REST_ADDR, PersonService,
    config::{default_page_size_from_env_value, sort_order_from_env_value},
};

/// Main entry point for the persons service
///
/// Starts the REST server and serves until Ctrl-C.
///
/// # Environment Variables
/// - `PERSONS_REST_ADDR`: REST server address (default: "0.0.0.0:9000")
/// - `PERSONS_DEFAULT_PAGE_SIZE`: page size when `pageSize` is absent (default: 100)
/// - `PERSONS_SORT_ORDER`: listing order, `age-desc` or `name-asc` (default: `age-desc`)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - a configuration value is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("persons=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("PERSONS_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let default_page_size =
        default_page_size_from_env_value(std::env::var("PERSONS_DEFAULT_PAGE_SIZE").ok())?;
    let sort_order = sort_order_from_env_value(std::env::var("PERSONS_SORT_ORDER").ok())?;
    let cfg = Arc::new(CoreConfig::new(default_page_size, sort_order)?);

    tracing::info!(
        "++ Listing persons by {} with default page size {}",
        cfg.sort_order(),
        cfg.default_page_size()
    );

    let app = api_rest::router(PersonService::new(cfg));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("++ Starting persons REST on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Persons REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
