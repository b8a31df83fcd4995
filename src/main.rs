use anyhow::Context;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ride_fare_estimator::{config::Config, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ride_fare_estimator=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let app = routes::create_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any));

    let addr = config.server_addr();
    let listener = TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Fare estimator listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
