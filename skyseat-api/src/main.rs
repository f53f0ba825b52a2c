use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use skyseat_api::{app, AppState};
use skyseat_seating::SeatAllocator;
use skyseat_store::{app_config::Config, InMemoryFlightCatalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyseat_api=debug,skyseat_store=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(
        "Starting SkySeat API on port {} with a {}-seat cabin",
        config.server.port,
        config.seat_map.seat_count()
    );

    let catalog = InMemoryFlightCatalog::from_config(&config).context("Invalid flight catalog")?;

    let app_state = AppState {
        catalog: Arc::new(catalog),
        allocator: Arc::new(SeatAllocator::new(config.seat_map.clone())),
        allowed_origins: config.server.allowed_origins.clone(),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
