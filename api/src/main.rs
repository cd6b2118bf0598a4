//! Talent Portal server
//!
//! Wires configuration, the document store and the router, then serves.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use talent_portal::adapters::{MongoPostRepository, MongoStore};
use talent_portal::app::FeedService;
use talent_portal::config::Config;
use talent_portal::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,talent_portal=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Talent Portal...");

    // Load configuration
    let config = Config::from_env()?;

    // The store connects on first request and is reused afterwards
    let store = Arc::new(MongoStore::new(config.store_settings()));
    let post_repo = Arc::new(MongoPostRepository::new(store));
    let feed_service = Arc::new(FeedService::new(post_repo));

    let state = AppState::new(feed_service);

    // Per-IP rate limiting; PeerIpKeyExtractor needs the socket's connect info
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .finish()
            .ok_or_else(|| anyhow!("Rate limits must be greater than zero"))?,
    );

    let app = build_router(state).layer(GovernorLayer {
        config: governor_config,
    });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
