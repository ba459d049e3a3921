//! Blog Post Service - Main Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::GovernorLayer;
use tower_http::timeout::TimeoutLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_post_service::infrastructure::driven_adapters::config::{AppConfig, LogFormat};
use blog_post_service::infrastructure::driven_adapters::database;
use blog_post_service::infrastructure::driven_adapters::post_repository::MongoPostRepository;
use blog_post_service::infrastructure::driving_adapters::api_rest::{app_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    init_tracing(config.logging.format);
    tracing::info!("Configuration loaded successfully");

    // Create the shared database client
    let client = database::create_client(&config.database)
        .await
        .context("Failed to connect to database")?;
    tracing::info!(
        database = %config.database.name,
        collection = %config.database.collection,
        "Database client created"
    );

    // Create repository and application state
    let post_repository = Arc::new(MongoPostRepository::new(&client, &config.database));
    let app_state = AppState::new(post_repository);

    // Build router
    let mut app = app_router(app_state).layer(TimeoutLayer::new(config.server.request_timeout()));

    if config.rate_limit.enabled {
        let governor_config = GovernorConfigBuilder::default()
            .per_second(config.rate_limit.requests_per_second)
            .burst_size(config.rate_limit.burst_size)
            .finish()
            .context("Invalid rate limit configuration")?;
        app = app.layer(GovernorLayer {
            config: Arc::new(governor_config),
        });
        tracing::info!(
            requests_per_second = config.rate_limit.requests_per_second,
            burst_size = config.rate_limit.burst_size,
            "Rate limiting enabled"
        );
    }

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, closing database client");
    client.shutdown().await;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "blog_post_service=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
