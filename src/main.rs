use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use beachbox_api::config::AppConfig;
use beachbox_api::{cache::ReportCache, events, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beachbox_api=debug,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let bind_addr = config.bind_addr.clone();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    let cache = ReportCache::new();
    let event_tx = events::channel();
    tokio::spawn(events::start_report_invalidator(
        cache.clone(),
        event_tx.subscribe(),
    ));

    let state = AppState {
        db: pool,
        cache,
        events: event_tx,
        config: Arc::new(config),
    };

    let app = beachbox_api::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
