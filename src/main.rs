// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rewards Tracker API Server
//!
//! Serves point-earning activities and redeemable prizes to the web
//! frontend, backed by MongoDB.

use anyhow::Context;
use rewards_tracker::{config::Config, db::MongoStore, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment; refuse to start without DB_URI
    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
    })?;
    tracing::info!(port = config.port, "Starting Rewards Tracker API");

    // Initialize the record store
    let store = MongoStore::new(&config.db_uri, &config.db_name)
        .await
        .context("Failed to initialize record store")?
        .with_collection_names(&config.activities_collection, &config.prizes_collection);

    let state = Arc::new(AppState {
        config: config.clone(),
        store: Arc::new(store),
    });

    // Build router
    let app = rewards_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rewards_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
