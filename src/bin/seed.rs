// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reset the activity and prize collections to the fixed sample data.
//!
//! Out-of-band maintenance tool; reads the same `DB_URI`/`DB_NAME` as the
//! API server.

use anyhow::Context;
use rewards_tracker::{config::Config, db::MongoStore, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rewards_tracker=info".parse().unwrap()),
        )
        .init();

    let config = Config::from_env()?;
    let store = MongoStore::new(&config.db_uri, &config.db_name)
        .await
        .context("Failed to initialize record store")?
        .with_collection_names(&config.activities_collection, &config.prizes_collection);

    let report = seed::reset_and_insert(&store)
        .await
        .context("Failed to reset sample data")?;

    println!("Inserted prizes: {}", report.prizes_inserted);
    println!("Inserted activities: {}", report.activities_inserted);
    Ok(())
}
