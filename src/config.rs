// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use crate::db::collections;
use std::env;

/// Default database name when `DB_NAME` is not set.
pub const DEFAULT_DB_NAME: &str = "2025Fall";

/// Origins allowed to make credentialed cross-origin requests by default.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] =
    ["https://ewgweb2.vercel.app", "http://localhost:5173"];

const DEFAULT_PORT: u16 = 8080;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string (required)
    pub db_uri: String,
    /// Database holding the activity and prize collections
    pub db_name: String,
    /// Collection name for activities
    pub activities_collection: String,
    /// Collection name for prizes
    pub prizes_collection: String,
    /// Server port
    pub port: u16,
    /// Exact origins accepted by the CORS layer
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Fixed configuration for tests.
    pub fn test_default() -> Self {
        Self {
            db_uri: "mongodb://localhost:27017".to_string(),
            db_name: "rewards_test".to_string(),
            activities_collection: collections::ACTIVITIES.to_string(),
            prizes_collection: collections::PRIZES.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_uri = lookup("DB_URI")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("DB_URI"))?;

        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let db_name = non_blank("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
        let activities_collection = non_blank("ACTIVITIES_COLLECTION")
            .unwrap_or_else(|| collections::ACTIVITIES.to_string());
        let prizes_collection =
            non_blank("PRIZES_COLLECTION").unwrap_or_else(|| collections::PRIZES.to_string());

        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw),
            None => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        };

        Ok(Self {
            db_uri,
            db_name,
            activities_collection,
            prizes_collection,
            port,
            allowed_origins,
        })
    }
}

/// Split a comma-separated origin list, dropping blank entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.trim_end_matches('/').to_string())
        .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
