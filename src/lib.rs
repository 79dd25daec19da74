// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Rewards tracker: backend API for point-earning activities and prizes.
//!
//! This crate stores activities and prizes in a document database and
//! exposes create/read/update/delete endpoints for the web frontend.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;

use config::Config;
use db::RecordStore;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn RecordStore>,
}
