// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Prize routes.
//!
//! Unlike activities, update and delete report success whether or not a
//! prize with the given id exists. Existing clients rely on this.

use crate::error::Result;
use crate::models::{NewPrize, Prize};
use crate::routes::extract::{ApiJson, ApiPath};
use crate::routes::StatusResponse;
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/prizes", get(list_prizes).post(create_prize))
        .route("/prizes/{id}", put(update_prize).delete(delete_prize))
}

/// List all prizes, cheapest first.
async fn list_prizes(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Prize>>> {
    let prizes = state.store.list_prizes().await?;
    tracing::debug!(count = prizes.len(), "Listing prizes");
    Ok(Json(prizes))
}

async fn create_prize(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewPrize>,
) -> Result<Json<StatusResponse>> {
    let prize = state.store.insert_prize(payload).await?;
    tracing::info!(id = %prize.id, points = prize.points, "Prize stored");
    Ok(Json(StatusResponse::new("success")))
}

/// Replace both fields of a prize.
async fn update_prize(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<NewPrize>,
) -> Result<Json<StatusResponse>> {
    state.store.update_prize(&id, payload).await?;
    tracing::info!(id = %id, "Prize updated");
    Ok(Json(StatusResponse::new("updated")))
}

async fn delete_prize(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<StatusResponse>> {
    state.store.delete_prize(&id).await?;
    tracing::info!(id = %id, "Prize deleted");
    Ok(Json(StatusResponse::new("deleted")))
}
