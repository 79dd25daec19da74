// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity routes.

use crate::error::Result;
use crate::models::{Activity, NewActivity};
use crate::routes::extract::{ApiJson, ApiPath};
use crate::routes::StatusResponse;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities).post(create_activity))
        .route("/activities/{id}", delete(delete_activity))
}

/// List all activities, newest date first.
async fn list_activities(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Activity>>> {
    let activities = state.store.list_activities().await?;
    tracing::debug!(count = activities.len(), "Listing activities");
    Ok(Json(activities))
}

/// Store a new activity and return it with its assigned id.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewActivity>,
) -> Result<(StatusCode, Json<Activity>)> {
    let activity = state.store.insert_activity(payload).await?;
    tracing::info!(
        id = %activity.id,
        points = activity.points,
        date = %activity.date,
        "Activity stored"
    );
    Ok((StatusCode::CREATED, Json(activity)))
}

/// Delete an activity. Unknown or malformed ids are a 404.
async fn delete_activity(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<StatusResponse>> {
    state.store.delete_activity(&id).await?;
    tracing::info!(id = %id, "Activity deleted");
    Ok(Json(StatusResponse::new("deleted")))
}
