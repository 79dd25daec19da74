// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record store gateway.
//!
//! Handlers only ever see string identifiers. Conversion to and from the
//! store's native `ObjectId` happens inside the backends via [`parse_id`].

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::error::AppError;
use crate::models::{Activity, NewActivity, NewPrize, Prize};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

/// Default collection names.
///
/// Databases created by the earlier backend use `Activities`/`Prizes`; point
/// `ACTIVITIES_COLLECTION`/`PRIZES_COLLECTION` at those when reusing one.
pub mod collections {
    pub const ACTIVITIES: &str = "activities";
    pub const PRIZES: &str = "prizes";
}

/// Typed CRUD operations over the activity and prize collections.
#[async_trait]
pub trait RecordStore: Send + Sync {
    // ─── Activities ──────────────────────────────────────────────

    /// All activities, newest `date` string first.
    async fn list_activities(&self) -> Result<Vec<Activity>, AppError>;

    /// Store an activity and return it with its assigned identifier.
    async fn insert_activity(&self, activity: NewActivity) -> Result<Activity, AppError>;

    /// Delete an activity. Fails with `NotFound` if nothing matched.
    async fn delete_activity(&self, id: &str) -> Result<(), AppError>;

    /// Remove every activity, returning how many were deleted.
    async fn clear_activities(&self) -> Result<u64, AppError>;

    /// Bulk insert, returning how many were stored.
    async fn insert_activities(&self, activities: Vec<NewActivity>) -> Result<usize, AppError>;

    // ─── Prizes ──────────────────────────────────────────────────

    /// All prizes, cheapest first.
    async fn list_prizes(&self) -> Result<Vec<Prize>, AppError>;

    /// Store a prize and return it with its assigned identifier.
    async fn insert_prize(&self, prize: NewPrize) -> Result<Prize, AppError>;

    /// Overwrite both fields of a prize. Succeeds even if nothing matched.
    async fn update_prize(&self, id: &str, prize: NewPrize) -> Result<(), AppError>;

    /// Delete a prize. Succeeds even if nothing matched.
    async fn delete_prize(&self, id: &str) -> Result<(), AppError>;

    /// Remove every prize, returning how many were deleted.
    async fn clear_prizes(&self) -> Result<u64, AppError>;

    /// Bulk insert, returning how many were stored.
    async fn insert_prizes(&self, prizes: Vec<NewPrize>) -> Result<usize, AppError>;
}

/// Parse an external identifier into the store's native form.
pub fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}
