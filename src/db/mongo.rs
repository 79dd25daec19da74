// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! MongoDB-backed record store.
//!
//! One client is created at startup from the configured connection string.
//! Both collections live in the same database.

use crate::db::{collections, parse_id, RecordStore};
use crate::error::AppError;
use crate::models::{Activity, NewActivity, NewPrize, Prize};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

/// Stored shape of an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ActivityDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    activity: String,
    points: i64,
    date: String,
}

impl ActivityDocument {
    fn new(activity: NewActivity) -> Self {
        Self {
            id: ObjectId::new(),
            activity: activity.activity,
            points: activity.points,
            date: activity.date,
        }
    }
}

impl From<ActivityDocument> for Activity {
    fn from(doc: ActivityDocument) -> Self {
        Activity {
            id: doc.id.to_hex(),
            activity: doc.activity,
            points: doc.points,
            date: doc.date,
        }
    }
}

/// Stored shape of a prize.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PrizeDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    points: i64,
    label: String,
}

impl PrizeDocument {
    fn new(prize: NewPrize) -> Self {
        Self {
            id: ObjectId::new(),
            points: prize.points,
            label: prize.label,
        }
    }
}

impl From<PrizeDocument> for Prize {
    fn from(doc: PrizeDocument) -> Self {
        Prize {
            id: doc.id.to_hex(),
            points: doc.points,
            label: doc.label,
        }
    }
}

/// MongoDB record store.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
    activities: Collection<ActivityDocument>,
    prizes: Collection<PrizeDocument>,
}

impl MongoStore {
    /// Create a client for the given connection string and database.
    ///
    /// The driver connects lazily; an unparsable URI fails here, an
    /// unreachable server fails on first use.
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, AppError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

        let database = client.database(db_name);
        tracing::info!(database = db_name, "Connected to MongoDB");

        Ok(Self {
            activities: database.collection(collections::ACTIVITIES),
            prizes: database.collection(collections::PRIZES),
            database,
        })
    }

    /// Use non-default collection names within the same database.
    pub fn with_collection_names(mut self, activities: &str, prizes: &str) -> Self {
        self.activities = self.database.collection(activities);
        self.prizes = self.database.collection(prizes);
        self
    }

    /// Drop the whole database (integration test cleanup).
    pub async fn drop_database(&self) -> Result<(), AppError> {
        self.database.drop().await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    // ─── Activity Operations ─────────────────────────────────────

    async fn list_activities(&self) -> Result<Vec<Activity>, AppError> {
        let docs: Vec<ActivityDocument> = self
            .activities
            .find(doc! {})
            .sort(doc! { "date": -1, "_id": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(docs.into_iter().map(Activity::from).collect())
    }

    async fn insert_activity(&self, activity: NewActivity) -> Result<Activity, AppError> {
        let doc = ActivityDocument::new(activity);
        self.activities.insert_one(&doc).await?;
        Ok(doc.into())
    }

    async fn delete_activity(&self, id: &str) -> Result<(), AppError> {
        let oid = parse_id(id)?;
        let result = self.activities.delete_one(doc! { "_id": oid }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound("Activity not found".to_string()));
        }
        Ok(())
    }

    async fn clear_activities(&self) -> Result<u64, AppError> {
        let result = self.activities.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn insert_activities(&self, activities: Vec<NewActivity>) -> Result<usize, AppError> {
        // The server rejects an empty insertMany
        if activities.is_empty() {
            return Ok(0);
        }
        let docs: Vec<ActivityDocument> =
            activities.into_iter().map(ActivityDocument::new).collect();
        let result = self.activities.insert_many(docs).await?;
        Ok(result.inserted_ids.len())
    }

    // ─── Prize Operations ────────────────────────────────────────

    async fn list_prizes(&self) -> Result<Vec<Prize>, AppError> {
        let docs: Vec<PrizeDocument> = self
            .prizes
            .find(doc! {})
            .sort(doc! { "points": 1, "_id": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(docs.into_iter().map(Prize::from).collect())
    }

    async fn insert_prize(&self, prize: NewPrize) -> Result<Prize, AppError> {
        let doc = PrizeDocument::new(prize);
        self.prizes.insert_one(&doc).await?;
        Ok(doc.into())
    }

    async fn update_prize(&self, id: &str, prize: NewPrize) -> Result<(), AppError> {
        let oid = parse_id(id)?;
        let result = self
            .prizes
            .update_one(
                doc! { "_id": oid },
                doc! { "$set": { "points": prize.points, "label": prize.label } },
            )
            .await?;

        tracing::debug!(id, matched = result.matched_count, "Prize update applied");
        Ok(())
    }

    async fn delete_prize(&self, id: &str) -> Result<(), AppError> {
        let oid = parse_id(id)?;
        let result = self.prizes.delete_one(doc! { "_id": oid }).await?;

        tracing::debug!(id, deleted = result.deleted_count, "Prize delete applied");
        Ok(())
    }

    async fn clear_prizes(&self) -> Result<u64, AppError> {
        let result = self.prizes.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn insert_prizes(&self, prizes: Vec<NewPrize>) -> Result<usize, AppError> {
        if prizes.is_empty() {
            return Ok(0);
        }
        let docs: Vec<PrizeDocument> = prizes.into_iter().map(PrizeDocument::new).collect();
        let result = self.prizes.insert_many(docs).await?;
        Ok(result.inserted_ids.len())
    }
}
