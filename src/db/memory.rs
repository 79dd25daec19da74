// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process record store with the same contract as [`MongoStore`].
//!
//! Identifiers are real `ObjectId`s, so malformed-id handling and the
//! insertion-order tie-break match the MongoDB backend.
//!
//! [`MongoStore`]: crate::db::MongoStore

use crate::db::{parse_id, RecordStore};
use crate::error::AppError;
use crate::models::{Activity, NewActivity, NewPrize, Prize};
use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;

/// Record store backed by concurrent maps.
#[derive(Default)]
pub struct MemoryStore {
    activities: DashMap<ObjectId, NewActivity>,
    prizes: DashMap<ObjectId, NewPrize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_activities(&self) -> Result<Vec<Activity>, AppError> {
        let mut rows: Vec<(ObjectId, NewActivity)> = self
            .activities
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        rows.sort_by(|(a_id, a), (b_id, b)| b.date.cmp(&a.date).then(a_id.cmp(b_id)));

        Ok(rows
            .into_iter()
            .map(|(id, activity)| activity.with_id(id.to_hex()))
            .collect())
    }

    async fn insert_activity(&self, activity: NewActivity) -> Result<Activity, AppError> {
        let id = ObjectId::new();
        self.activities.insert(id, activity.clone());
        Ok(activity.with_id(id.to_hex()))
    }

    async fn delete_activity(&self, id: &str) -> Result<(), AppError> {
        let oid = parse_id(id)?;
        self.activities
            .remove(&oid)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))
    }

    async fn clear_activities(&self) -> Result<u64, AppError> {
        let count = self.activities.len() as u64;
        self.activities.clear();
        Ok(count)
    }

    async fn insert_activities(&self, activities: Vec<NewActivity>) -> Result<usize, AppError> {
        let count = activities.len();
        for activity in activities {
            self.activities.insert(ObjectId::new(), activity);
        }
        Ok(count)
    }

    async fn list_prizes(&self) -> Result<Vec<Prize>, AppError> {
        let mut rows: Vec<(ObjectId, NewPrize)> = self
            .prizes
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        rows.sort_by(|(a_id, a), (b_id, b)| a.points.cmp(&b.points).then(a_id.cmp(b_id)));

        Ok(rows
            .into_iter()
            .map(|(id, prize)| prize.with_id(id.to_hex()))
            .collect())
    }

    async fn insert_prize(&self, prize: NewPrize) -> Result<Prize, AppError> {
        let id = ObjectId::new();
        self.prizes.insert(id, prize.clone());
        Ok(prize.with_id(id.to_hex()))
    }

    async fn update_prize(&self, id: &str, prize: NewPrize) -> Result<(), AppError> {
        let oid = parse_id(id)?;
        if let Some(mut existing) = self.prizes.get_mut(&oid) {
            *existing = prize;
        }
        Ok(())
    }

    async fn delete_prize(&self, id: &str) -> Result<(), AppError> {
        let oid = parse_id(id)?;
        self.prizes.remove(&oid);
        Ok(())
    }

    async fn clear_prizes(&self) -> Result<u64, AppError> {
        let count = self.prizes.len() as u64;
        self.prizes.clear();
        Ok(count)
    }

    async fn insert_prizes(&self, prizes: Vec<NewPrize>) -> Result<usize, AppError> {
        let count = prizes.len();
        for prize in prizes {
            self.prizes.insert(ObjectId::new(), prize);
        }
        Ok(count)
    }
}
