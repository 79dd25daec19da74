// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A point-earning event as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/ewgweb2.0/src/generated/")
)]
pub struct Activity {
    /// Store-assigned identifier (24-char hex)
    pub id: String,
    /// Free-text label
    pub activity: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
    /// Date as `YYYY/MM/DD`, compared as a plain string
    pub date: String,
}

/// Activity payload without an identifier (request body and insert input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/ewgweb2.0/src/generated/")
)]
pub struct NewActivity {
    pub activity: String,
    #[serde(deserialize_with = "crate::models::points::deserialize")]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
    pub date: String,
}

impl NewActivity {
    pub fn new(activity: &str, points: i64, date: &str) -> Self {
        Self {
            activity: activity.to_string(),
            points,
            date: date.to_string(),
        }
    }

    /// Attach a store-assigned identifier.
    pub fn with_id(self, id: String) -> Activity {
        Activity {
            id,
            activity: self.activity,
            points: self.points,
            date: self.date,
        }
    }
}
