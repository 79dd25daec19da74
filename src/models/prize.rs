// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Prize model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A redeemable reward as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/ewgweb2.0/src/generated/")
)]
pub struct Prize {
    /// Store-assigned identifier (24-char hex)
    pub id: String,
    /// Point cost
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
    pub label: String,
}

/// Prize payload without an identifier.
///
/// Used for creation and for full replacement on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/ewgweb2.0/src/generated/")
)]
pub struct NewPrize {
    #[serde(deserialize_with = "crate::models::points::deserialize")]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: i64,
    pub label: String,
}

impl NewPrize {
    pub fn new(points: i64, label: &str) -> Self {
        Self {
            points,
            label: label.to_string(),
        }
    }

    /// Attach a store-assigned identifier.
    pub fn with_id(self, id: String) -> Prize {
        Prize {
            id,
            points: self.points,
            label: self.label,
        }
    }
}
