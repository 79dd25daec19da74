// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed sample data and the routine that resets both collections to it.

use crate::db::RecordStore;
use crate::error::AppError;
use crate::models::{NewActivity, NewPrize};

/// Counts reported after a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub prizes_inserted: usize,
    pub activities_inserted: usize,
}

pub fn sample_prizes() -> Vec<NewPrize> {
    vec![
        NewPrize::new(150, "Sticker Pack"),
        NewPrize::new(425, "Team Hat"),
        NewPrize::new(1150, "Team Hoodie"),
    ]
}

pub fn sample_activities() -> Vec<NewActivity> {
    [
        ("World champion", 400, "2025/11/16"),
        ("Team Win", 100, "2025/11/15"),
        ("Play day goal", 20, "2025/11/04"),
        ("Team Tournament Goal", 25, "2025/11/04"),
        ("Close-out Drills", 10, "2025/11/03"),
        ("Community Service", 50, "2025/11/01"),
        ("Close-out Drills", 10, "2025/10/25"),
        ("Team Round Under-Par", 50, "2025/10/19"),
        ("Drills at Practice", 57, "2025/10/14"),
        ("Close-out Drills", 10, "2025/10/08"),
        ("Flamingo Drill", 31, "2025/10/07"),
        ("Team Tournament Goal", 25, "2025/10/01"),
        ("Cards for veterans", 31, "2025/09/28"),
        ("Team Win", 100, "2025/09/18"),
    ]
    .into_iter()
    .map(|(activity, points, date)| NewActivity::new(activity, points, date))
    .collect()
}

/// Wipe both collections and insert the sample set.
///
/// Running this repeatedly always leaves exactly the sample set behind.
pub async fn reset_and_insert(store: &dyn RecordStore) -> Result<SeedReport, AppError> {
    let removed_prizes = store.clear_prizes().await?;
    let removed_activities = store.clear_activities().await?;
    tracing::info!(
        prizes = removed_prizes,
        activities = removed_activities,
        "Cleared existing records"
    );

    let prizes_inserted = store.insert_prizes(sample_prizes()).await?;
    let activities_inserted = store.insert_activities(sample_activities()).await?;

    Ok(SeedReport {
        prizes_inserted,
        activities_inserted,
    })
}
