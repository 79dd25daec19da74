// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Seeding routine tests against the in-memory store.

use rewards_tracker::db::{MemoryStore, RecordStore};
use rewards_tracker::models::{NewActivity, NewPrize};
use rewards_tracker::seed::{reset_and_insert, sample_activities, sample_prizes, SeedReport};

#[tokio::test]
async fn test_seed_replaces_existing_records() {
    let store = MemoryStore::new();
    store
        .insert_activity(NewActivity::new("Stale", 1, "2024/01/01"))
        .await
        .unwrap();
    store.insert_prize(NewPrize::new(1, "Stale")).await.unwrap();

    let report = reset_and_insert(&store).await.unwrap();
    assert_eq!(
        report,
        SeedReport {
            prizes_inserted: 3,
            activities_inserted: 14,
        }
    );

    let activities = store.list_activities().await.unwrap();
    assert_eq!(activities.len(), 14);
    assert!(activities.iter().all(|a| a.activity != "Stale"));
    assert_eq!(activities[0].activity, "World champion");
    assert_eq!(activities[13].date, "2025/09/18");

    let prizes = store.list_prizes().await.unwrap();
    let labels: Vec<&str> = prizes.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Sticker Pack", "Team Hat", "Team Hoodie"]);
}

#[tokio::test]
async fn test_seed_twice_leaves_exactly_sample_set() {
    let store = MemoryStore::new();

    reset_and_insert(&store).await.unwrap();
    reset_and_insert(&store).await.unwrap();

    let mut stored: Vec<NewActivity> = store
        .list_activities()
        .await
        .unwrap()
        .into_iter()
        .map(|a| NewActivity::new(&a.activity, a.points, &a.date))
        .collect();
    let mut expected = sample_activities();
    stored.sort_by(|a, b| (&a.date, &a.activity).cmp(&(&b.date, &b.activity)));
    expected.sort_by(|a, b| (&a.date, &a.activity).cmp(&(&b.date, &b.activity)));
    assert_eq!(stored, expected);

    let stored: Vec<NewPrize> = store
        .list_prizes()
        .await
        .unwrap()
        .into_iter()
        .map(|p| NewPrize::new(p.points, &p.label))
        .collect();
    assert_eq!(stored, sample_prizes());
}
