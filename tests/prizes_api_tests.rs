// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Prize endpoint tests against the in-memory store.

use axum::http::StatusCode;
use serde_json::{json, Value};

mod common;
use common::{create_test_app, ids, send};

async fn create_prize(app: &axum::Router, points: i64, label: &str) {
    let (status, body) = send(
        app,
        "POST",
        "/prizes",
        Some(json!({"points": points, "label": label})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success"}));
}

fn find<'a>(list: &'a Value, label: &str) -> &'a Value {
    list.as_array()
        .unwrap()
        .iter()
        .find(|p| p["label"] == label)
        .unwrap()
}

#[tokio::test]
async fn test_create_and_list_prizes_sorted_by_points() {
    let (app, _state) = create_test_app();

    create_prize(&app, 1150, "Team Hoodie").await;
    create_prize(&app, 150, "Sticker Pack").await;
    create_prize(&app, 425, "Team Hat").await;

    let (status, listed) = send(&app, "GET", "/prizes", None).await;
    assert_eq!(status, StatusCode::OK);

    let points: Vec<i64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["points"].as_i64().unwrap())
        .collect();
    assert_eq!(points, vec![150, 425, 1150]);

    let hat = find(&listed, "Team Hat");
    assert_eq!(hat["id"].as_str().unwrap().len(), 24);
}

#[tokio::test]
async fn test_update_prize_overwrites_fields() {
    let (app, _state) = create_test_app();
    create_prize(&app, 150, "Sticker Pack").await;
    create_prize(&app, 425, "Team Hat").await;

    let (_, listed) = send(&app, "GET", "/prizes", None).await;
    let id = find(&listed, "Sticker Pack")["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/prizes/{}", id),
        Some(json!({"points": 999, "label": "X"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "updated"}));

    let (_, listed) = send(&app, "GET", "/prizes", None).await;
    let updated = find(&listed, "X");
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["points"], 999);
    // Now the most expensive
    assert_eq!(ids(&listed).last().unwrap(), &id);
}

#[tokio::test]
async fn test_update_unknown_prize_still_reports_updated() {
    let (app, _state) = create_test_app();
    create_prize(&app, 150, "Sticker Pack").await;
    let (_, before) = send(&app, "GET", "/prizes", None).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/prizes/65f0c0ffee0123456789abcd",
        Some(json!({"points": 999, "label": "X"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "updated"}));

    let (_, after) = send(&app, "GET", "/prizes", None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_update_prize_requires_both_fields() {
    let (app, _state) = create_test_app();
    create_prize(&app, 150, "Sticker Pack").await;
    let (_, listed) = send(&app, "GET", "/prizes", None).await;
    let id = ids(&listed).remove(0);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/prizes/{}", id),
        Some(json!({"points": 999})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");

    let (_, after) = send(&app, "GET", "/prizes", None).await;
    assert_eq!(find(&after, "Sticker Pack")["points"], 150);
}

#[tokio::test]
async fn test_delete_prize_always_reports_deleted() {
    let (app, _state) = create_test_app();
    create_prize(&app, 150, "Sticker Pack").await;
    let (_, listed) = send(&app, "GET", "/prizes", None).await;
    let id = ids(&listed).remove(0);

    let (status, body) = send(&app, "DELETE", &format!("/prizes/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "deleted"}));

    // Deleting again matches nothing but still succeeds
    let (status, body) = send(&app, "DELETE", &format!("/prizes/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "deleted"}));

    let (_, listed) = send(&app, "GET", "/prizes", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_malformed_prize_id_is_404() {
    let (app, _state) = create_test_app();

    let (status, body) = send(&app, "DELETE", "/prizes/not-an-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, _) = send(
        &app,
        "PUT",
        "/prizes/not-an-id",
        Some(json!({"points": 1, "label": "X"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_prize_rejects_bad_payload() {
    let (app, _state) = create_test_app();

    let (status, body) = send(&app, "POST", "/prizes", Some(json!({"label": "Free"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");

    let (_, listed) = send(&app, "GET", "/prizes", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_non_utf8_prize_id_is_404() {
    let (app, _state) = create_test_app();

    let (status, body) = send(&app, "DELETE", "/prizes/%FF", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, body) = send(
        &app,
        "PUT",
        "/prizes/%FF",
        Some(json!({"points": 1, "label": "X"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}
