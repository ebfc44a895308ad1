//! Router integration tests against an in-memory dataset

use api::{create_router, AppState};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use storage::schema::{insert_measurement, insert_station};
use storage::Repository;
use tower::ServiceExt;

async fn app() -> Router {
    let repo = Repository::in_memory().await.unwrap();
    let pool = repo.pool();

    insert_measurement(pool, "USC00519397", "2010-01-01", Some(0.08), 65.0).await.unwrap();
    insert_measurement(pool, "USC00519397", "2016-08-23", None, 81.0).await.unwrap();
    insert_measurement(pool, "USC00513117", "2016-08-23", Some(0.15), 76.0).await.unwrap();
    insert_measurement(pool, "USC00519397", "2017-08-22", Some(0.0), 82.0).await.unwrap();
    insert_measurement(pool, "USC00519397", "2017-08-23", Some(0.0), 81.0).await.unwrap();
    insert_measurement(pool, "USC00513117", "2017-08-23", Some(0.0), 76.0).await.unwrap();

    insert_station(pool, "USC00519397", "WAIKIKI 717.2, HI US").await.unwrap();
    insert_station(pool, "USC00513117", "KANEOHE 838.1, HI US").await.unwrap();

    create_router(Arc::new(AppState::new(repo)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get_json(uri: &str) -> Value {
    let (status, body) = get(app().await, uri).await;
    assert_eq!(status, StatusCode::OK, "GET {}", uri);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_index_lists_routes() {
    let (status, body) = get(app().await, "/").await;
    let text = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("/api/v1.0/precipitation"));
    assert!(text.contains("/api/v1.0/start_date/end_date"));
}

#[tokio::test]
async fn test_precipitation_keeps_null() {
    let value = get_json("/api/v1.0/precipitation").await;
    let rows = value.as_array().unwrap();

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0], json!({ "date": "2010-01-01", "prcp": 0.08 }));
    assert_eq!(rows[1], json!({ "date": "2016-08-23", "prcp": null }));
}

#[tokio::test]
async fn test_stations() {
    let value = get_json("/api/v1.0/stations").await;
    assert_eq!(
        value,
        json!([{ "station": "USC00519397" }, { "station": "USC00513117" }])
    );
}

#[tokio::test]
async fn test_tobs_returns_rolling_window() {
    let value = get_json("/api/v1.0/tobs").await;
    let rows = value.as_array().unwrap();

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], json!({ "date": "2016-08-23", "precipitation": null }));
    assert!(rows.iter().all(|r| r["date"].as_str().unwrap() >= "2016-08-23"));
}

#[tokio::test]
async fn test_summary_since() {
    let value = get_json("/api/v1.0/2017-08-23").await;
    assert_eq!(
        value,
        json!([{
            "Date": "2017-08-23",
            "Minimum Tempature": 76.0,
            "Average Temperature": 78.5,
            "Maximum Temperature": 81.0,
        }])
    );
}

#[tokio::test]
async fn test_summary_range() {
    let value = get_json("/api/v1.0/2016-08-23/2017-08-22").await;
    let rows = value.as_array().unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Date"], "2016-08-23");
    assert_eq!(rows[0]["Average Temperature"], 78.5);
    assert_eq!(rows[1]["Date"], "2017-08-22");

    for row in rows {
        let min = row["Minimum Tempature"].as_f64().unwrap();
        let avg = row["Average Temperature"].as_f64().unwrap();
        let max = row["Maximum Temperature"].as_f64().unwrap();
        assert!(min <= avg && avg <= max);
    }
}

#[tokio::test]
async fn test_malformed_dates_yield_empty_array() {
    assert_eq!(get_json("/api/v1.0/not-a-date").await, json!([]));
    assert_eq!(get_json("/api/v1.0/not-a-date/also-not").await, json!([]));
}

#[tokio::test]
async fn test_undecodable_dates_are_not_rejected() {
    assert_eq!(get_json("/api/v1.0/%FF").await, json!([]));
    assert_eq!(get_json("/api/v1.0/%FF/2017-01-01").await, json!([]));

    // U+FFFD sorts after every ISO date, so it behaves as an open upper bound
    let value = get_json("/api/v1.0/2016-01-01/%FF").await;
    let dates: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["Date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2016-08-23", "2017-08-22", "2017-08-23"]);
}

#[tokio::test]
async fn test_fixed_routes_win_over_date_catch_all() {
    // "tobs" would sort after every ISO date and match nothing as a start date
    let value = get_json("/api/v1.0/tobs").await;
    assert!(!value.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_depth_is_not_found() {
    let (status, _) = get(app().await, "/api/v1.0/a/b/c").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
