//! Temperature Summary Routes
//!
//! The path segments are passed through as-is. Anything that is not an ISO
//! date compares against no stored date and produces an empty array.
//! Segments that do not percent-decode to UTF-8 are decoded lossily rather
//! than rejected.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::Uri,
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::response::{to_records, TemperatureSummary};
use crate::{ApiError, AppState};

const API_PREFIX: &str = "/api/v1.0/";

/// Percent-decode the segments after `/api/v1.0/`, replacing invalid UTF-8
fn lossy_segments(uri: &Uri) -> Vec<String> {
    uri.path()
        .strip_prefix(API_PREFIX)
        .unwrap_or_default()
        .split('/')
        .map(|segment| {
            let bytes = urlencoding::decode_binary(segment.as_bytes());
            String::from_utf8_lossy(&bytes).into_owned()
        })
        .collect()
}

/// Min/avg/max temperature per date from `start` onward
pub async fn get_since(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    start: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<TemperatureSummary>>, ApiError> {
    let start = match start {
        Ok(Path(start)) => start,
        Err(rejection) => {
            debug!("Decoding {} lossily: {}", uri.path(), rejection);
            lossy_segments(&uri).into_iter().next().unwrap_or_default()
        }
    };

    info!("Server request for temperatures since {}", start);
    let rows = state.repository.temp_summary_since(&start).await?;
    Ok(Json(to_records(rows)))
}

/// Min/avg/max temperature per date in `[start, end]`
pub async fn get_range(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    dates: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Vec<TemperatureSummary>>, ApiError> {
    let (start, end) = match dates {
        Ok(Path(dates)) => dates,
        Err(rejection) => {
            debug!("Decoding {} lossily: {}", uri.path(), rejection);
            let mut segments = lossy_segments(&uri).into_iter();
            (
                segments.next().unwrap_or_default(),
                segments.next().unwrap_or_default(),
            )
        }
    };

    info!("Server request for temperatures from {} to {}", start, end);
    let rows = state.repository.temp_summary_range(&start, &end).await?;
    Ok(Json(to_records(rows)))
}
