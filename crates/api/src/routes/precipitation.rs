//! Precipitation Routes

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::info;

use crate::response::{to_records, PrecipitationRecord, WindowedPrecipitation};
use crate::{ApiError, AppState};

/// Get date and precipitation for every measurement
pub async fn get_precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PrecipitationRecord>>, ApiError> {
    info!("Server request for precipitation");
    let rows = state.repository.all_precipitation().await?;
    Ok(Json(to_records(rows)))
}

/// Get precipitation for the rolling 365-day window ending at the latest
/// date in the dataset
pub async fn get_last_year(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WindowedPrecipitation>>, ApiError> {
    info!("Server request for tobs");
    let rows = state.repository.last_year_precipitation().await?;
    Ok(Json(to_records(rows)))
}
