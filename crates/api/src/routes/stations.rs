//! Station Routes

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::info;

use crate::response::{to_records, StationRecord};
use crate::{ApiError, AppState};

/// Get every station identifier
pub async fn get_stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StationRecord>>, ApiError> {
    info!("Server request for stations");
    let rows = state.repository.all_station_ids().await?;
    Ok(Json(to_records(rows)))
}
