//! Row Models
//!
//! Statically declared shapes of the `measurement` and `station` tables and
//! of the rows produced by the aggregate queries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One station-day observation
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Measurement {
    pub id: i64,
    pub station: String,
    /// ISO `YYYY-MM-DD`
    pub date: String,
    /// Missing gauge readings are NULL
    pub prcp: Option<f64>,
    pub tobs: f64,
}

/// Weather station metadata
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// Date and precipitation of a single measurement
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// Station identifier column
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct StationId {
    pub station: String,
}

/// Temperature aggregates for one date. NULL when every `tobs` of the
/// date is NULL.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TemperatureSummaryRow {
    pub date: String,
    pub min_temp: Option<f64>,
    pub avg_temp: Option<f64>,
    pub max_temp: Option<f64>,
}
