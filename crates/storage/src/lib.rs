//! Storage Layer
//!
//! Read-only SQLite access to the station measurement dataset.

mod models;
mod repository;
pub mod schema;
pub mod window;

pub use models::{Measurement, PrecipitationRow, Station, StationId, TemperatureSummaryRow};
pub use repository::Repository;

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("Invalid date in dataset: {0}")]
    InvalidDate(String),
}
