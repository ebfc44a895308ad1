//! Table Definitions
//!
//! The dataset ships as a prebuilt SQLite file, so the service never runs
//! these statements against it. They document the expected columns and let
//! tests and local tooling build an equivalent database. The row insert
//! helpers are only compiled for tests or with the `test-util` feature.

use sqlx::SqlitePool;
use tracing::debug;

/// `measurement` table
pub const CREATE_MEASUREMENT: &str = "\
CREATE TABLE IF NOT EXISTS measurement (
    id INTEGER NOT NULL PRIMARY KEY,
    station TEXT,
    date TEXT,
    prcp FLOAT,
    tobs FLOAT
)";

/// `station` table
pub const CREATE_STATION: &str = "\
CREATE TABLE IF NOT EXISTS station (
    id INTEGER NOT NULL PRIMARY KEY,
    station TEXT,
    name TEXT,
    latitude FLOAT,
    longitude FLOAT,
    elevation FLOAT
)";

/// Create both tables on an empty database
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_MEASUREMENT, CREATE_STATION] {
        sqlx::query(statement).execute(pool).await?;
    }
    debug!("Created measurement and station tables");
    Ok(())
}

/// Insert a measurement row. Test and tooling helper.
#[cfg(any(test, feature = "test-util"))]
pub async fn insert_measurement(
    pool: &SqlitePool,
    station: &str,
    date: &str,
    prcp: Option<f64>,
    tobs: f64,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
        .bind(station)
        .bind(date)
        .bind(prcp)
        .bind(tobs)
        .execute(pool)
        .await?;
    Ok(())
}

/// Insert a station row. Test and tooling helper.
#[cfg(any(test, feature = "test-util"))]
pub async fn insert_station(pool: &SqlitePool, station: &str, name: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?1, ?2, 0.0, 0.0, 0.0)",
    )
    .bind(station)
    .bind(name)
    .execute(pool)
    .await?;
    Ok(())
}
