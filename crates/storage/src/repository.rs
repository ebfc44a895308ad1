//! Repository Implementation

use crate::models::{PrecipitationRow, StationId, TemperatureSummaryRow};
use crate::schema;
use crate::window::{format_date, window_start};
use crate::StorageError;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};
use std::path::Path;
use tracing::{debug, info};

const ALL_PRECIPITATION: &str = "SELECT date, prcp FROM measurement ORDER BY id";

const ALL_STATION_IDS: &str = "SELECT station FROM station ORDER BY id";

const LATEST_DATE: &str = "SELECT MAX(date) FROM measurement";

const PRECIPITATION_SINCE: &str =
    "SELECT date, prcp FROM measurement WHERE date >= ?1 ORDER BY date, id";

const TEMPERATURE_SUMMARY_SINCE: &str = "\
SELECT date,
       CAST(MIN(tobs) AS REAL) AS min_temp,
       CAST(AVG(tobs) AS REAL) AS avg_temp,
       CAST(MAX(tobs) AS REAL) AS max_temp
FROM measurement
WHERE date >= ?1
GROUP BY date
ORDER BY date";

const TEMPERATURE_SUMMARY_RANGE: &str = "\
SELECT date,
       CAST(MIN(tobs) AS REAL) AS min_temp,
       CAST(AVG(tobs) AS REAL) AS avg_temp,
       CAST(MAX(tobs) AS REAL) AS max_temp
FROM measurement
WHERE date >= ?1 AND date <= ?2
GROUP BY date
ORDER BY date";

/// Read-only query layer over the measurement dataset.
///
/// Each query checks out its own connection from the pool and hands it back
/// when the query returns, on success or failure alike.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Open the dataset file read-only
    pub async fn with_sqlite(db_path: &Path, max_connections: u32) -> Result<Self, StorageError> {
        info!("Opening dataset {} (read-only)", db_path.display());

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Create an empty in-memory dataset with both tables declared.
    ///
    /// A single connection is kept alive for the lifetime of the pool, since
    /// every new connection to `:memory:` would see its own empty database.
    pub async fn in_memory() -> Result<Self, StorageError> {
        info!("Creating in-memory dataset");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        schema::create_tables(&pool).await?;
        Ok(Self { pool })
    }

    /// Underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn acquire(&self) -> Result<PoolConnection<Sqlite>, StorageError> {
        let conn = self.pool.acquire().await?;
        debug!(
            "Acquired connection ({} open, {} idle)",
            self.pool.size(),
            self.pool.num_idle()
        );
        Ok(conn)
    }

    /// Date and precipitation of every measurement, in table order
    pub async fn all_precipitation(&self) -> Result<Vec<PrecipitationRow>, StorageError> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, PrecipitationRow>(ALL_PRECIPITATION)
            .fetch_all(&mut *conn)
            .await?;
        debug!("Fetched {} precipitation rows", rows.len());
        Ok(rows)
    }

    /// Every station identifier, in table order, duplicates included
    pub async fn all_station_ids(&self) -> Result<Vec<StationId>, StorageError> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, StationId>(ALL_STATION_IDS)
            .fetch_all(&mut *conn)
            .await?;
        debug!("Fetched {} station ids", rows.len());
        Ok(rows)
    }

    /// Latest date present in the measurement table
    pub async fn latest_date(&self) -> Result<Option<String>, StorageError> {
        let mut conn = self.acquire().await?;
        let latest: Option<String> = sqlx::query_scalar(LATEST_DATE)
            .fetch_one(&mut *conn)
            .await?;
        Ok(latest)
    }

    /// Precipitation for the 365 days ending at the dataset's latest date,
    /// ascending by date. An empty dataset has no window and yields no rows.
    pub async fn last_year_precipitation(&self) -> Result<Vec<PrecipitationRow>, StorageError> {
        let Some(latest) = self.latest_date().await? else {
            debug!("Measurement table is empty, no rolling window");
            return Ok(Vec::new());
        };
        let start = format_date(window_start(&latest)?);
        debug!("Latest date in dataset: {}, window starts {}", latest, start);

        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, PrecipitationRow>(PRECIPITATION_SINCE)
            .bind(start.as_str())
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Per-date min/avg/max temperature for every date `>= start`.
    ///
    /// `start` is compared as a string against the stored ISO dates; input
    /// that is not a date simply matches nothing.
    pub async fn temp_summary_since(
        &self,
        start: &str,
    ) -> Result<Vec<TemperatureSummaryRow>, StorageError> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, TemperatureSummaryRow>(TEMPERATURE_SUMMARY_SINCE)
            .bind(start)
            .fetch_all(&mut *conn)
            .await?;
        debug!("Temperature summary since {}: {} dates", start, rows.len());
        Ok(rows)
    }

    /// Per-date min/avg/max temperature for `start <= date <= end`
    pub async fn temp_summary_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<TemperatureSummaryRow>, StorageError> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, TemperatureSummaryRow>(TEMPERATURE_SUMMARY_RANGE)
            .bind(start)
            .bind(end)
            .fetch_all(&mut *conn)
            .await?;
        debug!(
            "Temperature summary {}..={}: {} dates",
            start,
            end,
            rows.len()
        );
        Ok(rows)
    }
}
