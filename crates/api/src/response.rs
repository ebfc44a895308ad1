//! Response records
//!
//! JSON field names are part of the public contract, including the
//! `"Minimum Tempature"` spelling existing clients depend on.

use serde::{Deserialize, Serialize};
use storage::{PrecipitationRow, StationId, TemperatureSummaryRow};

/// `/precipitation` record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationRecord {
    pub date: String,
    /// `null` when the gauge had no reading
    pub prcp: Option<f64>,
}

impl From<PrecipitationRow> for PrecipitationRecord {
    fn from(row: PrecipitationRow) -> Self {
        Self {
            date: row.date,
            prcp: row.prcp,
        }
    }
}

/// `/stations` record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub station: String,
}

impl From<StationId> for StationRecord {
    fn from(row: StationId) -> Self {
        Self {
            station: row.station,
        }
    }
}

/// `/tobs` record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowedPrecipitation {
    pub date: String,
    pub precipitation: Option<f64>,
}

impl From<PrecipitationRow> for WindowedPrecipitation {
    fn from(row: PrecipitationRow) -> Self {
        Self {
            date: row.date,
            precipitation: row.prcp,
        }
    }
}

/// Per-date temperature aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Minimum Tempature")]
    pub min_temp: Option<f64>,
    #[serde(rename = "Average Temperature")]
    pub avg_temp: Option<f64>,
    #[serde(rename = "Maximum Temperature")]
    pub max_temp: Option<f64>,
}

impl From<TemperatureSummaryRow> for TemperatureSummary {
    fn from(row: TemperatureSummaryRow) -> Self {
        Self {
            date: row.date,
            min_temp: row.min_temp,
            avg_temp: row.avg_temp,
            max_temp: row.max_temp,
        }
    }
}

/// Convert query rows into response records
pub fn to_records<R, T: From<R>>(rows: Vec<R>) -> Vec<T> {
    rows.into_iter().map(T::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_null_precipitation_is_kept() {
        let records: Vec<PrecipitationRecord> = to_records(vec![PrecipitationRow {
            date: "2010-01-01".to_string(),
            prcp: None,
        }]);

        let value = serde_json::to_value(&records).unwrap();
        assert_eq!(value, json!([{ "date": "2010-01-01", "prcp": null }]));
    }

    #[test]
    fn test_windowed_field_names() {
        let record = WindowedPrecipitation::from(PrecipitationRow {
            date: "2017-08-23".to_string(),
            prcp: Some(0.45),
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({ "date": "2017-08-23", "precipitation": 0.45 }));
    }

    #[test]
    fn test_temperature_summary_field_names() {
        let record = TemperatureSummary::from(TemperatureSummaryRow {
            date: "2017-08-23".to_string(),
            min_temp: Some(76.0),
            avg_temp: Some(80.25),
            max_temp: Some(82.0),
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "Date": "2017-08-23",
                "Minimum Tempature": 76.0,
                "Average Temperature": 80.25,
                "Maximum Temperature": 82.0,
            })
        );
    }

    #[test]
    fn test_temperature_summary_without_observations() {
        let record = TemperatureSummary::from(TemperatureSummaryRow {
            date: "2018-01-01".to_string(),
            min_temp: None,
            avg_temp: None,
            max_temp: None,
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["Minimum Tempature"], Value::Null);
        assert_eq!(value["Average Temperature"], Value::Null);
        assert_eq!(value["Maximum Temperature"], Value::Null);
    }

    #[test]
    fn test_station_record() {
        let record = StationRecord::from(StationId {
            station: "USC00519281".to_string(),
        });
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"station":"USC00519281"}"#
        );
    }
}
