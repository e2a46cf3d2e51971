use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::{HIJRI_MAX_YEAR, HIJRI_MIN_YEAR};
use crate::types::Prayer;

/// Errors from mihrab operations.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum MihrabError {
    /// Latitude or longitude outside the valid ranges ([-90, 90] and
    /// [-180, 180] degrees).
    #[error("invalid coordinate: latitude {lat}, longitude {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// The sun never crosses the altitude defining this event on the given
    /// date at the given latitude (polar day or polar night).
    #[error("no {event} on {date} at latitude {lat}: the sun does not reach the event altitude")]
    PolarRegion {
        event: Prayer,
        date: NaiveDate,
        lat: f64,
    },

    /// Date outside the supported Hijri conversion range (1938-2076).
    #[error("date {date} is out of supported range ({min} to {max})")]
    DateOutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
}

impl MihrabError {
    /// Creates an `InvalidCoordinate` error.
    pub fn invalid_coordinate(lat: f64, lng: f64) -> Self {
        Self::InvalidCoordinate { lat, lng }
    }

    /// Creates a `PolarRegion` error for the first unresolvable event.
    pub fn polar_region(event: Prayer, date: NaiveDate, lat: f64) -> Self {
        Self::PolarRegion { event, date, lat }
    }

    /// Creates a `DateOutOfRange` error with the standard Hijri bounds.
    pub fn date_out_of_range(date: NaiveDate) -> Self {
        Self::DateOutOfRange {
            date,
            min: NaiveDate::from_ymd_opt(HIJRI_MIN_YEAR, 1, 1)
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(1938, 1, 1).unwrap()),
            max: NaiveDate::from_ymd_opt(HIJRI_MAX_YEAR, 12, 31)
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(2076, 12, 31).unwrap()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_polar_region_message_names_the_event() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let err = MihrabError::polar_region(Prayer::Fajr, date, 69.65);
        let msg = err.to_string();
        assert!(msg.contains("Fajr"));
        assert!(msg.contains("2024-06-21"));
    }

    #[test]
    fn test_date_out_of_range_bounds() {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        match MihrabError::date_out_of_range(date) {
            MihrabError::DateOutOfRange { min, max, .. } => {
                assert_eq!(min.year(), 1938);
                assert_eq!(max.year(), 2076);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
