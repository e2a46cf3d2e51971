//! Extension trait for `NaiveDate`.

use chrono::NaiveDate;

use crate::astronomy::solar::{self, SolarDay};
use crate::calendar::{self, HijriDisplay};
use crate::error::MihrabError;
use crate::schedule::{self, SystemClock};
use crate::types::{GeoCoordinate, PrayerSchedule};

/// Extends `NaiveDate` with prayer-time computations.
pub trait PrayerDateExt {
    /// Builds the date's schedule at `coords` using the system clock.
    fn prayer_schedule(&self, coords: GeoCoordinate) -> Result<PrayerSchedule, MihrabError>;

    /// Raw solar event hours at `coords`, before UTC-offset adjustment.
    fn solar_events(&self, coords: GeoCoordinate) -> Result<SolarDay, MihrabError>;

    /// Hijri display form of the date.
    fn hijri(&self) -> Result<HijriDisplay, MihrabError>;
}

impl PrayerDateExt for NaiveDate {
    fn prayer_schedule(&self, coords: GeoCoordinate) -> Result<PrayerSchedule, MihrabError> {
        schedule::build_schedule(*self, coords, &SystemClock)
    }

    fn solar_events(&self, coords: GeoCoordinate) -> Result<SolarDay, MihrabError> {
        solar::solar_day(*self, coords)
    }

    fn hijri(&self) -> Result<HijriDisplay, MihrabError> {
        calendar::hijri_display(*self)
    }
}
