//! # Mihrab
//!
//! Prayer times and Qibla direction from solar-position astronomy.
//!
//! Two pure calculators: daily solar events (Fajr, Sunrise, Dhuhr, Asr,
//! Maghrib, Isha) and great-circle bearing/distance toward the Kaaba. A thin
//! schedule layer on top derives the "next prayer" and countdown views a
//! surrounding application consumes.
//!
//! ## Modules
//!
//! - `types`: core value types (GeoCoordinate, Prayer, PrayerSchedule, ...)
//! - `astronomy`: solar event calculation
//! - `schedule`: schedule assembly driven by an injected clock
//! - `qibla`: bearing, compass point, and distance toward the Kaaba
//! - `calendar`: Hijri display dates
//! - `i18n`: English/Arabic/Kurdish prayer names
//!
//! ## Usage
//!
//! ```rust
//! use mihrab::prelude::*;
//! use chrono::NaiveDate;
//!
//! let erbil = GeoCoordinate::new(36.1911, 44.0093)?;
//! let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
//! let clock = FixedClock::new(1_710_900_000_000, 3.0);
//!
//! let schedule = build_schedule(date, erbil, &clock)?;
//! assert_eq!(schedule.entries().len(), 5);
//!
//! let direction = qibla(erbil);
//! assert_eq!(direction.distance_km, 1691);
//! # Ok::<(), MihrabError>(())
//! ```

pub mod astronomy;
pub mod calendar;
pub mod error;
pub mod extension;
pub mod i18n;
pub mod qibla;
pub mod schedule;
pub mod types;

pub use error::MihrabError;
pub use extension::PrayerDateExt;
pub use qibla::{KAABA, qibla};
pub use schedule::{
    ClockProvider, FixedClock, SystemClock, build_schedule, next_prayer_with_rollover,
    time_remaining,
};
pub use types::{
    CompassPoint, GeoCoordinate, Prayer, PrayerSchedule, PrayerTimeEntry, QiblaResult,
};

pub mod prelude {
    pub use crate::error::MihrabError;
    pub use crate::extension::PrayerDateExt;
    pub use crate::i18n::{Language, LocalizedName};
    pub use crate::qibla::{KAABA, qibla};
    pub use crate::schedule::{
        ClockProvider, FixedClock, SystemClock, build_schedule, next_prayer_with_rollover,
        time_remaining,
    };
    pub use crate::types::*;
}

use chrono::NaiveDate;

/// Computes the listed prayer times for a coordinate, defaulting to today on
/// the system clock.
///
/// Coordinates are validated here, at the boundary; the calculators
/// themselves stay permissive.
pub fn calculate_prayer_times(
    latitude: f64,
    longitude: f64,
    date: Option<NaiveDate>,
) -> Result<PrayerSchedule, MihrabError> {
    let coords = GeoCoordinate::new(latitude, longitude)?;
    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
    schedule::build_schedule(date, coords, &SystemClock)
}

/// First upcoming entry of `schedule`, judged against `now_millis` or the
/// system clock.
pub fn get_next_prayer(
    schedule: &PrayerSchedule,
    now_millis: Option<i64>,
) -> Option<&PrayerTimeEntry> {
    let now = now_millis.unwrap_or_else(|| SystemClock.now_millis());
    schedule.next_prayer(now)
}

/// `HH:MM:SS` countdown to `next`, judged against `now_millis` or the system
/// clock.
pub fn get_time_until_next_prayer(next: Option<&PrayerTimeEntry>, now_millis: Option<i64>) -> String {
    let now = now_millis.unwrap_or_else(|| SystemClock.now_millis());
    schedule::time_remaining(next, now)
}

/// Qibla bearing in degrees, one decimal place.
pub fn calculate_qibla_direction(latitude: f64, longitude: f64) -> Result<f64, MihrabError> {
    Ok(qibla::bearing(GeoCoordinate::new(latitude, longitude)?))
}

/// 16-point compass label for a bearing.
pub fn get_qibla_compass_direction(bearing: f64) -> CompassPoint {
    CompassPoint::from_bearing(bearing)
}

/// Whole-kilometre great-circle distance to the Kaaba.
pub fn get_distance_to_kaaba(latitude: f64, longitude: f64) -> Result<u32, MihrabError> {
    Ok(qibla::distance_km(GeoCoordinate::new(latitude, longitude)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_validates_at_the_boundary() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert!(matches!(
            calculate_prayer_times(91.0, 0.0, Some(date)),
            Err(MihrabError::InvalidCoordinate { .. })
        ));
        assert!(calculate_qibla_direction(123.0, 500.0).is_err());
        assert!(get_distance_to_kaaba(0.0, 181.0).is_err());
    }

    #[test]
    fn test_facade_happy_path() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let schedule = calculate_prayer_times(36.1911, 44.0093, Some(date)).unwrap();
        assert_eq!(schedule.entries().len(), 5);

        assert_eq!(calculate_qibla_direction(36.1911, 44.0093).unwrap(), 195.0);
        assert_eq!(
            get_qibla_compass_direction(195.0),
            CompassPoint::Ssw
        );
        assert_eq!(get_distance_to_kaaba(21.4225, 39.8262).unwrap(), 0);
    }

    #[test]
    fn test_next_prayer_and_countdown_with_explicit_now() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let schedule = calculate_prayer_times(36.1911, 44.0093, Some(date)).unwrap();

        // One minute before the day's first entry.
        let now = schedule.fajr().epoch_millis - 60_000;
        let next = get_next_prayer(&schedule, Some(now)).unwrap();
        assert_eq!(next.prayer, Prayer::Fajr);
        assert_eq!(get_time_until_next_prayer(Some(next), Some(now)), "00:01:00");

        // After the last entry the day is exhausted.
        let exhausted = schedule.entries().last().unwrap().epoch_millis + 1;
        assert!(get_next_prayer(&schedule, Some(exhausted)).is_none());
        assert_eq!(get_time_until_next_prayer(None, Some(exhausted)), "00:00:00");
    }
}
