//! Prayer schedule assembly.
//!
//! Wraps the solar calculator output into the externally consumed list:
//! ordered, labeled entries with epoch timestamps, plus the next-prayer and
//! countdown derivations. All wall-clock access goes through
//! [`ClockProvider`], so schedules are deterministic under test.

use chrono::{Duration, NaiveDate};
use smallvec::SmallVec;

use crate::astronomy::solar;
use crate::error::MihrabError;
use crate::types::{GeoCoordinate, Prayer, PrayerSchedule, PrayerTimeEntry};

/// Wall clock and UTC offset source for schedule construction.
pub trait ClockProvider {
    /// Current instant, milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Offset from UTC applied to computed event hours, in hours.
    fn utc_offset_hours(&self) -> f64;
}

/// Reads the ambient system clock and the device timezone.
///
/// The offset is the device's, not the target location's; callers building
/// schedules for remote coordinates should supply a [`FixedClock`] carrying
/// the location's offset instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockProvider for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Local::now().timestamp_millis()
    }

    fn utc_offset_hours(&self) -> f64 {
        f64::from(chrono::Local::now().offset().local_minus_utc()) / 3600.0
    }
}

/// Fixed instant and offset, for reproducible schedules and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now_millis: i64,
    utc_offset_hours: f64,
}

impl FixedClock {
    pub fn new(now_millis: i64, utc_offset_hours: f64) -> Self {
        Self {
            now_millis,
            utc_offset_hours,
        }
    }
}

impl ClockProvider for FixedClock {
    fn now_millis(&self) -> i64 {
        self.now_millis
    }

    fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }
}

/// Builds the prayer schedule for one date.
///
/// Sunrise is computed and retained on the schedule but excluded from the
/// listed entries. `has_passed` is judged against the clock's current
/// instant with a strict comparison.
///
/// # Errors
/// Propagates [`MihrabError::PolarRegion`] from the solar calculator.
pub fn build_schedule(
    date: NaiveDate,
    coords: GeoCoordinate,
    clock: &impl ClockProvider,
) -> Result<PrayerSchedule, MihrabError> {
    let day = solar::solar_day(date, coords)?;
    let now = clock.now_millis();
    let offset_hours = clock.utc_offset_hours();

    let sunrise = entry_for(Prayer::Sunrise, day.sunrise, date, offset_hours, now);
    let entries: SmallVec<[PrayerTimeEntry; 5]> = Prayer::LISTED
        .into_iter()
        .map(|prayer| entry_for(prayer, day.event(prayer), date, offset_hours, now))
        .collect();

    Ok(PrayerSchedule {
        date,
        entries,
        sunrise,
    })
}

/// Next upcoming prayer, rolling over to tomorrow's Fajr once every entry
/// for `date` has passed.
pub fn next_prayer_with_rollover(
    date: NaiveDate,
    coords: GeoCoordinate,
    clock: &impl ClockProvider,
) -> Result<PrayerTimeEntry, MihrabError> {
    let today = build_schedule(date, coords, clock)?;
    if let Some(entry) = today.next_prayer(clock.now_millis()) {
        return Ok(entry.clone());
    }

    let tomorrow = build_schedule(date + Duration::days(1), coords, clock)?;
    Ok(tomorrow.fajr().clone())
}

/// Formats the gap between `now_millis` and the next entry as `HH:MM:SS`.
///
/// Returns `"00:00:00"` when there is no next entry or it has already
/// passed.
pub fn time_remaining(next: Option<&PrayerTimeEntry>, now_millis: i64) -> String {
    let Some(entry) = next else {
        return "00:00:00".to_string();
    };

    let diff = entry.epoch_millis - now_millis;
    if diff <= 0 {
        return "00:00:00".to_string();
    }

    let hours = diff / 3_600_000;
    let minutes = diff % 3_600_000 / 60_000;
    let seconds = diff % 60_000 / 1_000;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

fn entry_for(
    prayer: Prayer,
    decimal_hour: f64,
    date: NaiveDate,
    offset_hours: f64,
    now_millis: i64,
) -> PrayerTimeEntry {
    // Wrap the offset-adjusted hour into [0, 24) and floor to the minute.
    let minutes_of_day =
        ((decimal_hour + offset_hours).rem_euclid(24.0) * 60.0).floor() as u32 % 1440;
    let hours = minutes_of_day / 60;
    let minutes = minutes_of_day % 60;

    let epoch_millis = epoch_of(date, hours, minutes, offset_hours);
    PrayerTimeEntry {
        prayer,
        time: format!("{hours:02}:{minutes:02}"),
        epoch_millis,
        has_passed: epoch_millis < now_millis,
    }
}

/// Absolute timestamp of `HH:MM` on `date` at the given UTC offset.
fn epoch_of(date: NaiveDate, hours: u32, minutes: u32, offset_hours: f64) -> i64 {
    let offset_millis = (offset_hours * 3_600_000.0).round() as i64;
    // hours/minutes are bounded by construction, so this cannot fail.
    let wall = date.and_hms_opt(hours, minutes, 0).unwrap();
    wall.and_utc().timestamp_millis() - offset_millis
}
