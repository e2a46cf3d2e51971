//! Solar Event Calculation Module.
//!
//! Derives the six daily events (Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha)
//! from a calendar date and geographic coordinates using the closed-form
//! solar-position method: civil Julian day, solar declination, equation of
//! time, and the hour angle at each event's altitude threshold.

use std::cell::RefCell;

use chrono::{Datelike, NaiveDate};

use crate::error::MihrabError;
use crate::types::{GeoCoordinate, Prayer};

/// Julian day of the J2000.0 epoch.
const J2000: f64 = 2_451_545.0;

/// Mean obliquity of the ecliptic, degrees.
const OBLIQUITY_DEG: f64 = 23.439;

/// Dawn twilight altitude, degrees below the horizon.
pub const FAJR_ANGLE: f64 = -18.0;

/// Apparent sunrise/sunset altitude (atmospheric refraction plus the solar
/// semi-diameter).
pub const HORIZON_ANGLE: f64 = -0.833;

/// Evening twilight altitude, degrees below the horizon.
pub const ISHA_ANGLE: f64 = -17.0;

/// The six events of one solar day, as decimal hours of local mean time
/// before any UTC-offset adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub maghrib: f64,
    pub isha: f64,
}

impl SolarDay {
    /// Decimal hour of a single event.
    pub fn event(&self, prayer: Prayer) -> f64 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }
}

// Single-slot memo: last (date, coords) -> SolarDay.
thread_local! {
    static SOLAR_MEMO: RefCell<Option<(NaiveDate, GeoCoordinate, SolarDay)>> =
        const { RefCell::new(None) };
}

/// Computes the solar events for `date` at `coords`.
///
/// Inputs are taken as given; coordinate ranges are validated at the public
/// boundary (`GeoCoordinate::new`), not here. At latitudes and dates where
/// the sun never crosses an event's altitude (polar day or night), the first
/// unresolvable event is reported as [`MihrabError::PolarRegion`].
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use mihrab::astronomy::solar::solar_day;
/// use mihrab::types::GeoCoordinate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
/// let erbil = GeoCoordinate::new(36.1911, 44.0093)?;
///
/// let day = solar_day(date, erbil)?;
/// assert!(day.fajr < day.sunrise && day.sunrise < day.dhuhr);
/// assert!(day.dhuhr < day.asr && day.asr < day.maghrib && day.maghrib < day.isha);
/// # Ok::<(), mihrab::MihrabError>(())
/// ```
pub fn solar_day(date: NaiveDate, coords: GeoCoordinate) -> Result<SolarDay, MihrabError> {
    let memo = SOLAR_MEMO.with(|slot| {
        slot.borrow().as_ref().and_then(|(d, c, day)| {
            if *d == date && *c == coords {
                Some(*day)
            } else {
                None
            }
        })
    });
    if let Some(day) = memo {
        return Ok(day);
    }

    // Longitude-shifted Julian day for the declination and
    // equation-of-time lookups.
    let jd = julian_day(date) - coords.lng / (15.0 * 24.0);
    let n = jd - J2000;
    let decl = declination(n);
    let lat = coords.lat.to_radians();

    let noon = 12.0 - equation_of_time(n) / 60.0;
    let event = |prayer: Prayer, altitude: f64| -> Result<f64, MihrabError> {
        let ha = hour_angle(altitude, decl, lat)
            .ok_or_else(|| MihrabError::polar_region(prayer, date, coords.lat))?;
        Ok(match prayer {
            Prayer::Fajr | Prayer::Sunrise => noon - ha,
            _ => noon + ha,
        })
    };

    let day = SolarDay {
        fajr: event(Prayer::Fajr, FAJR_ANGLE.to_radians())?,
        sunrise: event(Prayer::Sunrise, HORIZON_ANGLE.to_radians())?,
        dhuhr: noon,
        asr: event(Prayer::Asr, asr_altitude(lat, decl))?,
        maghrib: event(Prayer::Maghrib, HORIZON_ANGLE.to_radians())?,
        isha: event(Prayer::Isha, ISHA_ANGLE.to_radians())?,
    };

    SOLAR_MEMO.with(|slot| *slot.borrow_mut() = Some((date, coords, day)));
    Ok(day)
}

/// Civil Julian day number of a Gregorian date.
pub(crate) fn julian_day(date: NaiveDate) -> f64 {
    let month = i64::from(date.month());
    let a = (14 - month) / 12;
    let y = i64::from(date.year()) - a;
    let m = month + 12 * a - 3;
    let day = i64::from(date.day());

    (day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 + 1_721_119) as f64
}

/// Mean solar longitude, degrees in [0, 360).
fn mean_longitude(n: f64) -> f64 {
    (280.46 + 0.985_647_4 * n).rem_euclid(360.0)
}

/// Mean solar anomaly, radians.
fn mean_anomaly(n: f64) -> f64 {
    (357.528 + 0.985_600_3 * n).rem_euclid(360.0).to_radians()
}

/// Ecliptic longitude of the sun, radians.
fn ecliptic_longitude(n: f64) -> f64 {
    let g = mean_anomaly(n);
    (mean_longitude(n) + 1.915 * g.sin() + 0.02 * (2.0 * g).sin()).to_radians()
}

/// Solar declination, radians.
fn declination(n: f64) -> f64 {
    (OBLIQUITY_DEG.to_radians().sin() * ecliptic_longitude(n).sin()).asin()
}

/// Equation of time in minutes: apparent minus mean solar time.
fn equation_of_time(n: f64) -> f64 {
    let lambda = ecliptic_longitude(n);
    let alpha = f64::atan2(OBLIQUITY_DEG.to_radians().cos() * lambda.sin(), lambda.cos()).to_degrees();

    // Bring the right ascension into the same revolution as the mean
    // longitude before differencing.
    let mut delta = (mean_longitude(n) - alpha).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    4.0 * delta
}

/// Hour angle, in hours, at which the sun crosses `altitude` (radians).
///
/// `None` when the altitude is never reached on that day, i.e. the acos
/// argument leaves [-1, 1].
fn hour_angle(altitude: f64, decl: f64, lat: f64) -> Option<f64> {
    let cos_h = (altitude.sin() - decl.sin() * lat.sin()) / (decl.cos() * lat.cos());
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    Some(cos_h.acos().to_degrees() / 15.0)
}

/// Asr altitude under the one-shadow convention: the moment an object's
/// shadow equals its height plus its shadow at noon. Radians in and out.
fn asr_altitude(lat: f64, decl: f64) -> f64 {
    (1.0 / (1.0 + (lat - decl).abs().tan())).atan()
}
