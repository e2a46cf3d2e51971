use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::MihrabError;
use crate::i18n::{Language, LocalizedName};

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate, rejecting values outside [-90, 90] latitude or
    /// [-180, 180] longitude.
    pub fn new(lat: f64, lng: f64) -> Result<Self, MihrabError> {
        let coords = Self { lat, lng };
        if coords.is_valid() {
            Ok(coords)
        } else {
            Err(MihrabError::invalid_coordinate(lat, lng))
        }
    }

    /// Creates a coordinate without range validation.
    ///
    /// The solar formulas are permissive and accept any finite input;
    /// out-of-range latitudes typically surface later as `PolarRegion`
    /// errors rather than being rejected up front.
    pub fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.lat, self.lng)
    }
}

/// The six daily solar events.
///
/// `Sunrise` is computed and retained as an internal artifact of the solar
/// day; it is not part of the prayer list exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// All six events in chronological label order.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// The five prayers exposed to callers, with Sunrise filtered out.
    pub const LISTED: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn is_listed(&self) -> bool {
        !matches!(self, Prayer::Sunrise)
    }

    /// English/Arabic/Kurdish display names.
    pub fn names(&self) -> LocalizedName {
        crate::i18n::names(*self)
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().english)
    }
}

/// A single computed prayer time on one date.
///
/// Entries are never mutated after construction; a new schedule is built per
/// day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerTimeEntry {
    pub prayer: Prayer,
    /// Local wall-clock time as `HH:MM`.
    pub time: String,
    /// Absolute timestamp of the event, milliseconds since the Unix epoch.
    pub epoch_millis: i64,
    /// Whether the event lies before the clock reading the schedule was
    /// built with.
    pub has_passed: bool,
}

impl PrayerTimeEntry {
    pub fn names(&self) -> LocalizedName {
        self.prayer.names()
    }

    pub fn name_in(&self, language: Language) -> &'static str {
        self.names().in_language(language)
    }

    /// 12-hour rendering of [`time`](Self::time), e.g. `"3:34 PM"`.
    pub fn time_12h(&self) -> String {
        let (h, m) = match self.time.split_once(':') {
            Some((h, m)) => (h.parse().unwrap_or(0u32), m.parse().unwrap_or(0u32)),
            None => (0, 0),
        };
        let suffix = if h < 12 { "AM" } else { "PM" };
        let h12 = match h % 12 {
            0 => 12,
            other => other,
        };
        format!("{h12}:{m:02} {suffix}")
    }
}

/// One date's ordered prayer times, Fajr through Isha.
///
/// Sunrise is carried separately and never appears in the listed entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerSchedule {
    pub date: NaiveDate,
    pub(crate) entries: SmallVec<[PrayerTimeEntry; 5]>,
    pub(crate) sunrise: PrayerTimeEntry,
}

impl PrayerSchedule {
    /// The listed entries in chronological label order.
    pub fn entries(&self) -> &[PrayerTimeEntry] {
        &self.entries
    }

    /// The internally retained sunrise artifact.
    pub fn sunrise(&self) -> &PrayerTimeEntry {
        &self.sunrise
    }

    /// The first listed entry (Fajr).
    pub fn fajr(&self) -> &PrayerTimeEntry {
        &self.entries[0]
    }

    /// First entry strictly after `now_millis`, or `None` once every prayer
    /// of the day has passed.
    pub fn next_prayer(&self, now_millis: i64) -> Option<&PrayerTimeEntry> {
        self.entries.iter().find(|e| e.epoch_millis > now_millis)
    }
}

/// The 16-point compass rose, one point per 22.5 degrees, clockwise from
/// north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompassPoint {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl CompassPoint {
    /// The rose in clockwise order starting at north.
    pub const ROSE: [CompassPoint; 16] = [
        CompassPoint::N,
        CompassPoint::Nne,
        CompassPoint::Ne,
        CompassPoint::Ene,
        CompassPoint::E,
        CompassPoint::Ese,
        CompassPoint::Se,
        CompassPoint::Sse,
        CompassPoint::S,
        CompassPoint::Ssw,
        CompassPoint::Sw,
        CompassPoint::Wsw,
        CompassPoint::W,
        CompassPoint::Wnw,
        CompassPoint::Nw,
        CompassPoint::Nnw,
    ];

    /// Buckets a bearing (degrees) into its nearest compass point, wrapping
    /// at 360°/0°.
    pub fn from_bearing(bearing: f64) -> Self {
        let index = (bearing.rem_euclid(360.0) / 22.5).round() as usize % 16;
        Self::ROSE[index]
    }

    /// Standard abbreviation, e.g. `"SSW"`.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::Nne => "NNE",
            CompassPoint::Ne => "NE",
            CompassPoint::Ene => "ENE",
            CompassPoint::E => "E",
            CompassPoint::Ese => "ESE",
            CompassPoint::Se => "SE",
            CompassPoint::Sse => "SSE",
            CompassPoint::S => "S",
            CompassPoint::Ssw => "SSW",
            CompassPoint::Sw => "SW",
            CompassPoint::Wsw => "WSW",
            CompassPoint::W => "W",
            CompassPoint::Wnw => "WNW",
            CompassPoint::Nw => "NW",
            CompassPoint::Nnw => "NNW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Qibla bearing, compass label, and distance for one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QiblaResult {
    /// Initial great-circle bearing toward the Kaaba, degrees in [0, 360),
    /// one decimal place.
    pub bearing: f64,
    pub compass: CompassPoint,
    /// Great-circle distance to the Kaaba in whole kilometres.
    pub distance_km: u32,
}
