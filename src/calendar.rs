//! Hijri calendar display conversion.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use hijri_date::HijriDate;
use serde::Serialize;

use crate::error::MihrabError;

/// Minimum Gregorian year supported by the Hijri conversion.
pub const HIJRI_MIN_YEAR: i32 = 1938;
/// Maximum Gregorian year supported by the Hijri conversion.
pub const HIJRI_MAX_YEAR: i32 = 2076;

/// A Hijri date prepared for display alongside a prayer schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HijriDisplay {
    pub day: usize,
    /// Hijri month number, 1 (Muharram) through 12 (Dhu al-Hijjah).
    pub month: usize,
    pub year: usize,
}

impl HijriDisplay {
    pub fn month_name(&self) -> &'static str {
        hijri_month_name(self.month)
    }
}

impl fmt::Display for HijriDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} AH", self.day, self.month_name(), self.year)
    }
}

/// Converts a Gregorian date to its Hijri display form.
///
/// # Errors
/// Returns `DateOutOfRange` outside 1938-2076.
pub fn hijri_display(date: NaiveDate) -> Result<HijriDisplay, MihrabError> {
    if date.year() < HIJRI_MIN_YEAR || date.year() > HIJRI_MAX_YEAR {
        return Err(MihrabError::date_out_of_range(date));
    }

    let hijri = HijriDate::from_gr(
        date.year() as usize,
        date.month() as usize,
        date.day() as usize,
    )
    .map_err(|_| MihrabError::date_out_of_range(date))?;

    Ok(HijriDisplay {
        day: hijri.day(),
        month: hijri.month(),
        year: hijri.year(),
    })
}

/// Returns the Hijri month name.
pub fn hijri_month_name(month: usize) -> &'static str {
    match month {
        1 => "Muharram",
        2 => "Safar",
        3 => "Rabi' al-Awwal",
        4 => "Rabi' al-Thani",
        5 => "Jumada al-Ula",
        6 => "Jumada al-Akhirah",
        7 => "Rajab",
        8 => "Sha'ban",
        9 => "Ramadhan",
        10 => "Shawwal",
        11 => "Dhu al-Qi'dah",
        12 => "Dhu al-Hijjah",
        _ => "Unknown",
    }
}
