use chrono::{Duration, NaiveDate};
use mihrab::astronomy::solar;
use mihrab::prelude::*;
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

proptest! {
    /// The solar calculator never panics anywhere in the coordinate/date
    /// domain; it returns a day or a typed polar error.
    #[test]
    fn no_panic_solar_domain(
        days in 0i32..36_500,
        lat in -90.0f64..90.0,
        lng in -180.0f64..180.0,
    ) {
        let date = base_date() + Duration::days(i64::from(days));
        let _ = solar::solar_day(date, GeoCoordinate::new_unchecked(lat, lng));
    }

    /// At temperate latitudes every event resolves and the decimal hours are
    /// strictly ordered through the day.
    #[test]
    fn temperate_event_ordering(
        days in 0i32..3_650,
        lat in -45.0f64..45.0,
        lng in -180.0f64..180.0,
    ) {
        let date = base_date() + Duration::days(i64::from(days));
        let day = solar::solar_day(date, GeoCoordinate::new_unchecked(lat, lng)).unwrap();

        prop_assert!(day.fajr < day.sunrise);
        prop_assert!(day.sunrise < day.dhuhr);
        prop_assert!(day.dhuhr < day.asr);
        prop_assert!(day.asr < day.maghrib);
        prop_assert!(day.maghrib < day.isha);

        // Solar noon never strays past the equation-of-time envelope, and
        // the whole day stays inside 24 hours of its midnight.
        prop_assert!(day.dhuhr > 11.0 && day.dhuhr < 13.0);
        prop_assert!(day.fajr > 0.0 && day.isha < 24.0);
    }

    /// Schedule epochs increase monotonically whenever the day resolves.
    #[test]
    fn schedule_epochs_increase(
        days in 0i32..3_650,
        lat in -45.0f64..45.0,
        lng in -180.0f64..180.0,
    ) {
        let date = base_date() + Duration::days(i64::from(days));
        let clock = FixedClock::new(0, 0.0);
        let schedule =
            build_schedule(date, GeoCoordinate::new_unchecked(lat, lng), &clock).unwrap();

        let epochs: Vec<i64> = schedule.entries().iter().map(|e| e.epoch_millis).collect();
        prop_assert!(epochs.windows(2).all(|w| w[0] < w[1]));
    }

    /// Bearings always land in [0, 360) with one-decimal granularity.
    #[test]
    fn bearing_range_and_granularity(lat in -90.0f64..90.0, lng in -180.0f64..180.0) {
        let bearing = mihrab::qibla::bearing(GeoCoordinate::new_unchecked(lat, lng));
        prop_assert!((0.0..360.0).contains(&bearing));

        let scaled = bearing * 10.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    /// No point on Earth is farther than half the circumference.
    #[test]
    fn distance_bounded_by_half_circumference(lat in -90.0f64..90.0, lng in -180.0f64..180.0) {
        let km = mihrab::qibla::distance_km(GeoCoordinate::new_unchecked(lat, lng));
        prop_assert!(km <= 20_016);
    }

    /// Compass bucketing is total and stable under a full-turn wrap.
    #[test]
    fn compass_total_and_periodic(bearing in -720.0f64..720.0) {
        let point = CompassPoint::from_bearing(bearing);
        prop_assert_eq!(point, CompassPoint::from_bearing(bearing + 360.0));
        prop_assert!(CompassPoint::ROSE.contains(&point));
    }

    /// Away from the Kaaba and its antipode the bearing varies continuously:
    /// a hundredth of a degree of longitude moves it by less than a degree.
    #[test]
    fn bearing_continuity(lat in -60.0f64..60.0, lng in -180.0f64..180.0) {
        let here = GeoCoordinate::new_unchecked(lat, lng);
        let km = mihrab::qibla::distance_km(here);
        prop_assume!(km > 1_000 && km < 19_000);

        let nudged = GeoCoordinate::new_unchecked(lat, lng + 0.01);
        let a = mihrab::qibla::bearing(here);
        let b = mihrab::qibla::bearing(nudged);

        let delta = (a - b).abs();
        let delta = delta.min(360.0 - delta);
        prop_assert!(delta < 1.0, "bearing jumped by {delta}");
    }

    /// The countdown is always zero-padded `HH:MM:SS`, and zero whenever the
    /// gap is not positive.
    #[test]
    fn countdown_shape(gap in -100_000_000i64..100_000_000) {
        let entry = PrayerTimeEntry {
            prayer: Prayer::Dhuhr,
            time: "12:00".to_string(),
            epoch_millis: gap,
            has_passed: gap < 0,
        };
        let formatted = time_remaining(Some(&entry), 0);

        let parts: Vec<&str> = formatted.split(':').collect();
        prop_assert_eq!(parts.len(), 3);
        prop_assert!(parts.iter().all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_digit())));

        if gap <= 0 {
            prop_assert_eq!(formatted, "00:00:00");
        }
    }
}
