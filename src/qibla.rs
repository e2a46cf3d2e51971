//! Qibla bearing and distance.
//!
//! Initial great-circle bearing from any coordinate toward the Kaaba, the
//! matching 16-point compass label, and the haversine distance.

use crate::types::{CompassPoint, GeoCoordinate, QiblaResult};

/// Coordinates of the Kaaba in Mecca.
pub const KAABA: GeoCoordinate = GeoCoordinate {
    lat: 21.4225,
    lng: 39.8262,
};

/// Mean Earth radius, kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Initial great-circle bearing from `coords` toward the Kaaba, in degrees
/// normalized into [0, 360) and rounded to one decimal place.
///
/// Defined for every coordinate pair; the value is numerically unstable only
/// at the exact poles and at the Kaaba's antipode.
pub fn bearing(coords: GeoCoordinate) -> f64 {
    let lat1 = coords.lat.to_radians();
    let lat2 = KAABA.lat.to_radians();
    let d_lng = (KAABA.lng - coords.lng).to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    let degrees = y.atan2(x).to_degrees().rem_euclid(360.0);

    // Rounding can land exactly on 360.0; fold it back to 0.
    ((degrees * 10.0).round() / 10.0).rem_euclid(360.0)
}

/// Great-circle haversine distance from `coords` to the Kaaba, in whole
/// kilometres.
pub fn distance_km(coords: GeoCoordinate) -> u32 {
    let lat1 = coords.lat.to_radians();
    let lat2 = KAABA.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lng = (KAABA.lng - coords.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_KM * c).round() as u32
}

/// Bearing, compass point, and distance in one result.
pub fn qibla(coords: GeoCoordinate) -> QiblaResult {
    let direction = bearing(coords);
    QiblaResult {
        bearing: direction,
        compass: CompassPoint::from_bearing(direction),
        distance_km: distance_km(coords),
    }
}
