//! Prints the Qibla bearing, compass point, and distance for a handful of
//! cities.

use mihrab::prelude::*;

fn main() {
    let cities = [
        ("Erbil", 36.1911, 44.0093),
        ("Jakarta", -6.2088, 106.8456),
        ("London", 51.5074, -0.1278),
        ("New York", 40.7128, -74.0060),
        ("Tokyo", 35.6895, 139.6917),
        ("Cairo", 30.0444, 31.2357),
        ("Mecca", 21.4225, 39.8262),
    ];

    println!(
        "{:<12} | {:>8} | {:<7} | {:>9}",
        "CITY", "BEARING", "COMPASS", "DISTANCE"
    );
    println!("{:-<46}", "");

    for (name, lat, lng) in cities {
        match GeoCoordinate::new(lat, lng) {
            Ok(coords) => {
                let result = qibla(coords);
                println!(
                    "{:<12} | {:>7}° | {:<7} | {:>6} km",
                    name, result.bearing, result.compass, result.distance_km
                );
            }
            Err(err) => println!("{name:<12} | {err}"),
        }
    }
}
