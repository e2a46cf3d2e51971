//! Prints today's prayer schedule for Erbil with localized names, the Hijri
//! date, and the countdown to the next prayer.

use chrono::Local;
use mihrab::prelude::*;

fn main() -> anyhow::Result<()> {
    let erbil = GeoCoordinate::new(36.1911, 44.0093)?;
    let today = Local::now().date_naive();

    let schedule = build_schedule(today, erbil, &SystemClock)?;

    println!("Prayer times for Erbil ({erbil})");
    println!("{}", today.format("%A, %d %B %Y"));
    if let Ok(hijri) = today.hijri() {
        println!("{hijri}");
    }
    println!("{:-<52}", "");

    for entry in schedule.entries() {
        let names = entry.names();
        println!(
            "{:<10} {:<6} {:<10} {:<12} {}",
            names.english,
            entry.time,
            entry.time_12h(),
            names.arabic,
            names.kurdish
        );
    }
    println!("{:-<52}", "");
    println!("Sunrise    {}", schedule.sunrise().time);

    let next = next_prayer_with_rollover(today, erbil, &SystemClock)?;
    let now = SystemClock.now_millis();
    println!(
        "Next: {} at {} (in {})",
        next.prayer,
        next.time,
        time_remaining(Some(&next), now)
    );

    Ok(())
}
