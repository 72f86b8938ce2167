use chrono::Weekday;

/// Day-of-week modifier. Friday and Saturday nights push toward
/// Neon/Chaos; all other times contribute nothing.
pub fn calculate(day: Weekday, hour: u32) -> f64 {
    let weekend_night = matches!(day, Weekday::Fri | Weekday::Sat) && (hour >= 18 || hour < 6);
    if weekend_night {
        0.5
    } else {
        0.0
    }
}
