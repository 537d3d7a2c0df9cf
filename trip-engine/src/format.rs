//! Presentation helpers for machine units.
//!
//! The engines deal strictly in metres and minutes; these helpers
//! give hosts ready-made short strings for labels and list rows.
//! Anything fancier (localisation, unit preferences) belongs to the
//! host.

/// Format a distance for display.
///
/// Under a kilometre the value shows in whole metres; under ten
/// kilometres with one decimal; beyond that in whole kilometres.
/// Negative input clamps to zero.
///
/// # Examples
///
/// ```
/// use trip_engine::format::format_distance;
///
/// assert_eq!(format_distance(734.0), "734 m");
/// assert_eq!(format_distance(2001.5), "2.0 km");
/// assert_eq!(format_distance(15_000.0), "15 km");
/// ```
pub fn format_distance(meters: f64) -> String {
    let meters = meters.max(0.0);
    let rounded = meters.round();
    if rounded < 1000.0 {
        return format!("{rounded:.0} m");
    }
    let km = meters / 1000.0;
    if km < 10.0 {
        format!("{km:.1} km")
    } else {
        format!("{km:.0} km")
    }
}

/// Format a walking time for display.
///
/// Under an hour the value shows in minutes; whole hours drop the
/// minute part. Negative input clamps to zero.
///
/// # Examples
///
/// ```
/// use trip_engine::format::format_walk_minutes;
///
/// assert_eq!(format_walk_minutes(45), "45 min");
/// assert_eq!(format_walk_minutes(60), "1 h");
/// assert_eq!(format_walk_minutes(95), "1 h 35 min");
/// ```
pub fn format_walk_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{hours} h")
    } else {
        format!("{hours} h {rest} min")
    }
}
