//! Relative-time phrasing for spans ("an hour", "3 days", ...)

/// Render a span as a rough human phrase. The sign is ignored.
pub fn humanize_millis(millis: i64) -> String {
    let seconds = (millis.unsigned_abs() as f64 / 1000.0).round();
    let minutes = (seconds / 60.0).round();
    let hours = (minutes / 60.0).round();
    let days = (hours / 24.0).round();
    let months = (days / 30.4375).round();
    let years = (days / 365.25).round();

    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if seconds < 90.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{minutes} minutes")
    } else if minutes < 90.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{hours} hours")
    } else if hours < 36.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{days} days")
    } else if days < 45.0 {
        "a month".to_string()
    } else if days < 320.0 {
        format!("{months} months")
    } else if days < 548.0 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}
