//! Time utilities: time-of-day parsing and `HH:MM:SS` formatting.

use chrono::{Duration, NaiveTime};

/// Parse a server time of day: `HH:MM`, `HH:MM:SS` or `HH:MM:SS.ffffff`.
pub fn parse_time_of_day(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Format a duration as zero-padded `HH:MM:SS`; negatives clamp to zero.
/// Hours are not wrapped at 24.
pub fn format_hms(d: Duration) -> String {
    let secs = d.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Server totals come as `HH:MM:SS.ffffff`; keep `HH:MM:SS`.
pub fn trim_total_hours(total: Option<&str>) -> String {
    let Some(total) = total.map(str::trim).filter(|t| !t.is_empty()) else {
        return "00:00:00".to_string();
    };
    let mut parts = total.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(m), Some(s)) => {
            let s = s.split('.').next().unwrap_or("00");
            format!("{h}:{m}:{s}")
        }
        (Some(h), Some(m), None) => format!("{h}:{m}:00"),
        _ => "00:00:00".to_string(),
    }
}
