//! Time utilities: parsing HH:MM, formatting durations.

use chrono::{Duration, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Format a duration as "8h 30m".
pub fn format_duration(d: Duration) -> String {
    let mins = d.num_minutes();
    format!("{}h {}m", mins / 60, mins % 60)
}

/// Placeholder shown when a worked duration cannot be computed.
pub const DURATION_UNAVAILABLE: &str = "n/a";
