//! Human-readable relative time
//!
//! Formats the elapsed time between two instants as "3 days ago" style
//! strings, with the usual humanized thresholds (45 s, 90 s, 45 min,
//! 90 min, 22 h, 36 h, 26 d, 45 d, 11 months).

use chrono::{DateTime, Utc};

/// Format the time elapsed from `then` to `now`
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds().max(0);
    let minutes = (seconds + 30) / 60;
    let hours = (seconds + 1800) / 3600;
    let days = (seconds + 43200) / 86400;
    let months = (days * 10 + 150) / 304; // ~30.4 days per month
    let years = (days * 10 + 1825) / 3650;

    if seconds < 45 {
        "a few seconds ago".to_string()
    } else if seconds < 90 {
        "a minute ago".to_string()
    } else if minutes < 45 {
        format!("{minutes} minutes ago")
    } else if minutes < 90 {
        "an hour ago".to_string()
    } else if hours < 22 {
        format!("{hours} hours ago")
    } else if hours < 36 {
        "a day ago".to_string()
    } else if days < 26 {
        format!("{days} days ago")
    } else if days < 46 {
        "a month ago".to_string()
    } else if months < 11 {
        format!("{months} months ago")
    } else if days < 548 {
        "a year ago".to_string()
    } else {
        format!("{years} years ago")
    }
}
