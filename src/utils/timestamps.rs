use chrono::{DateTime, Datelike, Local, Utc};

/// Split an upload timestamp into local date and time columns ("2024-01-05", "14:03:27")
pub fn format_upload_date(timestamp: &DateTime<Utc>) -> (String, String) {
    let local = timestamp.with_timezone(&Local);
    (local.format("%Y-%m-%d").to_string(), local.format("%H:%M:%S").to_string())
}

/// Format timestamp with tiered display:
/// - Relative for <7 days: "2h ago", "3d ago"
/// - Absolute for ≥7 days: "Jan 15", "Dec 3, 2024"
pub fn format_age(timestamp: &DateTime<Utc>) -> String {
    format_age_at(timestamp, &Utc::now())
}

fn format_age_at(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*timestamp);

    if duration.num_days() < 7 {
        format_relative(duration.num_seconds())
    } else if timestamp.year() == now.year() {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}

fn format_relative(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}
