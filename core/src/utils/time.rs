use chrono::{DateTime, FixedOffset, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Seconds between 1970-01-01 and 2001-01-01 (Apple Cocoa/Core Data reference date)
pub(crate) const COCOA_EPOCH_OFFSET: i64 = 978307200;

/// Layout used for every rendered timestamp in report tables
pub(crate) const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Return time now in seconds or 0
pub(crate) fn time_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::new(0, 0))
        .as_secs()
}

/// Convert macOS/iOS Cocoa timestamp to unixepoch. Fractional seconds are dropped.
/// Values outside the `i64` range saturate
pub(crate) fn cocoatime_to_unixepoch(cocoatime: &f64) -> i64 {
    (cocoatime.floor() + COCOA_EPOCH_OFFSET as f64) as i64
}

/// Render unixepoch seconds in the provided time zone. Out of range values return an empty string
pub(crate) fn unixepoch_to_display(timestamp: i64, timezone: &FixedOffset) -> String {
    match DateTime::<Utc>::from_timestamp(timestamp, 0) {
        Some(result) => result
            .with_timezone(timezone)
            .format(DISPLAY_FORMAT)
            .to_string(),
        None => String::new(),
    }
}

/// Convert a Cocoa timestamp straight to its display form. NaN, infinite and out of range values return an empty string
pub(crate) fn cocoatime_to_display(cocoatime: &f64, timezone: &FixedOffset) -> String {
    if !cocoatime.is_finite() {
        return String::new();
    }
    unixepoch_to_display(cocoatime_to_unixepoch(cocoatime), timezone)
}

/// Parse a time zone setting. Supports `UTC`/`Z` or a fixed offset such as `+02:00` or `-0530`
pub(crate) fn parse_timezone(value: &str) -> Option<FixedOffset> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match trimmed.chars().next()? {
        '+' => (1, &trimmed[1..]),
        '-' => (-1, &trimmed[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|value| *value != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|value| value.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[0..2].parse().ok()?;
    let mins: i32 = digits[2..4].parse().ok()?;
    if hours > 23 || mins > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + mins * 60))
}
