//! Relative age labels ("5m ago", "3h ago", "2d ago").

use chrono::{DateTime, Utc};

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1440;

/// Renders the whole-minute age of `timestamp` relative to `now`.
///
/// Timestamps in the future clamp to `"0m ago"`.
pub fn relative_age(now: DateTime<Utc>, timestamp: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes().max(0);
    if minutes < MINUTES_PER_HOUR {
        format!("{minutes}m ago")
    } else if minutes < MINUTES_PER_DAY {
        format!("{}h ago", minutes / MINUTES_PER_HOUR)
    } else {
        format!("{}d ago", minutes / MINUTES_PER_DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn label(minutes: i64) -> String {
        let ts = Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap();
        relative_age(ts + Duration::minutes(minutes), ts)
    }

    #[test]
    fn boundaries() {
        assert_eq!(label(0), "0m ago");
        assert_eq!(label(59), "59m ago");
        assert_eq!(label(60), "1h ago");
        assert_eq!(label(1439), "23h ago");
        assert_eq!(label(1440), "1d ago");
        assert_eq!(label(1440 * 9 + 30), "9d ago");
    }

    #[test]
    fn partial_minutes_floor() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_age(ts + Duration::seconds(119), ts), "1m ago");
    }

    #[test]
    fn future_timestamp_clamps() {
        assert_eq!(label(-5), "0m ago");
    }
}
