//! Millisecond timestamps rendered as Beijing time.

use chrono::{DateTime, FixedOffset, Utc};
use thiserror::Error;

/// UTC+08:00. China has not observed daylight saving time since 1991.
const BEIJING_OFFSET_SECS: i32 = 8 * 3600;

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Timestamp {0} ms is out of range")]
    OutOfRange(i64),
    #[error("Invalid UTC offset: {0} seconds")]
    InvalidOffset(i32),
}

/// Milliseconds since the Unix epoch.
pub fn current_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Formats `timestamp_millis` as `yyyy-MM-dd HH:mm:ss` in Beijing time.
pub fn format_beijing_time(timestamp_millis: i64) -> Result<String, TimestampError> {
    let offset = FixedOffset::east_opt(BEIJING_OFFSET_SECS)
        .ok_or(TimestampError::InvalidOffset(BEIJING_OFFSET_SECS))?;
    let utc = DateTime::from_timestamp_millis(timestamp_millis)
        .ok_or(TimestampError::OutOfRange(timestamp_millis))?;

    Ok(utc.with_timezone(&offset).format(FORMAT).to_string())
}

/// The current Beijing time, to the second.
pub fn current_beijing_time() -> Result<String, TimestampError> {
    format_beijing_time(current_timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_eight_am() {
        assert_eq!(format_beijing_time(0), Ok("1970-01-01 08:00:00".to_string()));
    }

    #[test]
    fn test_crosses_midnight() {
        // 2023-11-14 22:13:20 UTC
        assert_eq!(
            format_beijing_time(1_700_000_000_000),
            Ok("2023-11-15 06:13:20".to_string())
        );
    }

    #[test]
    fn test_millis_are_truncated() {
        assert_eq!(
            format_beijing_time(999),
            Ok("1970-01-01 08:00:00".to_string())
        );
    }

    #[test]
    fn test_before_epoch() {
        assert_eq!(
            format_beijing_time(-1_000),
            Ok("1970-01-01 07:59:59".to_string())
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            format_beijing_time(i64::MAX),
            Err(TimestampError::OutOfRange(i64::MAX))
        );
    }

    #[test]
    fn test_current_time_shape() {
        let now = current_beijing_time().expect("now is in range");
        assert_eq!(now.len(), 19);
        assert_eq!(&now[4..5], "-");
        assert_eq!(&now[10..11], " ");
        assert!(current_timestamp_millis() > 1_700_000_000_000);
    }
}
