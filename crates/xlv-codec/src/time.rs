//! Ripple-epoch timestamps.
//!
//! Ledger times count seconds since 2000-01-01T00:00:00Z. Rendering uses the
//! zone and pattern from [`DisplayConfig`], never the host clock or locale,
//! so the same input always produces the same text.

use std::fmt::Write;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use xlv_types::DisplayConfig;

use crate::error::{CodecError, CodecResult};

/// Seconds between the UNIX epoch and the ripple epoch.
pub const RIPPLE_EPOCH_OFFSET: i64 = 946_684_800;

/// Convert ripple-epoch seconds to UNIX seconds.
pub fn ripple_to_unix(ripple_secs: u64) -> CodecResult<i64> {
    i64::try_from(ripple_secs)
        .ok()
        .and_then(|secs| secs.checked_add(RIPPLE_EPOCH_OFFSET))
        .ok_or(CodecError::TimeOutOfRange(ripple_secs))
}

/// Convert ripple-epoch seconds to a datetime in the configured zone.
pub fn ripple_to_datetime(
    ripple_secs: u64,
    config: &DisplayConfig,
) -> CodecResult<DateTime<FixedOffset>> {
    let offset_minutes = config.zone.utc_offset_minutes;
    let offset = offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(CodecError::InvalidZone(offset_minutes))?;
    let utc = DateTime::from_timestamp(ripple_to_unix(ripple_secs)?, 0)
        .ok_or(CodecError::TimeOutOfRange(ripple_secs))?;
    Ok(utc.with_timezone(&offset))
}

/// Render ripple-epoch seconds as `"{date and time} {zone abbreviation}"`.
pub fn format_ripple_time(ripple_secs: u64, config: &DisplayConfig) -> CodecResult<String> {
    let datetime = ripple_to_datetime(ripple_secs, config)?;
    let mut out = String::new();
    // chrono reports unknown specifiers as a fmt error during formatting.
    write!(out, "{}", datetime.format(&config.time_format))
        .map_err(|_| CodecError::InvalidTimeFormat(config.time_format.clone()))?;
    if !config.zone.abbreviation.is_empty() {
        out.push(' ');
        out.push_str(&config.zone.abbreviation);
    }
    Ok(out)
}

/// Extract ripple-epoch seconds from a number or a numeric string.
pub fn ripple_time_from_value(raw: &Value) -> Option<u64> {
    match raw {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use xlv_types::DisplayZone;

    #[test]
    fn epoch_start() {
        let out = format_ripple_time(0, &DisplayConfig::utc()).unwrap();
        assert_eq!(out, "January 1, 2000, 12:00:00 AM UTC");
    }

    #[test]
    fn mid_2025_timestamp() {
        let out = format_ripple_time(802_030_415, &DisplayConfig::utc()).unwrap();
        assert_eq!(out, "May 31, 2025, 6:13:35 PM UTC");
        assert!(out.contains("2025"));
    }

    #[test]
    fn explicit_zone_is_applied() {
        let config = DisplayConfig::utc().with_zone(DisplayZone::new(-240, "EDT"));
        let out = format_ripple_time(802_030_415, &config).unwrap();
        assert_eq!(out, "May 31, 2025, 2:13:35 PM EDT");
    }

    #[test]
    fn custom_pattern() {
        let config = DisplayConfig {
            time_format: "%Y-%m-%d %H:%M:%S".into(),
            ..DisplayConfig::utc()
        };
        assert_eq!(
            format_ripple_time(802_030_415, &config).unwrap(),
            "2025-05-31 18:13:35 UTC"
        );
    }

    #[test]
    fn bad_zone_is_error() {
        let config = DisplayConfig::utc().with_zone(DisplayZone::new(24 * 60, "X"));
        assert_eq!(
            format_ripple_time(0, &config),
            Err(CodecError::InvalidZone(24 * 60))
        );
    }

    #[test]
    fn out_of_range_is_error() {
        assert!(matches!(
            format_ripple_time(u64::MAX, &DisplayConfig::utc()),
            Err(CodecError::TimeOutOfRange(_))
        ));
    }

    #[test]
    fn value_extraction() {
        assert_eq!(ripple_time_from_value(&json!(802030415)), Some(802_030_415));
        assert_eq!(ripple_time_from_value(&json!("802030415")), Some(802_030_415));
        assert_eq!(ripple_time_from_value(&json!(null)), None);
        assert_eq!(ripple_time_from_value(&json!("soon")), None);
        assert_eq!(ripple_time_from_value(&json!(-1)), None);
    }

    proptest! {
        #[test]
        fn rendering_is_deterministic(secs in 0u64..4_000_000_000) {
            let config = DisplayConfig::utc();
            let a = format_ripple_time(secs, &config).unwrap();
            let b = format_ripple_time(secs, &config).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
