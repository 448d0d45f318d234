use std::path::Path;

use anyhow::Context;
use xlv_types::{DisplayConfig, DisplayZone};

/// Load display settings from an optional TOML file, then apply the
/// command-line zone overrides.
pub fn load_config(
    path: Option<&Path>,
    utc_offset: Option<i32>,
    zone: Option<&str>,
) -> anyhow::Result<DisplayConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => DisplayConfig::default(),
    };

    match (utc_offset, zone) {
        (Some(offset), Some(abbr)) => config.zone = DisplayZone::new(offset, abbr),
        (Some(offset), None) => config.zone = DisplayZone::new(offset, offset_label(offset)),
        (None, Some(abbr)) => config.zone.abbreviation = abbr.to_string(),
        (None, None) => {}
    }
    config.validate()?;
    tracing::debug!(zone = %config.zone.abbreviation, offset = config.zone.utc_offset_minutes, "display config");
    Ok(config)
}

/// `UTC`, `UTC+05:30`, `UTC-04:00`.
fn offset_label(minutes: i32) -> String {
    if minutes == 0 {
        return "UTC".into();
    }
    let sign = if minutes < 0 { '-' } else { '+' };
    let abs = minutes.unsigned_abs();
    format!("UTC{sign}{:02}:{:02}", abs / 60, abs % 60)
}
