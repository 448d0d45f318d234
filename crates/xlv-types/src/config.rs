use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Largest UTC offset accepted, in minutes (±18 hours).
pub const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Widest indent accepted for text output, in spaces per level.
pub const MAX_INDENT_WIDTH: usize = 16;

/// The timezone used when rendering ripple-epoch timestamps.
///
/// Zones are fixed offsets rather than named IANA zones: the caller decides
/// which offset and abbreviation apply, so output never depends on the
/// host's local timezone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayZone {
    /// Offset east of UTC, in minutes.
    pub utc_offset_minutes: i32,
    /// Abbreviation appended to every rendered time (e.g. `UTC`, `EDT`).
    pub abbreviation: String,
}

impl DisplayZone {
    /// Create a zone from an offset and abbreviation.
    pub fn new(utc_offset_minutes: i32, abbreviation: impl Into<String>) -> Self {
        Self {
            utc_offset_minutes,
            abbreviation: abbreviation.into(),
        }
    }

    /// Coordinated Universal Time.
    pub fn utc() -> Self {
        Self::new(0, "UTC")
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::utc()
    }
}

/// Configuration for report rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Zone used for ripple-epoch timestamps.
    pub zone: DisplayZone,
    /// chrono strftime pattern for the date and time part of a timestamp.
    pub time_format: String,
    /// Spaces per nesting level in text output.
    pub indent_width: usize,
    /// Maximum nesting depth before traversal gives up.
    pub max_depth: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zone: DisplayZone::utc(),
            time_format: "%B %-d, %Y, %-I:%M:%S %p".into(),
            indent_width: 2,
            max_depth: 16,
        }
    }
}

impl DisplayConfig {
    /// Default configuration rendering times in UTC.
    pub fn utc() -> Self {
        Self::default()
    }

    /// Replace the display zone.
    pub fn with_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), TypeError> {
        if self.zone.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TypeError::InvalidOffset(self.zone.utc_offset_minutes));
        }
        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(TypeError::InvalidConfig(format!(
                "indent_width must be at most {MAX_INDENT_WIDTH}"
            )));
        }
        if self.max_depth == 0 {
            return Err(TypeError::InvalidConfig("max_depth must be at least 1".into()));
        }
        if self.time_format.trim().is_empty() {
            return Err(TypeError::InvalidConfig("time_format must not be empty".into()));
        }
        Ok(())
    }
}
