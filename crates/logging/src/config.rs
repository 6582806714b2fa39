//! crates/logging/src/config.rs
//! Construction-time settings for a [`Logger`](crate::Logger).

use crate::levels::LevelMask;

/// Tag used for the logger's own diagnostics.
pub const INTERNAL_TAG: &str = "Logger";

/// Settings applied when a [`Logger`](crate::Logger) is created.
///
/// ```
/// use logging::{LevelMask, LoggerConfig, Severity};
///
/// let config = LoggerConfig::default()
///     .with_levels(Severity::Warn | Severity::Error)
///     .with_internal_tag("MyLogger");
/// assert_eq!(config.levels.to_string(), "warn|error");
/// assert_eq!(config.internal_tag, "MyLogger");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Severities enabled from the start.
    pub levels: LevelMask,
    /// Tag for diagnostics about invalid masks and unrecognized severities.
    pub internal_tag: String,
}

impl LoggerConfig {
    /// Replaces the initial level mask.
    pub fn with_levels(mut self, levels: impl Into<LevelMask>) -> Self {
        self.levels = levels.into();
        self
    }

    /// Replaces the internal diagnostic tag.
    pub fn with_internal_tag(mut self, tag: impl Into<String>) -> Self {
        self.internal_tag = tag.into();
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            levels: LevelMask::ALL,
            internal_tag: INTERNAL_TAG.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::Severity;

    #[test]
    fn default_enables_everything() {
        let config = LoggerConfig::default();
        assert_eq!(config.levels, LevelMask::ALL);
        assert_eq!(config.internal_tag, INTERNAL_TAG);
    }

    #[test]
    fn with_levels_accepts_single_severity() {
        let config = LoggerConfig::default().with_levels(Severity::Debug);
        assert_eq!(config.levels, LevelMask::from(Severity::Debug));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_fills_missing_fields_with_defaults() {
        let config: LoggerConfig = serde_json::from_str(r#"{"levels": 16}"#).expect("deserialize");
        assert_eq!(config.levels, LevelMask::from(Severity::Error));
        assert_eq!(config.internal_tag, INTERNAL_TAG);

        assert!(serde_json::from_str::<LoggerConfig>(r#"{"levels": 64}"#).is_err());
    }
}
