//! Mission configuration.
//!
//! The drone fleet used to hard-code the rectangle, scan cadence, and safety
//! threshold per variant. Here they are data: defaults match the standard
//! mission, and a TOML file or CLI flags reshape them, so one binary serves
//! any grid size.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::bounds::Bounds;

/// Everything the decision engine is parametrized by.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MissionConfig {
    /// The inclusive operational rectangle.
    pub bounds: Bounds,

    /// Scan every N turns. The first turn of a run always scans.
    pub scan_period: u32,

    /// Stop as soon as energy drops below this.
    pub safety_threshold: i64,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            scan_period: 3,
            safety_threshold: 15,
        }
    }
}

impl MissionConfig {
    /// Load config from a TOML file.
    ///
    /// Returns an error if the file is missing or invalid. Absent keys fall
    /// back to the defaults.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.scan_period == 0 {
            return Err("scan-period must be at least 1".to_string());
        }
        if self.bounds.min_x > self.bounds.max_x || self.bounds.min_y > self.bounds.max_y {
            return Err("bounds must satisfy min <= max on both axes".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn defaults_match_the_standard_mission() {
        let config = MissionConfig::default();
        assert_eq!(config.bounds, Bounds::default());
        assert_eq!(config.scan_period, 3);
        assert_eq!(config.safety_threshold, 15);
    }

    #[test]
    fn loads_partial_file_over_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mission.toml");
        fs::write(&path, "scan-period = 5\n\n[bounds]\nmax-x = 40\nmax-y = 40\n").unwrap();

        let config = MissionConfig::load(&path).unwrap();
        assert_eq!(config.scan_period, 5);
        assert_eq!(config.safety_threshold, 15);
        assert_eq!(config.bounds.min_x, 1);
        assert_eq!(config.bounds.max_x, 40);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = MissionConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.contains("failed to read"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mission.toml");
        fs::write(&path, "scan-period = \"often\"\n").unwrap();

        let err = MissionConfig::load(&path).unwrap_err();
        assert!(err.contains("invalid config"));
    }

    #[test]
    fn rejects_zero_scan_period() {
        let config = MissionConfig {
            scan_period: 0,
            ..MissionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let mut config = MissionConfig::default();
        config.bounds.min_x = 200;
        assert!(config.validate().is_err());
    }
}
