//! CLI for Skimmer.
//!
//! The binary is driven by the host over stdin/stdout; flags only shape the
//! mission configuration. Every knob has the standard-mission default, so a
//! plain `skimmer` runs the 160×160 mission. A TOML file (`--config`) is
//! applied first, individual flags override it.

use std::path::PathBuf;

use clap::Parser;

use crate::config::MissionConfig;

/// Skimmer — island survey drone decision core.
#[derive(Debug, Parser)]
#[command(name = "skimmer")]
pub struct Cli {
    /// Path to a TOML mission config.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Scan every N turns.
    #[arg(long)]
    pub scan_period: Option<u32>,

    /// Stop as soon as energy drops below this.
    #[arg(long)]
    pub safety_threshold: Option<i64>,

    /// Western edge of the operational rectangle (inclusive).
    #[arg(long)]
    pub min_x: Option<i64>,

    /// Eastern edge of the operational rectangle (inclusive).
    #[arg(long)]
    pub max_x: Option<i64>,

    /// Southern edge of the operational rectangle (inclusive).
    #[arg(long)]
    pub min_y: Option<i64>,

    /// Northern edge of the operational rectangle (inclusive).
    #[arg(long)]
    pub max_y: Option<i64>,
}

impl Cli {
    /// Resolve the mission configuration: file (or defaults), then flag
    /// overrides, then validation.
    pub fn mission_config(&self) -> Result<MissionConfig, String> {
        let mut config = match &self.config {
            Some(path) => MissionConfig::load(path)?,
            None => MissionConfig::default(),
        };

        if let Some(period) = self.scan_period {
            config.scan_period = period;
        }
        if let Some(threshold) = self.safety_threshold {
            config.safety_threshold = threshold;
        }
        if let Some(x) = self.min_x {
            config.bounds.min_x = x;
        }
        if let Some(x) = self.max_x {
            config.bounds.max_x = x;
        }
        if let Some(y) = self.min_y {
            config.bounds.min_y = y;
        }
        if let Some(y) = self.max_y {
            config.bounds.max_y = y;
        }

        config.validate()?;
        Ok(config)
    }
}
