//! Forecast thresholds configuration

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{SentinelError, SentinelResult};

/// Thresholds that turn a fitted trend into a status label.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastThresholds {
    /// Capacity (Ah) below which a battery counts as failed.
    pub failure_capacity_ah: f64,
    /// Current SoH (%) below which the asset is Critical regardless of trend.
    pub critical_soh_pct: f64,
    /// A failure forecast within this many cycles means ReplaceSoon.
    pub replace_soon_horizon_cycles: u32,
    /// A failure forecast within this many cycles means Critical.
    pub critical_margin_cycles: u32,
}

impl Default for ForecastThresholds {
    fn default() -> Self {
        FORECAST.thresholds
    }
}

impl ForecastThresholds {
    /// Reads a JSON file. Missing fields keep their default.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read thresholds file {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse thresholds file {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let thresholds: ForecastThresholds = serde_json::from_str(text)?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> SentinelResult<()> {
        let reject = |reason: String| Err(SentinelError::invalid_input(CONFIG_SCOPE, reason));

        if !self.failure_capacity_ah.is_finite() || self.failure_capacity_ah <= 0.0 {
            return reject(format!(
                "failure_capacity_ah must be a positive number, got {}",
                self.failure_capacity_ah
            ));
        }
        if !self.critical_soh_pct.is_finite()
            || self.critical_soh_pct <= 0.0
            || self.critical_soh_pct > 100.0
        {
            return reject(format!(
                "critical_soh_pct must be in (0, 100], got {}",
                self.critical_soh_pct
            ));
        }
        if self.critical_margin_cycles > self.replace_soon_horizon_cycles {
            return reject(format!(
                "critical_margin_cycles ({}) exceeds replace_soon_horizon_cycles ({})",
                self.critical_margin_cycles, self.replace_soon_horizon_cycles
            ));
        }
        Ok(())
    }
}

/// Asset id reported by configuration errors, which belong to no asset.
pub const CONFIG_SCOPE: &str = "<config>";

/// The Master Forecast Configuration
pub struct ForecastConfig {
    pub thresholds: ForecastThresholds,
    /// Extra cycles drawn past the failure point on the forecast line.
    pub projection_overshoot_cycles: u32,
    /// Distance from an integer below which a solved failure cycle snaps to it.
    pub cycle_snap_epsilon: f64,
}

pub const FORECAST: ForecastConfig = ForecastConfig {
    thresholds: ForecastThresholds {
        failure_capacity_ah: 1.4,
        critical_soh_pct: 70.0,
        replace_soon_horizon_cycles: 50,
        // Matches the old dashboard's "URGENT" banner (< 15 cycles left)
        critical_margin_cycles: 15,
    },
    projection_overshoot_cycles: 20,
    cycle_snap_epsilon: 1e-9,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let t = ForecastThresholds::default();
        assert_eq!(t.failure_capacity_ah, 1.4);
        assert_eq!(t.replace_soon_horizon_cycles, 50);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let t = ForecastThresholds::from_json_str(r#"{ "failure_capacity_ah": 1.5 }"#)
            .expect("valid json");
        assert_eq!(t.failure_capacity_ah, 1.5);
        assert_eq!(t.critical_soh_pct, 70.0);
        assert_eq!(t.critical_margin_cycles, 15);
    }

    #[test]
    fn rejects_non_positive_failure_capacity() {
        let t = ForecastThresholds {
            failure_capacity_ah: 0.0,
            ..Default::default()
        };
        let err = t.validate().unwrap_err();
        assert!(matches!(err, SentinelError::InvalidInput { .. }));
    }

    #[test]
    fn rejects_margin_wider_than_horizon() {
        let t = ForecastThresholds {
            critical_margin_cycles: 60,
            replace_soon_horizon_cycles: 50,
            ..Default::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn rejects_soh_above_hundred() {
        let t = ForecastThresholds {
            critical_soh_pct: 120.0,
            ..Default::default()
        };
        assert!(t.validate().is_err());
    }
}
