use serde::{Deserialize, Serialize};

use crate::config::FORECAST;
use crate::domain::{AssetRecord, CycleSample};
use crate::models::{FailureCycle, ForecastResult, HealthPoint, HealthStatus, TrendLine};
use crate::utils::{format_pct, format_rul};

/// Everything the presentation layer needs for one asset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssetReport {
    pub record: AssetRecord,
    pub health: Vec<HealthPoint>,
    pub trend: TrendLine,
    pub forecast: ForecastResult,
    /// Forwarded untouched for the deep-dive charts.
    pub samples: Vec<CycleSample>,
    /// Horizon used to end the forecast line when failure is unreachable.
    pub horizon_cycles: u32,
}

impl AssetReport {
    pub fn asset_id(&self) -> &str {
        &self.record.asset_id
    }

    pub fn latest_health(&self) -> Option<&HealthPoint> {
        self.health.last()
    }

    pub fn latest_sample(&self) -> Option<&CycleSample> {
        self.samples.last()
    }

    /// Most recent ambient/cell temperature reading, if any cycle carries one.
    pub fn latest_temperature(&self) -> Option<f64> {
        self.samples
            .iter()
            .rev()
            .find_map(|s| s.sensors.temperature_c)
    }

    pub fn observed_points(&self) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .map(|s| [s.cycle_index as f64, s.capacity])
            .collect()
    }

    pub fn soh_points(&self) -> Vec<[f64; 2]> {
        self.health
            .iter()
            .map(|p| [p.cycle_index as f64, p.soh_percent])
            .collect()
    }

    pub fn forecast_line(&self) -> Vec<[f64; 2]> {
        let first = self.samples.first().map(|s| s.cycle_index).unwrap_or(0);
        self.trend.projection(
            first,
            self.forecast.current_cycle,
            self.forecast.predicted_failure_cycle,
            FORECAST.projection_overshoot_cycles,
            self.horizon_cycles,
        )
    }

    /// One-line alert for the status banner and the CLI.
    pub fn status_message(&self, critical_soh_pct: f64) -> String {
        let id = self.asset_id();
        let f = &self.forecast;
        let rul = format_rul(f.remaining_useful_life);
        match (f.status_label, f.predicted_failure_cycle) {
            (HealthStatus::Critical, FailureCycle::AlreadyCrossed(_)) => format!(
                "URGENT: Site {} has already faded past the failure threshold. Replace now.",
                id
            ),
            (HealthStatus::Critical, _) if f.current_soh_pct < critical_soh_pct => format!(
                "URGENT: Site {} is at {} SoH, below the {} floor. Replace now.",
                id,
                format_pct(f.current_soh_pct),
                format_pct(critical_soh_pct)
            ),
            (HealthStatus::Critical, _) => format!(
                "URGENT: Site {} battery is nearing End-of-Life. Replacement recommended within {}.",
                id, rul
            ),
            (HealthStatus::ReplaceSoon, failure) => format!(
                "Site {} is forecast to fail at cycle {} ({} left). Schedule a replacement.",
                id, failure, rul
            ),
            (HealthStatus::Healthy, FailureCycle::Unreachable) => format!(
                "Site {} is stable. No capacity fade trend detected.",
                id
            ),
            (HealthStatus::Healthy, _) => format!(
                "Site {} is stable. Estimated maintenance needed in {}.",
                id, rul
            ),
        }
    }
}
