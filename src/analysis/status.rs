use crate::config::ForecastThresholds;
use crate::models::{FailureCycle, HealthStatus};

/// Maps a failure forecast and the current SoH to a status label.
///
/// Critical wins over ReplaceSoon; an unreachable failure is Healthy unless
/// the SoH floor alone says otherwise.
pub fn classify_status(
    failure: FailureCycle,
    current_cycle: u32,
    current_soh_pct: f64,
    thresholds: &ForecastThresholds,
) -> HealthStatus {
    if current_soh_pct < thresholds.critical_soh_pct {
        return HealthStatus::Critical;
    }

    match failure {
        FailureCycle::AlreadyCrossed(_) => HealthStatus::Critical,
        FailureCycle::Predicted(c) => {
            let c = c as u64;
            let now = current_cycle as u64;
            if c <= now + thresholds.critical_margin_cycles as u64 {
                HealthStatus::Critical
            } else if c <= now + thresholds.replace_soon_horizon_cycles as u64 {
                HealthStatus::ReplaceSoon
            } else {
                HealthStatus::Healthy
            }
        }
        FailureCycle::Unreachable => HealthStatus::Healthy,
    }
}
