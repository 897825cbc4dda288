use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Least-squares fit of capacity against cycle index.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    /// Ah per cycle. Negative while the battery is fading.
    pub slope: f64,
    /// Capacity at cycle 0 in Ah.
    pub intercept: f64,
    pub r_squared: f64,
    /// sqrt(SSR / (n - 2)); zero for a two point fit.
    pub residual_std_error: f64,
    /// Largest |observed - fitted| over the history.
    pub max_abs_residual: f64,
    pub sample_count: usize,
}

impl TrendLine {
    #[inline]
    pub fn predict(&self, cycle: f64) -> f64 {
        self.slope * cycle + self.intercept
    }

    /// Two end points of the forecast line for charting.
    ///
    /// Runs from `first_cycle` to `overshoot` cycles past the failure point, or
    /// `horizon` cycles past the last observation when failure is never reached.
    pub fn projection(
        &self,
        first_cycle: u32,
        last_cycle: u32,
        failure: FailureCycle,
        overshoot: u32,
        horizon: u32,
    ) -> Vec<[f64; 2]> {
        let end = match failure {
            FailureCycle::Predicted(c) => c.saturating_add(overshoot),
            FailureCycle::AlreadyCrossed(c) => c.saturating_add(overshoot),
            FailureCycle::Unreachable => last_cycle.saturating_add(horizon),
        };
        let (x0, x1) = (first_cycle as f64, end as f64);
        vec![[x0, self.predict(x0)], [x1, self.predict(x1)]]
    }
}

/// Where the trend meets the failure threshold.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCycle {
    /// First whole cycle at or past the crossing.
    Predicted(u32),
    /// The crossing lies inside observed history; holds the last observed cycle.
    AlreadyCrossed(u32),
    /// Capacity is flat or rising.
    Unreachable,
}

impl FailureCycle {
    pub fn cycle(&self) -> Option<u32> {
        match self {
            Self::Predicted(c) | Self::AlreadyCrossed(c) => Some(*c),
            Self::Unreachable => None,
        }
    }
}

impl std::fmt::Display for FailureCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Predicted(c) => write!(f, "{}", c),
            Self::AlreadyCrossed(c) => write!(f, "crossed by {}", c),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter,
)]
pub enum HealthStatus {
    #[default]
    #[strum(to_string = "Healthy")]
    Healthy,
    #[strum(to_string = "Replace Soon")]
    ReplaceSoon,
    #[strum(to_string = "Critical")]
    Critical,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ForecastResult {
    pub slope: f64,
    pub intercept: f64,
    pub predicted_failure_cycle: FailureCycle,
    pub status_label: HealthStatus,
    /// None when the threshold is never reached.
    pub remaining_useful_life: Option<u32>,
    pub current_cycle: u32,
    pub current_soh_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> TrendLine {
        TrendLine {
            slope: -0.004,
            intercept: 2.0,
            r_squared: 1.0,
            residual_std_error: 0.0,
            max_abs_residual: 0.0,
            sample_count: 3,
        }
    }

    #[test]
    fn projection_runs_past_failure() {
        let pts = line().projection(0, 100, FailureCycle::Predicted(150), 20, 50);
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0][0], 0.0);
        assert_eq!(pts[1][0], 170.0);
        assert!((pts[1][1] - 1.32).abs() < 1e-9);
    }

    #[test]
    fn projection_uses_horizon_when_unreachable() {
        let pts = line().projection(1, 100, FailureCycle::Unreachable, 20, 50);
        assert_eq!(pts[1][0], 150.0);
    }

    #[test]
    fn status_labels_read_naturally() {
        assert_eq!(HealthStatus::ReplaceSoon.to_string(), "Replace Soon");
        assert_eq!(FailureCycle::Unreachable.to_string(), "unreachable");
        assert_eq!(FailureCycle::AlreadyCrossed(80).cycle(), Some(80));
    }
}
