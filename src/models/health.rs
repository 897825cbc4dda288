use serde::{Deserialize, Serialize};

/// State of Health at one cycle. Derived on demand, never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct HealthPoint {
    pub cycle_index: u32,
    /// Unclamped so the trend keeps its accuracy; use `display_pct` for badges.
    pub soh_percent: f64,
}

impl HealthPoint {
    pub fn display_pct(&self) -> f64 {
        self.soh_percent.clamp(0.0, 100.0)
    }

    /// Change versus a brand new battery (negative once it has faded).
    pub fn delta_from_new(&self) -> f64 {
        self.soh_percent - 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_clamps_but_value_does_not() {
        let p = HealthPoint {
            cycle_index: 3,
            soh_percent: 101.5,
        };
        assert_eq!(p.display_pct(), 100.0);
        assert_eq!(p.soh_percent, 101.5);
        assert!((p.delta_from_new() - 1.5).abs() < 1e-12);

        let q = HealthPoint {
            cycle_index: 4,
            soh_percent: -2.0,
        };
        assert_eq!(q.display_pct(), 0.0);
    }
}
