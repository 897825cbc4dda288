use crate::config::FORECAST;
use crate::models::{FailureCycle, TrendLine};

/// Solves `slope * x + intercept = threshold` for the failure cycle.
pub fn predict_failure_cycle(trend: &TrendLine, last_cycle: u32, threshold: f64) -> FailureCycle {
    if trend.slope >= 0.0 || !trend.slope.is_finite() {
        return FailureCycle::Unreachable;
    }

    let x = (threshold - trend.intercept) / trend.slope;
    if x <= last_cycle as f64 {
        return FailureCycle::AlreadyCrossed(last_cycle);
    }

    // Snapping must not pull a crossing past history back onto the last cycle.
    FailureCycle::Predicted(ceil_cycle(x).max(last_cycle.saturating_add(1)))
}

/// Cycles left before the threshold. None when it is never reached.
pub fn remaining_useful_life(failure: FailureCycle, current_cycle: u32) -> Option<u32> {
    match failure {
        FailureCycle::Predicted(c) => Some(c.saturating_sub(current_cycle)),
        FailureCycle::AlreadyCrossed(_) => Some(0),
        FailureCycle::Unreachable => None,
    }
}

// Rounding noise such as 150.00000000000003 must not push the answer to 151.
fn ceil_cycle(x: f64) -> u32 {
    let nearest = x.round();
    let snapped = if (x - nearest).abs() < FORECAST.cycle_snap_epsilon {
        nearest
    } else {
        x.ceil()
    };
    // Float to int `as` saturates
    snapped as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(slope: f64, intercept: f64) -> TrendLine {
        TrendLine {
            slope,
            intercept,
            r_squared: 1.0,
            residual_std_error: 0.0,
            max_abs_residual: 0.0,
            sample_count: 3,
        }
    }

    #[test]
    fn solves_for_threshold_crossing() {
        let f = predict_failure_cycle(&line(-0.004, 2.0), 100, 1.4);
        assert_eq!(f, FailureCycle::Predicted(150));
    }

    #[test]
    fn rounds_partial_cycles_up() {
        // x = 0.5 / 0.003 = 166.67
        let f = predict_failure_cycle(&line(-0.003, 1.9), 100, 1.4);
        assert_eq!(f, FailureCycle::Predicted(167));
    }

    #[test]
    fn float_noise_snaps_to_integer() {
        assert_eq!(ceil_cycle(150.00000000000003), 150);
        assert_eq!(ceil_cycle(149.99999999999997), 150);
        assert_eq!(ceil_cycle(150.2), 151);
    }

    #[test]
    fn crossing_just_past_history_is_next_cycle() {
        // x = 100.0000000005, inside the snap window of the last cycle
        let f = predict_failure_cycle(&line(-0.004, 1.800000000002), 100, 1.4);
        assert_eq!(f, FailureCycle::Predicted(101));
    }

    #[test]
    fn flat_or_rising_trend_never_fails() {
        for slope in [0.0, 1e-6, 0.01] {
            assert_eq!(
                predict_failure_cycle(&line(slope, 2.0), 100, 1.4),
                FailureCycle::Unreachable
            );
        }
    }

    #[test]
    fn crossing_inside_history_is_already_crossed() {
        // Crosses 1.4 at cycle 50, history runs to 80
        let f = predict_failure_cycle(&line(-0.004, 1.6), 80, 1.4);
        assert_eq!(f, FailureCycle::AlreadyCrossed(80));
        // Intercept already below threshold gives a negative x
        let g = predict_failure_cycle(&line(-0.004, 1.3), 10, 1.4);
        assert_eq!(g, FailureCycle::AlreadyCrossed(10));
    }

    #[test]
    fn tiny_slope_saturates() {
        let f = predict_failure_cycle(&line(-1e-15, 2.0), 10, 1.4);
        assert_eq!(f, FailureCycle::Predicted(u32::MAX));
    }

    #[test]
    fn remaining_life_per_case() {
        assert_eq!(remaining_useful_life(FailureCycle::Predicted(150), 100), Some(50));
        assert_eq!(remaining_useful_life(FailureCycle::AlreadyCrossed(100), 100), Some(0));
        assert_eq!(remaining_useful_life(FailureCycle::Unreachable, 100), None);
    }
}
