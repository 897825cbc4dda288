use crate::domain::CycleHistory;
use crate::error::{SentinelError, SentinelResult};
use crate::models::HealthPoint;

/// State of Health per cycle: capacity / initial_capacity * 100, unclamped.
pub fn compute_soh(history: &CycleHistory, initial_capacity: f64) -> SentinelResult<Vec<HealthPoint>> {
    if !initial_capacity.is_finite() || initial_capacity <= 0.0 {
        return Err(SentinelError::invalid_input(
            history.asset_id(),
            format!(
                "initial capacity must be positive to compute SoH, got {} Ah",
                initial_capacity
            ),
        ));
    }
    if history.is_empty() {
        return Err(SentinelError::invalid_input(
            history.asset_id(),
            "cycle history is empty",
        ));
    }

    Ok(history
        .samples()
        .iter()
        .map(|s| HealthPoint {
            cycle_index: s.cycle_index,
            soh_percent: s.capacity / initial_capacity * 100.0,
        })
        .collect())
}
