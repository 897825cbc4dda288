use serde::{Deserialize, Serialize};

/// Per-site summary metrics. Immutable once the metadata has been loaded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssetRecord {
    pub asset_id: String,
    /// Rated (first observed) capacity in Ah. SoH is measured against this.
    pub initial_capacity: f64,
    /// Capacity of the most recent cycle in Ah.
    pub current_capacity: f64,
    pub cycle_count: usize,
}

impl AssetRecord {
    pub fn new(
        asset_id: impl Into<String>,
        initial_capacity: f64,
        current_capacity: f64,
        cycle_count: usize,
    ) -> Self {
        AssetRecord {
            asset_id: asset_id.into(),
            initial_capacity,
            current_capacity,
            cycle_count,
        }
    }
}

impl std::fmt::Display for AssetRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: {:.3} Ah -> {:.3} Ah over {} cycles",
            self.asset_id, self.initial_capacity, self.current_capacity, self.cycle_count
        )
    }
}
