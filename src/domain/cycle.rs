use serde::{Deserialize, Serialize};

use crate::error::{SentinelError, SentinelResult};

/// Optional per-cycle sensor readings. The engine never transforms these, it
/// only forwards them to the deep-dive charts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorReadings {
    pub voltage_v: Option<f64>,
    pub current_a: Option<f64>,
    pub temperature_c: Option<f64>,
}

impl SensorReadings {
    pub fn is_empty(&self) -> bool {
        self.voltage_v.is_none() && self.current_a.is_none() && self.temperature_c.is_none()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CycleSample {
    pub cycle_index: u32,
    /// Measured discharge capacity in Ah.
    pub capacity: f64,
    #[serde(default)]
    pub sensors: SensorReadings,
    /// Detailed log backing this cycle, if any.
    #[serde(default)]
    pub log_file: Option<String>,
}

impl CycleSample {
    pub fn new(cycle_index: u32, capacity: f64) -> Self {
        CycleSample {
            cycle_index,
            capacity,
            sensors: SensorReadings::default(),
            log_file: None,
        }
    }

    pub fn with_sensors(mut self, sensors: SensorReadings) -> Self {
        self.sensors = sensors;
        self
    }

    pub fn with_log_file(mut self, filename: impl Into<String>) -> Self {
        self.log_file = Some(filename.into());
        self
    }
}

/// One asset's cycle history in cycle order.
///
/// Construction is the only place ordering is checked, so every function that
/// takes a `CycleHistory` can rely on strictly increasing `cycle_index` values.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleHistory {
    asset_id: String,
    samples: Vec<CycleSample>,
}

impl CycleHistory {
    /// Fails with `DataQuality` on a non-finite capacity or on the first
    /// duplicate or backwards cycle index.
    /// An empty history is allowed here; the operations that need data reject it.
    pub fn new(asset_id: impl Into<String>, samples: Vec<CycleSample>) -> SentinelResult<Self> {
        let asset_id = asset_id.into();

        if let Some((pos, bad)) = samples
            .iter()
            .enumerate()
            .find(|(_, s)| !s.capacity.is_finite())
        {
            return Err(SentinelError::data_quality(
                &asset_id,
                format!(
                    "capacity {} at cycle_index {} (position {}) is not a finite number",
                    bad.capacity, bad.cycle_index, pos
                ),
            ));
        }

        for (pos, pair) in samples.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.cycle_index == prev.cycle_index {
                return Err(SentinelError::data_quality(
                    &asset_id,
                    format!(
                        "duplicate cycle_index {} at positions {} and {}",
                        next.cycle_index,
                        pos,
                        pos + 1
                    ),
                ));
            }
            if next.cycle_index < prev.cycle_index {
                return Err(SentinelError::data_quality(
                    &asset_id,
                    format!(
                        "cycle_index goes backwards from {} to {} at position {}",
                        prev.cycle_index,
                        next.cycle_index,
                        pos + 1
                    ),
                ));
            }
        }

        Ok(CycleHistory { asset_id, samples })
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn samples(&self) -> &[CycleSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&CycleSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&CycleSample> {
        self.samples.last()
    }

    pub fn cycles(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.cycle_index as f64)
    }

    pub fn capacities(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.capacity)
    }
}
