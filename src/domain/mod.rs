// Domain types and value objects
mod asset;
mod cycle;

pub use asset::AssetRecord;
pub use cycle::{CycleHistory, CycleSample, SensorReadings};
