use crate::data::LogFileRef;
use crate::domain::{AssetRecord, CycleHistory};
use crate::error::SentinelResult;

/// Upstream data collaborator: anything that can hand out per-asset reference
/// data and a validated cycle history.
pub trait AssetSource: Send + Sync {
    /// Sorted, unique asset ids.
    fn asset_ids(&self) -> Vec<String>;

    fn record(&self, asset_id: &str) -> Option<&AssetRecord>;

    /// Fails with `InvalidInput` for unknown assets and `DataQuality` for
    /// duplicate or unordered cycles.
    fn cycle_history(&self, asset_id: &str) -> SentinelResult<CycleHistory>;

    /// Detailed logs for the deep-dive view, newest first.
    fn log_files(&self, _asset_id: &str) -> &[LogFileRef] {
        &[]
    }
}
