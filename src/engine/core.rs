use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::forecast_asset;
#[cfg(debug_assertions)]
use crate::config::DF;
use crate::config::ForecastThresholds;
use crate::data::{AssetSource, LogFileRef};
use crate::domain::{AssetRecord, CycleHistory};
use crate::error::{SentinelError, SentinelResult};
use crate::models::{AssetReport, HealthStatus};

/// One row of a fleet-wide run. Failed assets keep their error.
#[derive(Debug, Clone)]
pub struct FleetEntry {
    pub asset_id: String,
    pub result: SentinelResult<AssetReport>,
}

impl FleetEntry {
    pub fn status(&self) -> Option<HealthStatus> {
        self.result.as_ref().ok().map(|r| r.forecast.status_label)
    }
}

/// Context object built once at startup and handed to every computation.
/// Holds no per-request state, so any call can follow any other.
#[derive(Clone)]
pub struct SentinelEngine {
    source: Arc<dyn AssetSource>,
    thresholds: ForecastThresholds,
}

impl SentinelEngine {
    pub fn new(
        source: impl AssetSource + 'static,
        thresholds: ForecastThresholds,
    ) -> SentinelResult<Self> {
        Self::from_shared(Arc::new(source), thresholds)
    }

    pub fn from_shared(
        source: Arc<dyn AssetSource>,
        thresholds: ForecastThresholds,
    ) -> SentinelResult<Self> {
        thresholds.validate()?;
        Ok(Self { source, thresholds })
    }

    /// Same data, different thresholds.
    pub fn with_thresholds(&self, thresholds: ForecastThresholds) -> SentinelResult<Self> {
        Self::from_shared(Arc::clone(&self.source), thresholds)
    }

    pub fn thresholds(&self) -> &ForecastThresholds {
        &self.thresholds
    }

    pub fn asset_ids(&self) -> Vec<String> {
        self.source.asset_ids()
    }

    pub fn record(&self, asset_id: &str) -> SentinelResult<&AssetRecord> {
        self.source
            .record(asset_id)
            .ok_or_else(|| SentinelError::invalid_input(asset_id, "asset not found"))
    }

    pub fn history(&self, asset_id: &str) -> SentinelResult<CycleHistory> {
        self.source.cycle_history(asset_id)
    }

    pub fn log_files(&self, asset_id: &str) -> &[LogFileRef] {
        self.source.log_files(asset_id)
    }

    /// Full forecast for one asset, recomputed from scratch on every call.
    pub fn forecast(&self, asset_id: &str) -> SentinelResult<AssetReport> {
        let record = self.record(asset_id)?;
        let history = self.history(asset_id)?;
        forecast_asset(record, &history, &self.thresholds)
    }

    /// Every asset, forecast in parallel, in asset id order.
    pub fn fleet_report(&self) -> Vec<FleetEntry> {
        let ids = self.asset_ids();
        let entries: Vec<FleetEntry> = ids
            .into_par_iter()
            .map(|asset_id| {
                let result = self.forecast(&asset_id);
                FleetEntry { asset_id, result }
            })
            .collect();

        #[cfg(debug_assertions)]
        if DF.log_fleet {
            let failed = entries.iter().filter(|e| e.result.is_err()).count();
            log::info!(
                "fleet_report(): {} assets, {} failed",
                entries.len(),
                failed
            );
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CycleHistorySet, MetadataIndex, parse_metadata};
    use crate::domain::CycleSample;
    use crate::models::FailureCycle;

    fn engine() -> SentinelEngine {
        let mut set = CycleHistorySet::new();
        set.insert(
            "BTS-A",
            vec![
                CycleSample::new(0, 2.0),
                CycleSample::new(50, 1.8),
                CycleSample::new(100, 1.6),
            ],
            Some(2.0),
        );
        set.insert(
            "BTS-B",
            vec![CycleSample::new(0, 2.0), CycleSample::new(10, 2.0)],
            Some(2.0),
        );
        set.insert("BTS-C", vec![CycleSample::new(3, 1.9)], Some(2.0));
        set.insert(
            "BTS-D",
            vec![CycleSample::new(0, 2.0), CycleSample::new(0, 1.9)],
            Some(2.0),
        );
        SentinelEngine::new(set, ForecastThresholds::default()).unwrap()
    }

    #[test]
    fn forecasts_single_asset() {
        let report = engine().forecast("BTS-A").unwrap();
        assert_eq!(
            report.forecast.predicted_failure_cycle,
            FailureCycle::Predicted(150)
        );
        assert_eq!(report.forecast.status_label, HealthStatus::ReplaceSoon);
    }

    #[test]
    fn missing_asset_is_invalid_input() {
        let err = engine().forecast("nope").unwrap_err();
        assert!(matches!(err, SentinelError::InvalidInput { .. }));
        assert_eq!(err.asset_id(), "nope");
    }

    #[test]
    fn fleet_report_keeps_order_and_errors() {
        let fleet = engine().fleet_report();
        let ids: Vec<&str> = fleet.iter().map(|e| e.asset_id.as_str()).collect();
        assert_eq!(ids, vec!["BTS-A", "BTS-B", "BTS-C", "BTS-D"]);

        assert_eq!(fleet[0].status(), Some(HealthStatus::ReplaceSoon));
        assert_eq!(fleet[1].status(), Some(HealthStatus::Healthy));
        assert!(matches!(
            fleet[2].result,
            Err(SentinelError::InsufficientData { .. })
        ));
        assert!(matches!(
            fleet[3].result,
            Err(SentinelError::DataQuality { .. })
        ));
    }

    #[test]
    fn repeated_calls_do_not_leak_state() {
        let e = engine();
        let a1 = e.forecast("BTS-A").unwrap();
        let _ = e.forecast("BTS-B").unwrap();
        let _ = e.forecast("BTS-C");
        let a2 = e.forecast("BTS-A").unwrap();
        assert_eq!(a1, a2);
    }

    #[test]
    fn threshold_override_changes_status_only() {
        let e = engine();
        let strict = e
            .with_thresholds(ForecastThresholds {
                replace_soon_horizon_cycles: 49,
                ..Default::default()
            })
            .unwrap();
        let report = strict.forecast("BTS-A").unwrap();
        assert_eq!(report.forecast.status_label, HealthStatus::Healthy);
        assert_eq!(e.thresholds().replace_soon_horizon_cycles, 50);
    }

    #[test]
    fn invalid_thresholds_are_rejected() {
        let bad = ForecastThresholds {
            failure_capacity_ah: -1.0,
            ..Default::default()
        };
        assert!(SentinelEngine::new(CycleHistorySet::new(), bad).is_err());
    }

    #[test]
    fn metadata_source_exposes_log_files() {
        let csv = "\
type,ambient_temperature,battery_id,test_id,filename,Capacity
discharge,24,B0005,1,00001.csv,1.85
charge,24,B0005,2,00002.csv,
discharge,24,B0005,3,00003.csv,1.83
";
        let index = MetadataIndex::from_rows(parse_metadata(csv.as_bytes()).unwrap());
        let e = SentinelEngine::new(index, ForecastThresholds::default()).unwrap();
        let files = e.log_files("B0005");
        assert_eq!(files.len(), 3);
        assert_eq!(files[0].filename, "00003.csv");
        let report = e.forecast("B0005").unwrap();
        assert_eq!(report.forecast.current_cycle, 2);
        assert_eq!(report.latest_temperature(), Some(24.0));
    }
}
