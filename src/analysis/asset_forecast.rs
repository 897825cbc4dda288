use crate::analysis::{classify_status, compute_soh, fit_trend, predict_failure_cycle, remaining_useful_life};
use crate::config::ForecastThresholds;
#[cfg(debug_assertions)]
use crate::config::DF;
use crate::domain::{AssetRecord, CycleHistory};
use crate::error::{SentinelError, SentinelResult};
use crate::models::{AssetReport, ForecastResult};

/// Runs SoH, trend, failure cycle and status for one asset.
/// Pure: no state is read or written besides the arguments.
pub fn forecast_asset(
    record: &AssetRecord,
    history: &CycleHistory,
    thresholds: &ForecastThresholds,
) -> SentinelResult<AssetReport> {
    thresholds.validate()?;

    if record.asset_id != history.asset_id() {
        return Err(SentinelError::invalid_input(
            &record.asset_id,
            format!(
                "cycle history belongs to '{}', not to this asset",
                history.asset_id()
            ),
        ));
    }

    // 1. State of Health (also rejects empty history / bad rated capacity)
    let health = compute_soh(history, record.initial_capacity)?;

    // 2. Trend
    let trend = fit_trend(history)?;

    // 3. Failure cycle & status
    let (current_cycle, current_soh_pct) = match health.last() {
        Some(p) => (p.cycle_index, p.soh_percent),
        None => {
            return Err(SentinelError::invalid_input(
                &record.asset_id,
                "cycle history is empty",
            ));
        }
    };
    let failure = predict_failure_cycle(&trend, current_cycle, thresholds.failure_capacity_ah);
    let status = classify_status(failure, current_cycle, current_soh_pct, thresholds);

    #[cfg(debug_assertions)]
    if DF.log_forecast {
        log::info!(
            "forecast_asset({}): n={} slope={:.6} intercept={:.4} r2={:.3} failure={} status={}",
            record.asset_id,
            trend.sample_count,
            trend.slope,
            trend.intercept,
            trend.r_squared,
            failure,
            status
        );
    }

    Ok(AssetReport {
        record: record.clone(),
        health,
        trend,
        forecast: ForecastResult {
            slope: trend.slope,
            intercept: trend.intercept,
            predicted_failure_cycle: failure,
            status_label: status,
            remaining_useful_life: remaining_useful_life(failure, current_cycle),
            current_cycle,
            current_soh_pct,
        },
        samples: history.samples().to_vec(),
        horizon_cycles: thresholds.replace_soon_horizon_cycles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CycleSample, SensorReadings};
    use crate::models::{FailureCycle, HealthStatus};

    fn scenario() -> (AssetRecord, CycleHistory) {
        let samples = vec![
            CycleSample::new(0, 2.0),
            CycleSample::new(50, 1.8),
            CycleSample::new(100, 1.6).with_sensors(SensorReadings {
                temperature_c: Some(24.0),
                ..Default::default()
            }),
        ];
        (
            AssetRecord::new("BTS-17", 2.0, 1.6, 3),
            CycleHistory::new("BTS-17", samples).unwrap(),
        )
    }

    #[test]
    fn reference_scenario() {
        let (record, history) = scenario();
        let report = forecast_asset(&record, &history, &ForecastThresholds::default()).unwrap();
        let f = &report.forecast;

        assert!((f.slope - (-0.004)).abs() < 1e-9);
        assert!((f.intercept - 2.0).abs() < 1e-9);
        assert_eq!(f.predicted_failure_cycle, FailureCycle::Predicted(150));
        assert_eq!(f.status_label, HealthStatus::ReplaceSoon);
        assert_eq!(f.remaining_useful_life, Some(50));
        assert_eq!(f.current_cycle, 100);
        assert!((f.current_soh_pct - 80.0).abs() < 1e-9);
        assert_eq!(report.latest_temperature(), Some(24.0));
    }

    #[test]
    fn reference_scenario_with_shorter_horizon_is_healthy() {
        let (record, history) = scenario();
        let t = ForecastThresholds {
            replace_soon_horizon_cycles: 49,
            ..Default::default()
        };
        let report = forecast_asset(&record, &history, &t).unwrap();
        assert_eq!(report.forecast.status_label, HealthStatus::Healthy);
    }

    #[test]
    fn is_idempotent_and_leaves_inputs_alone() {
        let (record, history) = scenario();
        let before = history.clone();
        let a = forecast_asset(&record, &history, &ForecastThresholds::default()).unwrap();
        let b = forecast_asset(&record, &history, &ForecastThresholds::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(history, before);
    }

    #[test]
    fn zero_rated_capacity_fails_before_regression() {
        let (mut record, history) = scenario();
        record.initial_capacity = 0.0;
        let err = forecast_asset(&record, &history, &ForecastThresholds::default()).unwrap_err();
        assert!(matches!(err, SentinelError::InvalidInput { .. }));
    }

    #[test]
    fn single_sample_is_insufficient() {
        let record = AssetRecord::new("BTS-2", 2.0, 2.0, 1);
        let history = CycleHistory::new("BTS-2", vec![CycleSample::new(1, 2.0)]).unwrap();
        let err = forecast_asset(&record, &history, &ForecastThresholds::default()).unwrap_err();
        assert!(matches!(err, SentinelError::InsufficientData { distinct_cycles: 1, .. }));
    }

    #[test]
    fn mismatched_asset_is_rejected() {
        let (_, history) = scenario();
        let record = AssetRecord::new("OTHER", 2.0, 1.6, 3);
        assert!(forecast_asset(&record, &history, &ForecastThresholds::default()).is_err());
    }

    #[test]
    fn forecast_line_reaches_past_failure() {
        let (record, history) = scenario();
        let report = forecast_asset(&record, &history, &ForecastThresholds::default()).unwrap();
        let line = report.forecast_line();
        assert_eq!(line[0][0], 0.0);
        assert_eq!(line[1][0], 170.0);
        assert_eq!(report.observed_points().len(), 3);
        assert_eq!(report.soh_points()[2][1], report.forecast.current_soh_pct);
    }
}
