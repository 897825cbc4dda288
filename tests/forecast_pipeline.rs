use std::fs;

use telco_sentinel::{
    CycleHistorySet, ForecastThresholds, HealthStatus, SentinelEngine, SentinelError,
    data::load_sensor_trace, load_metadata, models::FailureCycle,
};

const METADATA: &str = "\
type,start_time,ambient_temperature,battery_id,test_id,uid,filename,Capacity,Re,Rct
charge,[2024 1 1 0 0 0],24,BTS-A,0,1,00001.csv,,,
discharge,[2024 1 1 1 0 0],24,BTS-A,1,2,00002.csv,2.0,,
discharge,[2024 1 2 1 0 0],25,BTS-A,2,3,00003.csv,1.8,,
discharge,[2024 1 3 1 0 0],26,BTS-A,3,4,00004.csv,1.6,,
discharge,[2024 1 1 1 0 0],24,BTS-B,4,5,00005.csv,1.9,,
discharge,[2024 1 2 1 0 0],24,BTS-B,5,6,00006.csv,1.9,,
discharge,[2024 1 1 1 0 0],24,BTS-C,6,7,00007.csv,1.7,,
discharge,[2024 1 1 1 0 0],24,BTS-D,8,8,00008.csv,1.9,,
discharge,[2024 1 2 1 0 0],24,BTS-D,8,9,00009.csv,1.8,,
discharge,[2024 1 3 1 0 0],24,BTS-D,9,10,00010.csv,1.7,,
";

fn engine_from_metadata() -> SentinelEngine {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metadata.csv");
    fs::write(&path, METADATA).unwrap();
    let index = load_metadata(&path).unwrap();
    SentinelEngine::new(index, ForecastThresholds::default()).unwrap()
}

#[test]
fn fleet_report_keeps_order_and_per_asset_errors() {
    let engine = engine_from_metadata();
    let fleet = engine.fleet_report();
    let ids: Vec<&str> = fleet.iter().map(|e| e.asset_id.as_str()).collect();
    assert_eq!(ids, vec!["BTS-A", "BTS-B", "BTS-C", "BTS-D"]);

    assert_eq!(fleet[0].status(), Some(HealthStatus::Critical));
    assert_eq!(fleet[1].status(), Some(HealthStatus::Healthy));
    assert!(matches!(
        fleet[2].result,
        Err(SentinelError::InsufficientData { distinct_cycles: 1, .. })
    ));
    assert!(matches!(fleet[3].result, Err(SentinelError::DataQuality { .. })));
}

#[test]
fn steep_fade_is_critical_one_cycle_out() {
    let engine = engine_from_metadata();
    let report = engine.forecast("BTS-A").unwrap();
    let f = &report.forecast;

    assert_eq!(f.current_cycle, 3);
    assert!((f.current_soh_pct - 80.0).abs() < 1e-9);
    assert_eq!(f.predicted_failure_cycle, FailureCycle::Predicted(4));
    assert_eq!(f.remaining_useful_life, Some(1));
    assert_eq!(report.latest_temperature(), Some(26.0));

    let files: Vec<&str> = engine
        .log_files("BTS-A")
        .iter()
        .map(|f| f.filename.as_str())
        .collect();
    assert_eq!(files.first(), Some(&"00004.csv"));
    assert_eq!(files.last(), Some(&"00001.csv"));
}

#[test]
fn unknown_site_names_the_asset() {
    let engine = engine_from_metadata();
    let err = engine.forecast("BTS-Z").unwrap_err();
    assert_eq!(err.asset_id(), "BTS-Z");
    assert!(matches!(err, SentinelError::InvalidInput { .. }));
}

#[test]
fn cycle_history_directory_reproduces_reference_forecast() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("BTS-17.csv"),
        "cycle_index,capacity\n0,2.0\n50,1.8\n100,1.6\n",
    )
    .unwrap();

    let set = CycleHistorySet::load_dir(dir.path()).unwrap();
    let engine = SentinelEngine::new(set, ForecastThresholds::default()).unwrap();
    let report = engine.forecast("BTS-17").unwrap();
    let f = &report.forecast;
    assert!((f.slope + 0.004).abs() < 1e-9);
    assert!((f.intercept - 2.0).abs() < 1e-9);
    assert_eq!(f.predicted_failure_cycle, FailureCycle::Predicted(150));
    assert_eq!(f.status_label, HealthStatus::ReplaceSoon);
    assert_eq!(f.remaining_useful_life, Some(50));

    let shorter = engine
        .with_thresholds(ForecastThresholds {
            replace_soon_horizon_cycles: 49,
            ..Default::default()
        })
        .unwrap();
    let again = shorter.forecast("BTS-17").unwrap();
    assert_eq!(again.forecast.status_label, HealthStatus::Healthy);
}

#[test]
fn sensor_logs_load_from_the_log_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("00004.csv"),
        "Voltage_measured,Current_measured,Temperature_measured,Time\n\
         4.19,-0.004,24.3,0\n\
         3.97,-2.01,24.9,16.7\n",
    )
    .unwrap();

    let trace = load_sensor_trace(dir.path(), "00004.csv").unwrap().unwrap();
    assert_eq!(trace.row_count(), 2);
    let temps = trace.column("Temperature_measured").unwrap();
    assert_eq!(temps.values, vec![Some(24.3), Some(24.9)]);

    assert!(load_sensor_trace(dir.path(), "00099.csv").unwrap().is_none());
}

#[test]
fn non_finite_capacity_is_reported_not_forecast() {
    let mut set = CycleHistorySet::new();
    set.insert(
        "BTS-X",
        vec![
            telco_sentinel::domain::CycleSample::new(0, 2.0),
            telco_sentinel::domain::CycleSample::new(50, f64::NAN),
            telco_sentinel::domain::CycleSample::new(100, 1.5),
        ],
        Some(2.0),
    );
    let engine = SentinelEngine::new(set, ForecastThresholds::default()).unwrap();
    let err = engine.forecast("BTS-X").unwrap_err();
    assert!(matches!(err, SentinelError::DataQuality { .. }));
    assert_eq!(err.asset_id(), "BTS-X");
}
