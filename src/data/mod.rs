mod cycle_csv;
mod metadata;
mod sensor_log;
mod source;

pub use {
    cycle_csv::{CycleHistorySet, load_cycle_history, parse_cycle_history, parse_cycle_samples},
    metadata::{LogFileRef, MetadataIndex, MetadataRow, TestKind, load_metadata, parse_metadata},
    sensor_log::{
        CURRENT_COLUMN, SensorColumn, SensorTrace, TEMPERATURE_COLUMN, TIME_COLUMN,
        VOLTAGE_COLUMN, load_sensor_trace, parse_sensor_trace,
    },
    source::AssetSource,
};
