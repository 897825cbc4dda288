//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Per-row notes while parsing the metadata file.
    pub log_metadata_rows: bool,

    /// Regression inputs and outputs for every forecast.
    pub log_forecast: bool,

    /// Anything about handling the selected asset / tab
    pub log_selection: bool,

    /// Sensor trace loading in the deep-dive tab
    pub log_sensor_trace: bool,

    pub log_fleet: bool,
}

pub const DF: LogFlags = LogFlags {
    log_selection: true,
    log_fleet: true,

    log_metadata_rows: false,
    log_forecast: false,
    log_sensor_trace: false,
};
