pub struct UiText {
    // --- Window ---
    pub app_title: &'static str,
    pub window_title: &'static str,

    // --- Left panel ---
    pub lp_brand: &'static str,
    pub lp_subtitle: &'static str,
    pub lp_select_site: &'static str,
    pub lp_info_prefix: &'static str,
    pub lp_info_suffix: &'static str,
    pub lp_thresholds: &'static str,
    pub lp_failure_capacity: &'static str,
    pub lp_critical_soh: &'static str,
    pub lp_horizon: &'static str,
    pub lp_margin: &'static str,

    // --- KPI row ---
    pub kpi_soh: &'static str,
    pub kpi_capacity: &'static str,
    pub kpi_rul: &'static str,
    pub kpi_temperature: &'static str,

    // --- Tabs ---
    pub tab_fleet: &'static str,
    pub tab_deep_dive: &'static str,

    // --- PLOT LABELS ---
    pub plot_heading: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub plot_observed: &'static str,
    pub plot_trend: &'static str,
    pub plot_threshold_prefix: &'static str,
    pub plot_failure_marker: &'static str,
    pub plot_soh_heading: &'static str,
    pub plot_soh_axis: &'static str,
    pub plot_soh_series: &'static str,
    pub plot_soh_floor_prefix: &'static str,

    // --- Deep dive ---
    pub dd_heading: &'static str,
    pub dd_intro: &'static str,
    pub dd_select_log: &'static str,
    pub dd_voltage: &'static str,
    pub dd_temperature: &'static str,
    pub dd_current: &'static str,
    pub dd_duration: &'static str,
    pub dd_sample_axis: &'static str,
    pub dd_raw_table: &'static str,
    pub dd_no_logs: &'static str,
    pub dd_missing_file_prefix: &'static str,
    pub dd_missing_file_suffix: &'static str,

    // --- ERRORS ---
    pub error_load_failed: &'static str,
    pub error_no_assets: &'static str,
    pub error_no_asset_selected: &'static str,
    pub error_forecast_failed: &'static str,

    pub footer: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Telco Sentinel",
    window_title: "Telco Sentinel - Battery Health Dashboard",

    lp_brand: "TELCO SENTINEL",
    lp_subtitle: "Infrastructure Analytics",
    lp_select_site: "Select Tower Site (Battery ID)",
    lp_info_prefix: "Showing analytics for site",
    lp_info_suffix: "This data helps predict power failures before they happen.",
    lp_thresholds: "Thresholds",
    lp_failure_capacity: "Failure capacity",
    lp_critical_soh: "Critical SoH",
    lp_horizon: "Replace-soon horizon",
    lp_margin: "Critical margin",

    kpi_soh: "State of Health (SoH)",
    kpi_capacity: "Current Capacity",
    kpi_rul: "Remaining Useful Life",
    kpi_temperature: "Ambient Temp",

    tab_fleet: "Long-term Fleet View",
    tab_deep_dive: "Deep-Dive Sensor Logs",

    plot_heading: "Capacity Degradation & Prediction",
    plot_x_axis: "Usage Cycles",
    plot_y_axis: "Capacity (Ah)",
    plot_observed: "Observed Capacity",
    plot_trend: "Forecast Trend",
    plot_threshold_prefix: "Failure Threshold",
    plot_failure_marker: "Forecast Failure Cycle",
    plot_soh_heading: "State of Health by Cycle",
    plot_soh_axis: "SoH (%)",
    plot_soh_series: "State of Health",
    plot_soh_floor_prefix: "Critical SoH",

    dd_heading: "Individual Cycle Analysis",
    dd_intro: "Select a log file to view the sensor data (voltage, temperature, current).",
    dd_select_log: "Log File (newest first)",
    dd_voltage: "Voltage Discharge Profile",
    dd_temperature: "Thermal Behavior (°C)",
    dd_current: "Current Draw",
    dd_duration: "Test duration",
    dd_sample_axis: "Sample",
    dd_raw_table: "View Raw Sensor Table",
    dd_no_logs: "No log files listed for this site.",
    dd_missing_file_prefix: "File",
    dd_missing_file_suffix: "not found in the log directory. Move the archive CSVs there.",

    error_load_failed: "Could not load fleet data",
    error_no_assets: "No sites with discharge history were found.",
    error_no_asset_selected: "Select a site on the left.",
    error_forecast_failed: "Forecast unavailable",

    footer: "Telco Sentinel | Battery predictive analytics",
};
