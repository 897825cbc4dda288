//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- CAPACITY CHART ---
    pub observed_capacity_color: Color32,
    pub observed_capacity_width: f32,
    /// Radius of the per-cycle markers on the observed line
    pub observed_marker_radius: f32,
    pub trend_line_color: Color32,
    pub trend_line_width: f32,
    /// Dash length of the forecast trend line
    pub trend_dash_length: f32,
    pub threshold_line_color: Color32,
    pub threshold_line_width: f32,
    /// Spacing of the dotted failure threshold line
    pub threshold_dot_spacing: f32,
    /// Vertical marker at the forecast failure cycle
    pub failure_marker_color: Color32,
    pub soh_line_color: Color32,
    pub soh_plot_height: f32,

    // --- DEEP DIVE ---
    pub voltage_color: Color32,
    pub temperature_color: Color32,
    pub current_color: Color32,
    pub sensor_line_width: f32,
    pub sensor_plot_height: f32,
    pub capacity_plot_height: f32,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)

    // --- SEMANTIC COLORS ---
    pub color_healthy: Color32,
    pub color_replace_soon: Color32,
    pub color_critical: Color32,
    pub color_error: Color32,

    pub color_info: Color32,
    pub color_warning: Color32,

    pub color_text_neutral: Color32, // Main values (white)
    pub color_text_primary: Color32,
    pub color_text_subdued: Color32, // Explanations/Context (Darker Gray)

    // UI WIDGET STYLES
    pub color_widget_background: Color32, // Dark background for custom widgets
    pub color_widget_border: Color32,     // Subtle border
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    observed_capacity_color: Color32::from_rgb(96, 165, 250), // Light blue
    observed_capacity_width: 2.0,
    observed_marker_radius: 2.5,
    trend_line_color: Color32::from_rgb(255, 165, 0), // Orange
    trend_line_width: 2.0,
    trend_dash_length: 10.0,
    threshold_line_color: Color32::from_rgb(220, 38, 38), // Red
    threshold_line_width: 1.5,
    threshold_dot_spacing: 6.0,
    failure_marker_color: Color32::from_rgb(255, 120, 60),
    soh_line_color: Color32::from_rgb(167, 139, 250), // Violet
    soh_plot_height: 220.0,

    voltage_color: Color32::from_rgb(5, 150, 105),      // Emerald
    temperature_color: Color32::from_rgb(220, 38, 38), // Red
    current_color: Color32::from_rgb(96, 165, 250),
    sensor_line_width: 1.5,
    sensor_plot_height: 260.0,
    capacity_plot_height: 420.0,

    plot_y_padding_pct: 0.05,

    color_healthy: Color32::from_rgb(100, 255, 100),
    color_replace_soon: Color32::from_rgb(255, 215, 0), // Gold
    color_critical: Color32::from_rgb(255, 80, 80),
    color_error: Color32::from_rgb(255, 120, 60),

    color_info: Color32::from_rgb(173, 216, 230), // Light Blue
    color_warning: Color32::from_rgb(255, 215, 0),

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    color_widget_background: Color32::from_black_alpha(40),
    color_widget_border: Color32::from_gray(60),
};
