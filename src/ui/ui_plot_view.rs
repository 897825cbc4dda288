use eframe::egui::{Color32, Ui};
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints};

use crate::config::PLOT_CONFIG;
use crate::data::SensorColumn;
use crate::models::AssetReport;
use crate::ui::UI_TEXT;
use crate::ui::plot_layers::{
    FailureMarkerLayer, LayerContext, ObservedCapacityLayer, PlotLayer, ThresholdLayer,
    TrendLayer,
};
use crate::utils::format_pct;

/// Lowest and highest y the capacity chart has to show.
fn capacity_y_range(report: &AssetReport, failure_capacity_ah: f64) -> (f64, f64) {
    let ys = report
        .observed_points()
        .into_iter()
        .chain(report.forecast_line())
        .map(|[_, y]| y)
        .chain(std::iter::once(failure_capacity_ah))
        .filter(|y| y.is_finite());
    ys.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
        (lo.min(y), hi.max(y))
    })
}

/// Observed capacity, forecast trend and failure threshold on one chart.
pub(crate) fn show_capacity_plot(ui: &mut Ui, report: &AssetReport, failure_capacity_ah: f64) {
    let ctx = LayerContext {
        report,
        failure_capacity_ah,
    };
    // Drawn back to front
    let layers: [&dyn PlotLayer; 4] = [
        &ThresholdLayer,
        &FailureMarkerLayer,
        &TrendLayer,
        &ObservedCapacityLayer,
    ];

    let (y_min, y_max) = capacity_y_range(report, failure_capacity_ah);
    let pad = ((y_max - y_min).abs() * PLOT_CONFIG.plot_y_padding_pct).max(0.01);

    Plot::new(format!("capacity_plot_{}", report.asset_id()))
        .height(PLOT_CONFIG.capacity_plot_height)
        .legend(Legend::default())
        .x_axis_label(UI_TEXT.plot_x_axis)
        .y_axis_label(UI_TEXT.plot_y_axis)
        .include_y(y_min - pad)
        .include_y(y_max + pad)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        });
}

/// SoH per observed cycle with the critical floor for reference.
pub(crate) fn show_soh_plot(ui: &mut Ui, report: &AssetReport, critical_soh_pct: f64) {
    let points = report.soh_points();
    let floor_name = format!(
        "{} ({})",
        UI_TEXT.plot_soh_floor_prefix,
        format_pct(critical_soh_pct)
    );

    Plot::new(format!("soh_plot_{}", report.asset_id()))
        .height(PLOT_CONFIG.soh_plot_height)
        .legend(Legend::default())
        .x_axis_label(UI_TEXT.plot_x_axis)
        .y_axis_label(UI_TEXT.plot_soh_axis)
        .include_y(critical_soh_pct)
        .include_y(100.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.hline(
                HLine::new(floor_name, critical_soh_pct)
                    .color(PLOT_CONFIG.color_critical)
                    .width(PLOT_CONFIG.threshold_line_width)
                    .style(LineStyle::Dotted {
                        spacing: PLOT_CONFIG.threshold_dot_spacing,
                    }),
            );
            plot_ui.line(
                Line::new(UI_TEXT.plot_soh_series, PlotPoints::new(points))
                    .color(PLOT_CONFIG.soh_line_color)
                    .width(PLOT_CONFIG.observed_capacity_width),
            );
        });
}

/// One sensor column plotted against its row index.
pub(crate) fn show_sensor_plot(
    ui: &mut Ui,
    id: &str,
    column: &SensorColumn,
    color: Color32,
    y_label: &str,
) {
    let points = column.points_by_index();
    Plot::new(id.to_string())
        .height(PLOT_CONFIG.sensor_plot_height)
        .x_axis_label(UI_TEXT.dd_sample_axis)
        .y_axis_label(y_label.to_string())
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(column.name.as_str(), PlotPoints::new(points))
                    .color(color)
                    .width(PLOT_CONFIG.sensor_line_width),
            );
        });
}
