use egui_plot::{HLine, Line, LineStyle, PlotPoints, PlotUi, Points, VLine};

use crate::config::PLOT_CONFIG;
use crate::models::AssetReport;
use crate::ui::UI_TEXT;
use crate::utils::format_capacity;

/// Shared data every capacity layer reads from.
pub struct LayerContext<'a> {
    pub report: &'a AssetReport,
    pub failure_capacity_ah: f64,
}

pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. FAILURE THRESHOLD (dotted horizontal)
// ============================================================================
pub struct ThresholdLayer;

impl PlotLayer for ThresholdLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let name = format!(
            "{} ({})",
            UI_TEXT.plot_threshold_prefix,
            format_capacity(ctx.failure_capacity_ah)
        );
        plot_ui.hline(
            HLine::new(name, ctx.failure_capacity_ah)
                .color(PLOT_CONFIG.threshold_line_color)
                .width(PLOT_CONFIG.threshold_line_width)
                .style(LineStyle::Dotted {
                    spacing: PLOT_CONFIG.threshold_dot_spacing,
                }),
        );
    }
}

// ============================================================================
// 2. FORECAST TREND (dashed)
// ============================================================================
pub struct TrendLayer;

impl PlotLayer for TrendLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let points = ctx.report.forecast_line();
        if points.len() < 2 {
            return;
        }
        plot_ui.line(
            Line::new(UI_TEXT.plot_trend, PlotPoints::new(points))
                .color(PLOT_CONFIG.trend_line_color)
                .width(PLOT_CONFIG.trend_line_width)
                .style(LineStyle::Dashed {
                    length: PLOT_CONFIG.trend_dash_length,
                }),
        );
    }
}

// ============================================================================
// 3. OBSERVED CAPACITY (line + markers)
// ============================================================================
pub struct ObservedCapacityLayer;

impl PlotLayer for ObservedCapacityLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let points = ctx.report.observed_points();
        if points.is_empty() {
            return;
        }
        // Same name on both so the legend shows one entry.
        plot_ui.line(
            Line::new(UI_TEXT.plot_observed, PlotPoints::new(points.clone()))
                .color(PLOT_CONFIG.observed_capacity_color)
                .width(PLOT_CONFIG.observed_capacity_width),
        );
        plot_ui.points(
            Points::new(UI_TEXT.plot_observed, PlotPoints::new(points))
                .color(PLOT_CONFIG.observed_capacity_color)
                .radius(PLOT_CONFIG.observed_marker_radius)
                .filled(true),
        );
    }
}

// ============================================================================
// 4. FAILURE CYCLE MARKER (vertical)
// ============================================================================
pub struct FailureMarkerLayer;

impl PlotLayer for FailureMarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        // Nothing to mark when the trend never reaches the threshold.
        let Some(cycle) = ctx.report.forecast.predicted_failure_cycle.cycle() else {
            return;
        };
        plot_ui.vline(
            VLine::new(UI_TEXT.plot_failure_marker, cycle as f64)
                .color(PLOT_CONFIG.failure_marker_color)
                .width(PLOT_CONFIG.threshold_line_width)
                .style(LineStyle::Dashed {
                    length: PLOT_CONFIG.trend_dash_length / 2.0,
                }),
        );
    }
}
