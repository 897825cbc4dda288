use eframe::egui::{CentralPanel, Context, RichText, ScrollArea, SidePanel, Ui};
use strum::IntoEnumIterator;

use crate::app::{App, AppState, DashboardTab};
use crate::config::PLOT_CONFIG;
use crate::error::SentinelError;
use crate::models::AssetReport;
use crate::ui::styles::{StatusColor, UiStyleExt, get_outcome_color};
use crate::ui::ui_panels::{AssetListPanel, Panel, ThresholdsPanel};
use crate::ui::ui_plot_view::{show_capacity_plot, show_soh_plot};
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::{
    format_capacity, format_fade_rate, format_pct, format_rul, format_signed_pct,
    format_temperature,
};

impl App {
    pub(crate) fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_width)
            .resizable(false)
            .frame(UI_CONFIG.side_panel_frame())
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(UI_TEXT.lp_brand)
                        .heading()
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label_subdued(UI_TEXT.lp_subtitle);
                ui.separator();

                let statuses = (self.fleet_statuses.len() == self.asset_ids.len())
                    .then_some(self.fleet_statuses.as_slice());
                let clicked = AssetListPanel::new(
                    &self.asset_ids,
                    self.selected_asset.as_deref(),
                    statuses,
                )
                .render(ui);

                if let Some(id) = &self.selected_asset {
                    ui.add_space(8.0);
                    UI_CONFIG.kpi_frame().show(ui, |ui| {
                        ui.label(
                            RichText::new(format!("{} {}.", UI_TEXT.lp_info_prefix, id))
                                .color(PLOT_CONFIG.color_info),
                        );
                        ui.label_subdued(UI_TEXT.lp_info_suffix);
                    });
                }

                if let Some(engine) = &self.engine {
                    ThresholdsPanel::new(engine.thresholds()).render(ui);
                }

                ui.add_space(12.0);
                ui.label_subdued(UI_TEXT.footer);

                for id in clicked {
                    self.select_asset(id);
                }
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                if let AppState::LoadFailed(msg) = &self.state {
                    render_load_error(ui, msg);
                    return;
                }
                let Some(asset_id) = self.selected_asset.clone() else {
                    let text = if self.asset_ids.is_empty() {
                        UI_TEXT.error_no_assets
                    } else {
                        UI_TEXT.error_no_asset_selected
                    };
                    ui.label(RichText::new(text).color(PLOT_CONFIG.color_warning));
                    return;
                };

                ui.heading(
                    RichText::new(format!("Asset Health: {}", asset_id))
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.add_space(6.0);

                match self.current.as_ref().map(|v| &v.result) {
                    Some(Ok(report)) => render_kpi_row(ui, report),
                    Some(Err(e)) => render_forecast_error(ui, e),
                    None => {}
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    for tab in DashboardTab::iter() {
                        ui.selectable_value(&mut self.tab, tab, tab.label());
                    }
                });
                ui.separator();

                match self.tab {
                    DashboardTab::Fleet => self.render_fleet_tab(ui),
                    DashboardTab::DeepDive => self.render_deep_dive(ui),
                }
            });
    }

    fn render_fleet_tab(&self, ui: &mut Ui) {
        let Some(Ok(report)) = self.current.as_ref().map(|v| &v.result) else {
            return;
        };
        let Some(engine) = &self.engine else { return };
        let thresholds = engine.thresholds();

        ScrollArea::vertical()
            .id_salt("fleet_tab")
            .show(ui, |ui| {
                ui.label_subheader(UI_TEXT.plot_heading);
                show_capacity_plot(ui, report, thresholds.failure_capacity_ah);
                ui.add_space(8.0);
                render_status_banner(ui, report, thresholds.critical_soh_pct);
                ui.add_space(8.0);
                ui.label_subheader(UI_TEXT.plot_soh_heading);
                show_soh_plot(ui, report, thresholds.critical_soh_pct);
            });
    }
}

fn render_kpi_row(ui: &mut Ui, report: &AssetReport) {
    let f = &report.forecast;
    let soh_delta = report
        .latest_health()
        .map(|p| p.delta_from_new())
        .unwrap_or(0.0);
    let current_capacity = report
        .latest_sample()
        .map(|s| s.capacity)
        .unwrap_or(report.record.current_capacity);

    ui.columns(4, |cols| {
        cols[0].kpi_card(
            UI_TEXT.kpi_soh,
            &format_pct(f.current_soh_pct.clamp(0.0, 100.0)),
            Some((format_signed_pct(soh_delta), get_outcome_color(soh_delta))),
        );
        cols[1].kpi_card(
            UI_TEXT.kpi_capacity,
            &format_capacity(current_capacity),
            Some((format_fade_rate(f.slope), get_outcome_color(f.slope))),
        );
        cols[2].kpi_card(
            UI_TEXT.kpi_rul,
            &format_rul(f.remaining_useful_life),
            Some((f.status_label.to_string(), f.status_label.color())),
        );
        cols[3].kpi_card(
            UI_TEXT.kpi_temperature,
            &format_temperature(report.latest_temperature()),
            None,
        );
    });
}

fn render_status_banner(ui: &mut Ui, report: &AssetReport, critical_soh_pct: f64) {
    let status = report.forecast.status_label;
    UI_CONFIG.banner_frame(status.color()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(
            RichText::new(report.status_message(critical_soh_pct))
                .strong()
                .color(status.color()),
        );
    });
}

fn render_forecast_error(ui: &mut Ui, error: &SentinelError) {
    UI_CONFIG
        .banner_frame(PLOT_CONFIG.color_error)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                RichText::new(format!(
                    "{} ({}): {}",
                    UI_TEXT.error_forecast_failed,
                    error.kind(),
                    error.asset_id()
                ))
                .strong()
                .color(PLOT_CONFIG.color_error),
            );
            ui.label(RichText::new(error.to_string()).color(PLOT_CONFIG.color_text_neutral));
        });
}

fn render_load_error(ui: &mut Ui, msg: &str) {
    UI_CONFIG
        .banner_frame(PLOT_CONFIG.color_critical)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                RichText::new(UI_TEXT.error_load_failed)
                    .strong()
                    .color(PLOT_CONFIG.color_critical),
            );
            ui.label(RichText::new(msg).color(PLOT_CONFIG.color_text_neutral));
        });
}
