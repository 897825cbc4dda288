use eframe::egui::{RichText, ScrollArea, Ui};

use crate::config::{ForecastThresholds, PLOT_CONFIG};
use crate::models::HealthStatus;
use crate::ui::styles::{StatusColor, UiStyleExt, colored_subsection_heading};
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::{format_capacity, format_pct};

pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

fn section_heading(ui: &mut Ui, text: &str) {
    ui.add_space(6.0);
    ui.label(
        RichText::new(text)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    ui.separator();
}

/// Site picker. Emits the id the user clicked.
pub struct AssetListPanel<'a> {
    asset_ids: &'a [String],
    selected: Option<&'a str>,
    /// Status per id when the fleet report is cached, in the same order.
    statuses: Option<&'a [Option<HealthStatus>]>,
}

impl<'a> AssetListPanel<'a> {
    pub fn new(
        asset_ids: &'a [String],
        selected: Option<&'a str>,
        statuses: Option<&'a [Option<HealthStatus>]>,
    ) -> Self {
        Self {
            asset_ids,
            selected,
            statuses,
        }
    }
}

impl Panel for AssetListPanel<'_> {
    type Event = String;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.label(colored_subsection_heading(UI_TEXT.lp_select_site));

        ScrollArea::vertical()
            .id_salt("asset_list")
            .max_height(260.0)
            .show(ui, |ui| {
                for (i, id) in self.asset_ids.iter().enumerate() {
                    let is_selected = self.selected == Some(id.as_str());
                    let status = self
                        .statuses
                        .and_then(|s| s.get(i).copied().flatten());
                    let text = match status {
                        Some(s) => RichText::new(format!("{}  [{}]", id, s)).color(s.color()),
                        None => RichText::new(id.as_str()),
                    };
                    if ui.selectable_label(is_selected, text).clicked() && !is_selected {
                        events.push(id.clone());
                    }
                }
            });
        events
    }
}

/// Read-only view of the thresholds the engine is running with.
pub struct ThresholdsPanel<'a> {
    thresholds: &'a ForecastThresholds,
}

impl<'a> ThresholdsPanel<'a> {
    pub fn new(thresholds: &'a ForecastThresholds) -> Self {
        Self { thresholds }
    }
}

impl Panel for ThresholdsPanel<'_> {
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        section_heading(ui, UI_TEXT.lp_thresholds);
        let t = self.thresholds;
        let value_color = PLOT_CONFIG.color_text_neutral;
        ui.metric(
            UI_TEXT.lp_failure_capacity,
            &format_capacity(t.failure_capacity_ah),
            value_color,
        );
        ui.metric(
            UI_TEXT.lp_critical_soh,
            &format_pct(t.critical_soh_pct),
            value_color,
        );
        ui.metric(
            UI_TEXT.lp_horizon,
            &format!("{} cycles", t.replace_soon_horizon_cycles),
            value_color,
        );
        ui.metric(
            UI_TEXT.lp_margin,
            &format!("{} cycles", t.critical_margin_cycles),
            value_color,
        );
        Vec::new()
    }
}
