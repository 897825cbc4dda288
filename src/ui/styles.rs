use {
    crate::{
        config::PLOT_CONFIG,
        models::HealthStatus,
        ui::UI_CONFIG,
    },
    eframe::egui::{Color32, RichText, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub trait StatusColor {
    fn color(&self) -> Color32;
}

impl StatusColor for HealthStatus {
    fn color(&self) -> Color32 {
        match self {
            Self::Healthy => PLOT_CONFIG.color_healthy,
            Self::ReplaceSoon => PLOT_CONFIG.color_replace_soon,
            Self::Critical => PLOT_CONFIG.color_critical,
        }
    }
}

/// Green when positive, red when negative.
pub fn get_outcome_color(value: f64) -> Color32 {
    if value >= 0.0 {
        PLOT_CONFIG.color_healthy
    } else {
        PLOT_CONFIG.color_critical
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    /// Big headline number with a caption and an optional colored delta.
    fn kpi_card(&mut self, label: &str, value: &str, delta: Option<(String, Color32)>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn kpi_card(&mut self, label: &str, value: &str, delta: Option<(String, Color32)>) {
        UI_CONFIG.kpi_frame().show(self, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label_subdued(label);
            ui.label(
                RichText::new(value)
                    .size(26.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            if let Some((text, color)) = delta {
                ui.label(RichText::new(text).small().color(color));
            }
        });
    }
}
