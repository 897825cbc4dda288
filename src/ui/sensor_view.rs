use eframe::egui::{CollapsingHeader, ComboBox, Grid, RichText, ScrollArea, Ui};

use crate::app::{App, TraceOutcome};
use crate::config::PLOT_CONFIG;
use crate::data::{
    CURRENT_COLUMN, LogFileRef, SensorColumn, SensorTrace, TEMPERATURE_COLUMN, VOLTAGE_COLUMN,
};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_plot_view::show_sensor_plot;
use crate::ui::{UI_CONFIG, UI_TEXT};

fn log_file_label(file: &LogFileRef) -> String {
    format!("#{} {} | {}", file.test_id, file.kind, file.filename)
}

impl App {
    pub(crate) fn render_deep_dive(&mut self, ui: &mut Ui) {
        ui.label_subheader(UI_TEXT.dd_heading);
        ui.label_subdued(UI_TEXT.dd_intro);
        ui.add_space(4.0);

        let mut chosen = self.sensor.selected_file.clone();
        let files = self.log_files();
        if files.is_empty() {
            ui.label(RichText::new(UI_TEXT.dd_no_logs).color(PLOT_CONFIG.color_warning));
            return;
        }

        ComboBox::from_label(UI_TEXT.dd_select_log)
            .selected_text(chosen.as_deref().unwrap_or("-"))
            .width(360.0)
            .show_ui(ui, |ui| {
                for file in files {
                    ui.selectable_value(
                        &mut chosen,
                        Some(file.filename.clone()),
                        log_file_label(file),
                    );
                }
            });

        if chosen != self.sensor.selected_file {
            if let Some(filename) = chosen {
                self.select_log_file(filename);
            }
        }

        ui.add_space(6.0);
        match self.sensor.selected_outcome() {
            Some(TraceOutcome::Loaded(trace)) => render_trace(ui, trace),
            Some(TraceOutcome::Missing) => {
                let name = self.sensor.selected_file.as_deref().unwrap_or_default();
                ui.label(
                    RichText::new(format!(
                        "{} '{}' {}",
                        UI_TEXT.dd_missing_file_prefix, name, UI_TEXT.dd_missing_file_suffix
                    ))
                    .color(PLOT_CONFIG.color_warning),
                );
            }
            Some(TraceOutcome::Failed(msg)) => {
                ui.label(RichText::new(msg).color(PLOT_CONFIG.color_error));
            }
            None => {}
        }
    }
}

fn render_trace(ui: &mut Ui, trace: &SensorTrace) {
    if let Some(secs) = trace.duration_s() {
        ui.metric(
            UI_TEXT.dd_duration,
            &format!("{:.0} s", secs),
            PLOT_CONFIG.color_text_neutral,
        );
    }

    ui.columns(3, |cols| {
        sensor_column(
            &mut cols[0],
            "voltage_plot",
            UI_TEXT.dd_voltage,
            trace.column_or_first(VOLTAGE_COLUMN),
            "Volts",
            PLOT_CONFIG.voltage_color,
        );
        sensor_column(
            &mut cols[1],
            "temperature_plot",
            UI_TEXT.dd_temperature,
            trace.column_or_first(TEMPERATURE_COLUMN),
            "°C",
            PLOT_CONFIG.temperature_color,
        );
        sensor_column(
            &mut cols[2],
            "current_plot",
            UI_TEXT.dd_current,
            trace.column_or_first(CURRENT_COLUMN),
            "Amps",
            PLOT_CONFIG.current_color,
        );
    });

    ui.add_space(6.0);
    CollapsingHeader::new(UI_TEXT.dd_raw_table)
        .default_open(false)
        .show(ui, |ui| render_raw_table(ui, trace));
}

fn sensor_column(
    ui: &mut Ui,
    id: &str,
    heading: &str,
    column: Option<&SensorColumn>,
    y_label: &str,
    color: eframe::egui::Color32,
) {
    ui.label_subheader(heading);
    match column {
        Some(col) => show_sensor_plot(ui, id, col, color, y_label),
        None => ui.label_subdued("-"),
    }
}

fn render_raw_table(ui: &mut Ui, trace: &SensorTrace) {
    let rows = trace.row_count();
    let shown = rows.min(UI_CONFIG.raw_table_max_rows);
    if shown < rows {
        ui.label_subdued(format!("First {} of {} rows", shown, rows));
    }

    ScrollArea::both()
        .id_salt("raw_sensor_table")
        .max_height(320.0)
        .show(ui, |ui| {
            Grid::new("raw_sensor_grid")
                .striped(true)
                .num_columns(trace.columns.len())
                .show(ui, |ui| {
                    for header in trace.headers() {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for row in 0..shown {
                        for col in &trace.columns {
                            let cell = col
                                .values
                                .get(row)
                                .copied()
                                .flatten()
                                .map(|v| format!("{:.4}", v))
                                .unwrap_or_default();
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });
}
