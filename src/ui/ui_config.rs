use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub kpi_card: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_width: f32,
    /// Rows shown in the raw sensor table before truncating
    pub raw_table_max_rows: usize,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(147, 197, 253), // Sky blue
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(18, 22, 30),
        side_panel: Color32::from_rgb(25, 25, 25),
        kpi_card: Color32::from_rgb(32, 38, 50),
    },
    side_panel_width: 200.0,
    raw_table_max_rows: 500,
};

impl UiConfig {
    /// Frame for Left/Right panels (Standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Card behind each headline metric
    pub fn kpi_frame(&self) -> Frame {
        Frame {
            fill: self.colors.kpi_card,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(10),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }

    /// Alert banner tinted by status
    pub fn banner_frame(&self, color: Color32) -> Frame {
        Frame {
            fill: color.linear_multiply(0.15),
            stroke: Stroke::new(1.0, color),
            inner_margin: Margin::symmetric(12, 8),
            corner_radius: CornerRadius::same(10),
            ..Default::default()
        }
    }
}
