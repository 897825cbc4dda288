mod plot_layers;
mod sensor_view;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_render;
mod ui_text;

pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
