use {
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
    strum_macros::EnumIter,
};

use crate::{
    data::SensorTrace, error::SentinelResult, models::AssetReport, ui::UI_TEXT,
};

pub(crate) enum AppState {
    /// Metadata loaded and the engine is ready.
    Running,
    /// Metadata could not be read. Holds the message to show.
    LoadFailed(String),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::LoadFailed(UI_TEXT.error_no_assets.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub(crate) enum DashboardTab {
    #[default]
    Fleet,
    DeepDive,
}

impl DashboardTab {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Fleet => UI_TEXT.tab_fleet,
            Self::DeepDive => UI_TEXT.tab_deep_dive,
        }
    }
}

/// Forecast for the selected asset, recomputed when the selection changes.
pub(crate) struct AssetView {
    pub(crate) asset_id: String,
    pub(crate) result: SentinelResult<AssetReport>,
}

pub(crate) enum TraceOutcome {
    Loaded(SensorTrace),
    /// Listed in metadata but absent from the log directory.
    Missing,
    Failed(String),
}

#[derive(Default)]
pub(crate) struct SensorViewState {
    pub(crate) selected_file: Option<String>,
    /// Parsed traces keyed by filename.
    pub(crate) cache: HashMap<String, TraceOutcome>,
}

impl SensorViewState {
    pub(crate) fn selected_outcome(&self) -> Option<&TraceOutcome> {
        self.selected_file
            .as_ref()
            .and_then(|name| self.cache.get(name))
    }
}
