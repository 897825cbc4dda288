mod root;
mod state;

pub(crate) use state::{AppState, AssetView, DashboardTab, SensorViewState, TraceOutcome};

pub use root::App;
