//! Configuration module for the telco-sentinel application.

// Can all be private now because we have a public re-export.
mod debug;
mod persistence;
mod thresholds;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
pub use thresholds::{CONFIG_SCOPE, FORECAST, ForecastConfig, ForecastThresholds};
