#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod models;
mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the analyze binary)
pub use app::App;
pub use config::{ForecastThresholds, PERSISTENCE};
pub use data::{CycleHistorySet, MetadataIndex, load_metadata};
pub use engine::{FleetEntry, SentinelEngine};
pub use error::{SentinelError, SentinelResult};
pub use models::{AssetReport, HealthStatus};

// CLI argument parsing
use {
    clap::{Args, Parser},
    std::path::{Path, PathBuf},
};

/// Threshold overrides shared by the dashboard and the analyze tool.
/// Flags win over the JSON file, which wins over the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ThresholdArgs {
    /// Capacity (Ah) at which a battery counts as failed
    #[arg(long, global = true)]
    pub failure_capacity: Option<f64>,
    /// SoH (%) below which a site is Critical regardless of trend
    #[arg(long, global = true)]
    pub critical_soh: Option<f64>,
    /// Cycles ahead within which a forecast failure means Replace Soon
    #[arg(long, global = true)]
    pub horizon: Option<u32>,
    /// Cycles ahead within which a forecast failure means Critical
    #[arg(long, global = true)]
    pub margin: Option<u32>,
}

impl ThresholdArgs {
    pub fn resolve(&self, config: Option<&Path>) -> anyhow::Result<ForecastThresholds> {
        let mut t = match config {
            Some(path) => ForecastThresholds::from_json_file(path)?,
            None => ForecastThresholds::default(),
        };
        if let Some(v) = self.failure_capacity {
            t.failure_capacity_ah = v;
        }
        if let Some(v) = self.critical_soh {
            t.critical_soh_pct = v;
        }
        if let Some(v) = self.horizon {
            t.replace_soon_horizon_cycles = v;
        }
        if let Some(v) = self.margin {
            t.critical_margin_cycles = v;
        }
        t.validate()?;
        Ok(t)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Metadata index with one row per test
    #[arg(long, default_value = PERSISTENCE.data.metadata_path)]
    pub metadata: PathBuf,

    /// Directory holding the per-test sensor logs
    #[arg(long, default_value = PERSISTENCE.data.log_directory)]
    pub data_dir: PathBuf,

    /// JSON file overriding the forecast thresholds
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
