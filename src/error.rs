//! Error taxonomy for the Health & Forecast Engine.
//!
//! Every variant names the asset and the defect so the presentation layer can
//! show it verbatim. File-level failures (I/O, CSV syntax) travel as
//! `anyhow::Error` instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SentinelError {
    /// Malformed or missing reference data.
    #[error("Invalid input for asset '{asset_id}': {reason}")]
    InvalidInput { asset_id: String, reason: String },

    /// Regression needs at least two distinct cycles.
    #[error(
        "Insufficient data for asset '{asset_id}': {distinct_cycles} distinct cycle(s), at least 2 required for a trend"
    )]
    InsufficientData {
        asset_id: String,
        distinct_cycles: usize,
    },

    /// Duplicate or backwards cycle indices inside one series.
    #[error("Data quality defect for asset '{asset_id}': {reason}")]
    DataQuality { asset_id: String, reason: String },
}

impl SentinelError {
    pub fn invalid_input(asset_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            asset_id: asset_id.into(),
            reason: reason.into(),
        }
    }

    pub fn data_quality(asset_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataQuality {
            asset_id: asset_id.into(),
            reason: reason.into(),
        }
    }

    pub fn asset_id(&self) -> &str {
        match self {
            Self::InvalidInput { asset_id, .. }
            | Self::InsufficientData { asset_id, .. }
            | Self::DataQuality { asset_id, .. } => asset_id,
        }
    }

    /// Short label for tables and badges.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Invalid input",
            Self::InsufficientData { .. } => "Insufficient data",
            Self::DataQuality { .. } => "Data quality",
        }
    }
}

pub type SentinelResult<T> = std::result::Result<T, SentinelError>;
