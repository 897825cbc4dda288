mod forecast;
mod health;
mod report;

pub use {
    forecast::{FailureCycle, ForecastResult, HealthStatus, TrendLine},
    health::HealthPoint,
    report::AssetReport,
};
