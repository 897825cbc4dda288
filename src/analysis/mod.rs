// Health & Forecast Engine: pure functions over one asset's cycle history
mod asset_forecast;
mod rul;
mod soh;
mod status;
mod trend;

pub use asset_forecast::forecast_asset;
pub use rul::{predict_failure_cycle, remaining_useful_life};
pub use soh::compute_soh;
pub use status::classify_status;
pub use trend::fit_trend;
