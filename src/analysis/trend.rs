use statrs::statistics::Statistics;

use crate::domain::CycleHistory;
use crate::error::{SentinelError, SentinelResult};
use crate::models::TrendLine;

/// Ordinary least squares of capacity against cycle index.
///
/// No weighting and no outlier rejection. Needs at least two distinct cycles;
/// `CycleHistory` guarantees indices are distinct, so that is just its length.
pub fn fit_trend(history: &CycleHistory) -> SentinelResult<TrendLine> {
    let n = history.len();
    if n < 2 {
        return Err(SentinelError::InsufficientData {
            asset_id: history.asset_id().to_string(),
            distinct_cycles: n,
        });
    }

    let xs: Vec<f64> = history.cycles().collect();
    let ys: Vec<f64> = history.capacities().collect();

    let x_mean = xs.iter().mean();
    let y_mean = ys.iter().mean();

    let (sxx, sxy) = xs
        .iter()
        .zip(&ys)
        .fold((0.0, 0.0), |(sxx, sxy), (&x, &y)| {
            let dx = x - x_mean;
            (sxx + dx * dx, sxy + dx * (y - y_mean))
        });

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    let residuals: Vec<f64> = xs
        .iter()
        .zip(&ys)
        .map(|(&x, &y)| y - (slope * x + intercept))
        .collect();

    let ssr: f64 = residuals.iter().map(|r| r * r).sum();
    let sst: f64 = ys.iter().map(|y| (y - y_mean) * (y - y_mean)).sum();

    let r_squared = if sst > 0.0 { 1.0 - ssr / sst } else { 1.0 };
    let residual_std_error = if n > 2 {
        (ssr / (n - 2) as f64).sqrt()
    } else {
        0.0
    };
    let max_abs_residual = residuals.iter().abs_max();

    Ok(TrendLine {
        slope,
        intercept,
        r_squared,
        residual_std_error,
        max_abs_residual,
        sample_count: n,
    })
}
