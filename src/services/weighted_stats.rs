//! Weighted statistics over `(x, y, weight)` samples.
//!
//! - Empty input or a zero total weight => `None`.
//! - A fit over samples that share one `x` has no defined slope; it is
//!   reported as flat (slope `0.0`) through the weighted mean.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedPoint {
    pub x: f64,
    pub y: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn value_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

const DEGENERATE_VARIANCE: f64 = 1e-12;

pub fn weighted_mean(points: &[WeightedPoint]) -> Option<f64> {
    let total_weight = total_weight(points)?;
    let sum: f64 = points.iter().map(|p| p.weight * p.y).sum();
    Some(sum / total_weight)
}

/// Weighted ordinary least squares fit of `y` against `x`.
pub fn weighted_linear_fit(points: &[WeightedPoint]) -> Option<LinearFit> {
    let total_weight = total_weight(points)?;
    let mean_x = points.iter().map(|p| p.weight * p.x).sum::<f64>() / total_weight;
    let mean_y = points.iter().map(|p| p.weight * p.y).sum::<f64>() / total_weight;

    let (covariance, variance) = points.iter().fold((0.0_f64, 0.0_f64), |(cov, var), p| {
        let dx = p.x - mean_x;
        (cov + p.weight * dx * (p.y - mean_y), var + p.weight * dx * dx)
    });

    let slope = if variance.abs() < DEGENERATE_VARIANCE {
        0.0
    } else {
        covariance / variance
    };
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

fn total_weight(points: &[WeightedPoint]) -> Option<f64> {
    let total: f64 = points.iter().map(|p| p.weight).sum();
    if points.is_empty() || total <= 0.0 {
        None
    } else {
        Some(total)
    }
}
