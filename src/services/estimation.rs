use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::domain::forecast::{Confidence, DemandForecast, ForecastMethod};
use crate::domain::observation::WorkloadObservation;
use crate::services::forecast_config::ForecastConfig;
use crate::services::weighted_stats::{WeightedPoint, weighted_linear_fit, weighted_mean};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("invalid target date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("invalid history: observation #{index} has workload_hours {hours}")]
    InvalidHistory { index: usize, hours: f64 },
    #[error("forecast date {offset} days after {start} is out of range")]
    DateOutOfRange { start: NaiveDate, offset: usize },
}

/// Produces a demand forecast for one date from a snapshot of history.
///
/// Implementations must be deterministic and free of I/O: the same target
/// date and history always yield the same forecast.
pub trait DemandEstimator {
    fn estimate(
        &self,
        target_date: NaiveDate,
        history: &[WorkloadObservation],
    ) -> Result<DemandForecast, ForecastError>;
}

/// Recency-weighted blend of the window mean and a linear trend.
#[derive(Debug, Clone, Default)]
pub struct TrendEstimator {
    config: ForecastConfig,
}

impl TrendEstimator {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    fn fallback(&self, target_date: NaiveDate) -> DemandForecast {
        DemandForecast {
            target_date,
            predicted_demand: self.config.fallback_demand.max(0.0),
            confidence: Confidence::Low,
            method: ForecastMethod::FallbackDefault,
        }
    }

    fn confidence_for(&self, point_count: usize) -> Confidence {
        if point_count >= self.config.high_confidence_points {
            Confidence::High
        } else {
            Confidence::Medium
        }
    }

    /// One point per observed day inside the lookback window, valued at that
    /// day's mean hours.
    fn window_points(
        &self,
        target_date: NaiveDate,
        history: &[WorkloadObservation],
    ) -> Vec<WeightedPoint> {
        let lookback = i64::from(self.config.lookback_window_days);
        let mut days: BTreeMap<i64, (f64, usize)> = BTreeMap::new();
        for observation in history {
            let age = (target_date - observation.date).num_days();
            if age < 1 || age > lookback {
                continue;
            }
            let day = days.entry(age).or_insert((0.0, 0));
            day.0 += observation.workload_hours;
            day.1 += 1;
        }

        let half_life = self.config.recency_half_life_days;
        days.into_iter()
            .map(|(age, (hours, count))| {
                let age = age as f64;
                WeightedPoint {
                    x: -age,
                    y: hours / count as f64,
                    weight: 0.5_f64.powf(age / half_life),
                }
            })
            .collect()
    }
}

impl DemandEstimator for TrendEstimator {
    fn estimate(
        &self,
        target_date: NaiveDate,
        history: &[WorkloadObservation],
    ) -> Result<DemandForecast, ForecastError> {
        check_history(history)?;

        let points = self.window_points(target_date, history);
        if points.len() < self.config.min_points_for_trend {
            log::debug!(
                "{target_date}: {} points in the last {} days, using fallback demand",
                points.len(),
                self.config.lookback_window_days
            );
            return Ok(self.fallback(target_date));
        }

        let (Some(mean), Some(fit)) = (weighted_mean(&points), weighted_linear_fit(&points)) else {
            return Ok(self.fallback(target_date));
        };
        // x is measured in days relative to the target date.
        let trend = fit.value_at(0.0);
        let weight = self.config.trend_weight;
        let predicted = (1.0 - weight) * mean + weight * trend;
        log::debug!(
            "{target_date}: {} points, mean {mean:.3}, slope {:.3}, predicted {predicted:.3}",
            points.len(),
            fit.slope
        );

        Ok(DemandForecast {
            target_date,
            predicted_demand: predicted.max(0.0),
            confidence: self.confidence_for(points.len()),
            method: ForecastMethod::HistoricalTrend,
        })
    }
}

/// Forecasts demand for `target_date` (`YYYY-MM-DD`) using the default
/// trend estimator.
///
/// # Errors
/// - [`ForecastError::InvalidDate`] when the date does not parse.
/// - [`ForecastError::InvalidHistory`] when any observation has negative or
///   non-finite hours.
///
/// Too little history is not an error: the result is tagged
/// `fallback-default` instead.
pub fn forecast(
    target_date: &str,
    history: &[WorkloadObservation],
    config: &ForecastConfig,
) -> Result<DemandForecast, ForecastError> {
    let target_date = parse_target_date(target_date)?;
    TrendEstimator::new(config.clone()).estimate(target_date, history)
}

/// One forecast per day for `days` consecutive days from `start_date`.
pub fn forecast_series(
    start_date: &str,
    days: usize,
    history: &[WorkloadObservation],
    config: &ForecastConfig,
) -> Result<Vec<DemandForecast>, ForecastError> {
    let start_date = parse_target_date(start_date)?;
    let estimator = TrendEstimator::new(config.clone());
    forecast_series_with(&estimator, start_date, days, history)
}

pub fn forecast_series_with<E: DemandEstimator + ?Sized>(
    estimator: &E,
    start_date: NaiveDate,
    days: usize,
    history: &[WorkloadObservation],
) -> Result<Vec<DemandForecast>, ForecastError> {
    (0..days)
        .map(|offset| {
            let target_date = start_date
                .checked_add_days(Days::new(offset as u64))
                .ok_or(ForecastError::DateOutOfRange {
                    start: start_date,
                    offset,
                })?;
            estimator.estimate(target_date, history)
        })
        .collect()
}

pub fn parse_target_date(value: &str) -> Result<NaiveDate, ForecastError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ForecastError::InvalidDate(value.to_string()))
}

fn check_history(history: &[WorkloadObservation]) -> Result<(), ForecastError> {
    match history
        .iter()
        .position(|o| !o.workload_hours.is_finite() || o.workload_hours < 0.0)
    {
        Some(index) => Err(ForecastError::InvalidHistory {
            index,
            hours: history[index].workload_hours,
        }),
        None => Ok(()),
    }
}
