use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecastConfigError {
    #[error("failed to read forecast config: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse forecast config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid forecast config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Inclusive range accepted for `complexity_score`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct ComplexityRange {
    pub min: f64,
    pub max: f64,
}

impl ComplexityRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for ComplexityRange {
    fn default() -> Self {
        Self::new(0.0, 10.0)
    }
}

impl From<[f64; 2]> for ComplexityRange {
    fn from(bounds: [f64; 2]) -> Self {
        Self::new(bounds[0], bounds[1])
    }
}

impl From<ComplexityRange> for [f64; 2] {
    fn from(range: ComplexityRange) -> Self {
        [range.min, range.max]
    }
}

/// Tunable knobs of the validator and the demand estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub lookback_window_days: u32,
    pub min_points_for_trend: usize,
    pub recency_half_life_days: f64,
    pub complexity_score_range: ComplexityRange,
    pub high_confidence_points: usize,
    pub trend_weight: f64,
    pub fallback_demand: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            lookback_window_days: 90,
            min_points_for_trend: 3,
            recency_half_life_days: 14.0,
            complexity_score_range: ComplexityRange::default(),
            high_confidence_points: 10,
            trend_weight: 0.5,
            fallback_demand: 100.0,
        }
    }
}

impl ForecastConfig {
    /// Loads a config file, falling back to defaults for every missing key.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ForecastConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, ForecastConfigError> {
        // An empty document deserializes to unit, not to an empty mapping.
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ForecastConfig = serde_yaml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_optional(path: Option<&str>) -> Result<Self, ForecastConfigError> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ForecastConfigError> {
        if self.lookback_window_days == 0 {
            return Err(invalid("lookback_window_days", "must be greater than zero"));
        }
        if self.min_points_for_trend == 0 {
            return Err(invalid("min_points_for_trend", "must be greater than zero"));
        }
        if !self.recency_half_life_days.is_finite() || self.recency_half_life_days <= 0.0 {
            return Err(invalid(
                "recency_half_life_days",
                "must be a positive number",
            ));
        }
        let range = self.complexity_score_range;
        if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
            return Err(invalid(
                "complexity_score_range",
                &format!("[{}, {}] is not an ordered pair of numbers", range.min, range.max),
            ));
        }
        if !(0.0..=1.0).contains(&self.trend_weight) {
            return Err(invalid("trend_weight", "must be between 0 and 1"));
        }
        if !self.fallback_demand.is_finite() || self.fallback_demand < 0.0 {
            return Err(invalid("fallback_demand", "must be a non-negative number"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ForecastConfigError {
    ForecastConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
}
