use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        };
        f.write_str(label)
    }
}

/// Which estimation path produced a forecast value.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ForecastMethod {
    HistoricalTrend,
    FallbackDefault,
}

impl fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ForecastMethod::HistoricalTrend => "historical-trend",
            ForecastMethod::FallbackDefault => "fallback-default",
        };
        f.write_str(label)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DemandForecast {
    pub target_date: NaiveDate,
    pub predicted_demand: f64,
    pub confidence: Confidence,
    pub method: ForecastMethod,
}
