use std::io;

use thiserror::Error;

use crate::services::estimation::ForecastError;
use crate::services::forecast_config::ForecastConfigError;
use crate::services::observation_yaml::ObservationYamlError;
use crate::services::validation::ValidationError;
use crate::services::workload_plot::WorkloadPlotError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to load forecast config: {0}")]
    Config(#[from] ForecastConfigError),
    #[error("observation log error: {0}")]
    Observations(#[from] ObservationYamlError),
    #[error("observation log contains an invalid record: {0}")]
    InvalidRecord(#[from] ValidationError),
    #[error("failed to forecast demand: {0}")]
    Forecast(#[from] ForecastError),
    #[error("failed to plot workload trends: {0}")]
    Plot(#[from] WorkloadPlotError),
    #[error("invalid observation date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("failed to serialize output: {0}")]
    Serialize(String),
    #[error("failed to write output file {path}: {source}")]
    WriteOutput { path: String, source: io::Error },
}
