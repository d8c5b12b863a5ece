use thiserror::Error;

use crate::domain::observation::WorkloadObservation;
use crate::services::forecast_config::ComplexityRange;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("department must not be empty")]
    EmptyDepartment,
    #[error("workload_hours must be a finite non-negative number, got {0}")]
    InvalidWorkloadHours(f64),
    #[error("complexity_score {value} is outside the allowed range [{min}, {max}]")]
    ComplexityOutOfRange { value: f64, min: f64, max: f64 },
    #[error("observation #{index} rejected: {source}")]
    Batch {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

/// Gatekeeper applied before an observation enters the workload history.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    complexity_range: ComplexityRange,
}

impl Validator {
    pub fn new(complexity_range: ComplexityRange) -> Self {
        Self { complexity_range }
    }

    pub fn validate(
        &self,
        observation: WorkloadObservation,
    ) -> Result<WorkloadObservation, ValidationError> {
        if observation.department.trim().is_empty() {
            return Err(ValidationError::EmptyDepartment);
        }
        let hours = observation.workload_hours;
        if !hours.is_finite() || hours < 0.0 {
            return Err(ValidationError::InvalidWorkloadHours(hours));
        }
        // NaN fails `contains`, so it is rejected here as well.
        if !self.complexity_range.contains(observation.complexity_score) {
            return Err(ValidationError::ComplexityOutOfRange {
                value: observation.complexity_score,
                min: self.complexity_range.min,
                max: self.complexity_range.max,
            });
        }
        Ok(observation)
    }

    /// Validates a batch wholesale: one bad record rejects all of them.
    pub fn validate_all(
        &self,
        observations: Vec<WorkloadObservation>,
    ) -> Result<Vec<WorkloadObservation>, ValidationError> {
        observations
            .into_iter()
            .enumerate()
            .map(|(index, observation)| {
                self.validate(observation)
                    .map_err(|source| ValidationError::Batch {
                        index,
                        source: Box::new(source),
                    })
            })
            .collect()
    }
}
