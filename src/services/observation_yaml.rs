use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::observation::WorkloadObservation;
use crate::services::validation::{ValidationError, Validator};

#[derive(Error, Debug)]
pub enum ObservationYamlError {
    #[error("failed to read observation log {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write observation log {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse observation yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid date in observation #{index}: {value} (expected YYYY-MM-DD)")]
    InvalidDate { index: usize, value: String },
    #[error("observation rejected: {0}")]
    Rejected(#[from] ValidationError),
}

#[derive(Debug, Serialize, Deserialize)]
struct ObservationRecord {
    date: String,
    department: String,
    workload_hours: f64,
    complexity_score: f64,
}

impl From<&WorkloadObservation> for ObservationRecord {
    fn from(observation: &WorkloadObservation) -> Self {
        Self {
            date: observation.date.format("%Y-%m-%d").to_string(),
            department: observation.department.clone(),
            workload_hours: observation.workload_hours,
            complexity_score: observation.complexity_score,
        }
    }
}

/// Loads the observation log at `path`. A log that does not exist yet is
/// empty.
pub fn load_observations_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<WorkloadObservation>, ObservationYamlError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ObservationYamlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_observations_from_yaml_str(&contents)
}

pub fn deserialize_observations_from_yaml_str(
    input: &str,
) -> Result<Vec<WorkloadObservation>, ObservationYamlError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Vec<ObservationRecord> = serde_yaml::from_str(input)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let date = NaiveDate::parse_from_str(record.date.trim(), "%Y-%m-%d").map_err(|_| {
                ObservationYamlError::InvalidDate {
                    index,
                    value: record.date.clone(),
                }
            })?;
            Ok(WorkloadObservation {
                date,
                department: record.department,
                workload_hours: record.workload_hours,
                complexity_score: record.complexity_score,
            })
        })
        .collect()
}

pub fn serialize_observations_to_yaml<W: Write>(
    writer: &mut W,
    observations: &[WorkloadObservation],
) -> io::Result<()> {
    let records: Vec<ObservationRecord> = observations.iter().map(ObservationRecord::from).collect();
    let yaml = serde_yaml::to_string(&records).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

/// Validates `observation` and appends it to the log at `path`.
///
/// Existing records are never modified; a rejected observation leaves the
/// file untouched.
pub fn append_observation<P: AsRef<Path>>(
    path: P,
    observation: WorkloadObservation,
    validator: &Validator,
) -> Result<usize, ObservationYamlError> {
    let path = path.as_ref();
    let observation = validator.validate(observation)?;

    let mut observations = load_observations_from_yaml_file(path)?;
    observations.push(observation);

    let mut buffer = Vec::new();
    serialize_observations_to_yaml(&mut buffer, &observations).map_err(|source| {
        ObservationYamlError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;
    std::fs::write(path, buffer).map_err(|source| ObservationYamlError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("{} observations in {}", observations.len(), path.display());
    Ok(observations.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{observation, on_date};
    use assert_fs::prelude::*;

    #[test]
    fn deserializes_observation_records() {
        let yaml = "- date: 2026-03-01\n  department: Sales\n  workload_hours: 40.0\n  complexity_score: 3.5\n- date: 2026-03-02\n  department: Support\n  workload_hours: 12\n  complexity_score: 7\n";

        let observations = deserialize_observations_from_yaml_str(yaml).unwrap();

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].date, on_date(2026, 3, 1));
        assert_eq!(observations[0].department, "Sales");
        assert_eq!(observations[0].complexity_score, 3.5);
        assert_eq!(observations[1].workload_hours, 12.0);
    }

    #[test]
    fn empty_document_is_an_empty_log() {
        assert!(deserialize_observations_from_yaml_str("").unwrap().is_empty());
        assert!(deserialize_observations_from_yaml_str("[]").unwrap().is_empty());
    }

    #[test]
    fn reports_the_index_of_a_malformed_date() {
        let yaml = "- date: 2026-03-01\n  department: Sales\n  workload_hours: 1\n  complexity_score: 1\n- date: 03/02/2026\n  department: Sales\n  workload_hours: 1\n  complexity_score: 1\n";

        let err = deserialize_observations_from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            ObservationYamlError::InvalidDate { index: 1, ref value } if value == "03/02/2026"
        ));
    }

    #[test]
    fn rejects_records_with_missing_fields() {
        let err = deserialize_observations_from_yaml_str("- date: 2026-03-01\n").unwrap_err();
        assert!(matches!(err, ObservationYamlError::Parse(_)));
    }

    #[test]
    fn serializes_dates_in_iso_format() {
        let mut buffer = Vec::new();
        serialize_observations_to_yaml(&mut buffer, &[observation(on_date(2026, 3, 9), "Ops", 6.5)])
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("2026-03-09"));
        assert!(output.contains("department: Ops"));
        assert!(output.contains("workload_hours: 6.5"));
    }

    #[test]
    fn missing_log_file_loads_as_empty() {
        let temp = assert_fs::TempDir::new().unwrap();
        let observations = load_observations_from_yaml_file(temp.path().join("log.yaml")).unwrap();
        assert!(observations.is_empty());
    }

    #[test]
    fn append_keeps_existing_records_in_order() {
        let temp = assert_fs::TempDir::new().unwrap();
        let log = temp.child("workload.yaml");
        let validator = Validator::default();

        append_observation(log.path(), observation(on_date(2026, 3, 1), "Sales", 40.0), &validator)
            .unwrap();
        let count = append_observation(
            log.path(),
            observation(on_date(2026, 2, 1), "Support", 8.0),
            &validator,
        )
        .unwrap();

        assert_eq!(count, 2);
        let stored = load_observations_from_yaml_file(log.path()).unwrap();
        assert_eq!(stored[0], observation(on_date(2026, 3, 1), "Sales", 40.0));
        assert_eq!(stored[1], observation(on_date(2026, 2, 1), "Support", 8.0));
    }

    #[test]
    fn rejected_observation_leaves_the_log_untouched() {
        let temp = assert_fs::TempDir::new().unwrap();
        let log = temp.child("workload.yaml");
        let validator = Validator::default();
        append_observation(log.path(), observation(on_date(2026, 3, 1), "Sales", 40.0), &validator)
            .unwrap();
        let before = std::fs::read_to_string(log.path()).unwrap();

        let err = append_observation(
            log.path(),
            observation(on_date(2026, 3, 2), "Sales", -5.0),
            &validator,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ObservationYamlError::Rejected(ValidationError::InvalidWorkloadHours(_))
        ));
        assert_eq!(std::fs::read_to_string(log.path()).unwrap(), before);
    }
}
