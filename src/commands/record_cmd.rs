use chrono::NaiveDate;

use crate::commands::base_commands::Commands;
use crate::commands::command_error::CommandError;
use crate::domain::observation::WorkloadObservation;
use crate::services::forecast_config::ForecastConfig;
use crate::services::observation_yaml::append_observation;
use crate::services::validation::Validator;

pub fn record_command(cmd: Commands, config: &ForecastConfig) -> Result<(), CommandError> {
    if let Commands::Record {
        log: log_path,
        date,
        department,
        workload_hours,
        complexity_score,
    } = cmd
    {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| CommandError::InvalidDate(date.clone()))?;
        let observation = WorkloadObservation::new(date, department, workload_hours, complexity_score);
        let validator = Validator::new(config.complexity_score_range);

        let count = append_observation(&log_path, observation, &validator)?;
        log::info!("observation log {log_path} now holds {count} records");
        println!("Observation recorded in {log_path}");
    }
    Ok(())
}
