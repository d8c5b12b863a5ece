use crate::commands::base_commands::Commands;
use crate::commands::command_error::CommandError;
use crate::commands::report_format::{format_forecast_report, serialize_output, write_output};
use crate::services::aggregation::{department_names, filter_department};
use crate::services::estimation::forecast_series;
use crate::services::forecast_config::ForecastConfig;
use crate::services::observation_yaml::load_observations_from_yaml_file;
use crate::services::validation::Validator;

pub fn forecast_command(cmd: Commands, config: &ForecastConfig) -> Result<(), CommandError> {
    if let Commands::Forecast {
        log: log_path,
        target_date,
        department,
        days,
        output,
        format,
    } = cmd
    {
        let mut observations = Validator::new(config.complexity_score_range)
            .validate_all(load_observations_from_yaml_file(&log_path)?)?;
        if let Some(department) = department.as_deref() {
            let known = department_names(&observations);
            if !known.iter().any(|name| name == department) {
                log::warn!(
                    "no history for department {department}, known departments: {}",
                    known.join(", ")
                );
            }
            observations = filter_department(&observations, department);
        }
        log::debug!("forecasting from {} observations", observations.len());

        let forecasts = forecast_series(&target_date, days, &observations, config)?;

        println!(
            "{}",
            format_forecast_report(&forecasts, &data_source_name(&log_path), department.as_deref())
        );
        if let Some(output) = output {
            write_output(&output, &serialize_output(&forecasts, format)?)?;
            println!("Forecast written to {output}");
        }
    }
    Ok(())
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
