use crate::commands::base_commands::Commands;
use crate::commands::command_error::CommandError;
use crate::commands::report_format::{format_aggregate_table, serialize_output, write_output};
use crate::services::aggregation::aggregate;
use crate::services::forecast_config::ForecastConfig;
use crate::services::observation_yaml::load_observations_from_yaml_file;
use crate::services::validation::Validator;

pub fn aggregate_command(cmd: Commands, config: &ForecastConfig) -> Result<(), CommandError> {
    if let Commands::Aggregate {
        log: log_path,
        group_by,
        output,
        format,
    } = cmd
    {
        let observations = Validator::new(config.complexity_score_range)
            .validate_all(load_observations_from_yaml_file(&log_path)?)?;
        log::debug!("loaded {} observations from {log_path}", observations.len());
        let aggregates = aggregate(&observations, group_by);

        println!("{}", format_aggregate_table(&aggregates, group_by));
        if let Some(output) = output {
            write_output(&output, &serialize_output(&aggregates, format)?)?;
            println!("Aggregates written to {output}");
        }
    }
    Ok(())
}
