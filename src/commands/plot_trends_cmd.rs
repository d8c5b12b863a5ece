use crate::commands::base_commands::Commands;
use crate::commands::command_error::CommandError;
use crate::services::forecast_config::ForecastConfig;
use crate::services::workload_plot::plot_workload_trends_from_yaml_file;

pub fn plot_trends_command(cmd: Commands, config: &ForecastConfig) -> Result<(), CommandError> {
    if let Commands::PlotTrends {
        log: log_path,
        output,
        forecast_days,
    } = cmd
    {
        plot_workload_trends_from_yaml_file(&log_path, &output, forecast_days, config)?;
        println!("Workload plot written to {output}");
    }
    Ok(())
}
