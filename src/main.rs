use std::process::ExitCode;

use clap::Parser;
use workload_forecasts::commands::aggregate_cmd::aggregate_command;
use workload_forecasts::commands::base_commands::{CliArgs, Commands};
use workload_forecasts::commands::command_error::CommandError;
use workload_forecasts::commands::completions_cmd::completions_command;
use workload_forecasts::commands::forecast_cmd::forecast_command;
use workload_forecasts::commands::plot_trends_cmd::plot_trends_command;
use workload_forecasts::commands::record_cmd::record_command;
use workload_forecasts::services::forecast_config::ForecastConfig;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(), CommandError> {
    let config = ForecastConfig::load_optional(args.config.as_deref())?;
    match args.command {
        cmd @ Commands::Record { .. } => record_command(cmd, &config),
        cmd @ Commands::Aggregate { .. } => aggregate_command(cmd, &config),
        cmd @ Commands::Forecast { .. } => forecast_command(cmd, &config),
        cmd @ Commands::PlotTrends { .. } => plot_trends_command(cmd, &config),
        cmd @ Commands::Completions { .. } => {
            completions_command(cmd);
            Ok(())
        }
    }
}
