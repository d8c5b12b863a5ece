pub mod aggregate_cmd;
pub mod base_commands;
pub mod command_error;
pub mod completions_cmd;
pub mod forecast_cmd;
pub mod plot_trends_cmd;
pub mod record_cmd;
pub mod report_format;
