use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::aggregate::GroupBy;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Forecast config YAML (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a workload observation and append it to the observation log
    Record {
        /// Observation log YAML file
        #[arg(short, long)]
        log: String,
        /// Observation date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_date())]
        date: String,
        /// Department name
        #[arg(short = 'p', long)]
        department: String,
        /// Workload hours
        #[arg(short = 'w', long = "hours", allow_negative_numbers = true)]
        workload_hours: f64,
        /// Complexity score
        #[arg(short = 'x', long = "complexity", allow_negative_numbers = true)]
        complexity_score: f64,
    },
    /// Aggregate observations into mean hours per group
    Aggregate {
        /// Observation log YAML file
        #[arg(short, long)]
        log: String,
        /// Grouping key
        #[arg(short, long, value_enum, default_value_t = GroupBy::Date)]
        group_by: GroupBy,
        /// Optional output file for the serialized aggregates
        #[arg(short, long)]
        output: Option<String>,
        /// Serialization format of the output file
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Forecast demand for a date or a series of days
    Forecast {
        /// Observation log YAML file
        #[arg(short, long)]
        log: String,
        /// First forecast date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_date())]
        target_date: String,
        /// Restrict history to one department
        #[arg(short = 'p', long)]
        department: Option<String>,
        /// Number of consecutive days to forecast
        #[arg(short = 'n', long, default_value_t = 1)]
        days: usize,
        /// Optional output file for the serialized forecasts
        #[arg(short, long)]
        output: Option<String>,
        /// Serialization format of the output file
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Plot daily workload and predicted demand into a PNG chart
    PlotTrends {
        /// Observation log YAML file
        #[arg(short, long)]
        log: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
        /// Number of days to forecast after the last observation
        #[arg(short = 'n', long, default_value_t = 14)]
        forecast_days: usize,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
