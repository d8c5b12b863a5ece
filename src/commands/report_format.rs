use serde::Serialize;

use crate::commands::base_commands::OutputFormat;
use crate::commands::command_error::CommandError;
use crate::domain::aggregate::{DailyAggregate, GroupBy};
use crate::domain::forecast::DemandForecast;

pub fn format_forecast_report(
    forecasts: &[DemandForecast],
    data_source: &str,
    department: Option<&str>,
) -> String {
    let mut lines = Vec::new();
    lines.push("Demand Forecast".to_string());
    lines.push(format!("Data source: {data_source}"));
    lines.push(format!("Department: {}", department.unwrap_or("all")));
    lines.push(format!("Forecast days: {}", forecasts.len()));
    lines.push(String::new());
    lines.push("Date | Demand | Confidence | Method".to_string());
    lines.push("-----|--------|------------|-------".to_string());
    for forecast in forecasts {
        lines.push(format!(
            "{date} | {demand:.2} | {confidence} | {method}",
            date = forecast.target_date.format("%Y-%m-%d"),
            demand = forecast.predicted_demand,
            confidence = forecast.confidence,
            method = forecast.method
        ));
    }

    lines.join("\n")
}

pub fn format_aggregate_table(aggregates: &[DailyAggregate], group_by: GroupBy) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Workload by {group_by}"));
    lines.push("Date | Department | Mean hours | Observations".to_string());
    lines.push("-----|------------|------------|-------------".to_string());
    for aggregate in aggregates {
        let date = aggregate
            .date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "{date} | {department} | {mean:.2} | {count}",
            department = aggregate.department,
            mean = aggregate.mean_hours,
            count = aggregate.observation_count
        ));
    }
    if aggregates.is_empty() {
        lines.push("(no observations)".to_string());
    }

    lines.join("\n")
}

pub fn serialize_output<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> Result<String, CommandError> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| CommandError::Serialize(e.to_string()))
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).map_err(|e| CommandError::Serialize(e.to_string()))
        }
    }
}

pub fn write_output(path: &str, contents: &str) -> Result<(), CommandError> {
    std::fs::write(path, contents).map_err(|source| CommandError::WriteOutput {
        path: path.to_string(),
        source,
    })
}
