use chrono::{Days, NaiveDate};
use plotters::prelude::*;
use thiserror::Error;

use crate::domain::aggregate::GroupBy;
use crate::domain::forecast::DemandForecast;
use crate::services::aggregation::aggregate;
use crate::services::estimation::{ForecastError, TrendEstimator, forecast_series_with};
use crate::services::forecast_config::ForecastConfig;
use crate::services::observation_yaml::{ObservationYamlError, load_observations_from_yaml_file};
use crate::services::validation::{ValidationError, Validator};

#[derive(Error, Debug)]
pub enum WorkloadPlotError {
    #[error("failed to load observations: {0}")]
    Load(#[from] ObservationYamlError),
    #[error("observation log contains an invalid record: {0}")]
    InvalidRecord(#[from] ValidationError),
    #[error("failed to forecast demand: {0}")]
    Forecast(#[from] ForecastError),
    #[error("workload history is empty")]
    EmptyHistory,
    #[error("failed to render workload plot: {0}")]
    Plot(String),
}

/// One point of the chart: either observed mean hours or a forecast.
#[derive(Debug, Clone, PartialEq)]
struct PlotPoint {
    date: NaiveDate,
    hours: f64,
}

/// Renders the daily mean workload of the log at `input_path` followed by
/// `forecast_days` days of predicted demand.
///
/// The x axis counts calendar days from the first observation, so days
/// without observations show up as gaps between points.
pub fn plot_workload_trends_from_yaml_file(
    input_path: &str,
    output_path: &str,
    forecast_days: usize,
    config: &ForecastConfig,
) -> Result<(), WorkloadPlotError> {
    let observations = Validator::new(config.complexity_score_range)
        .validate_all(load_observations_from_yaml_file(input_path)?)?;
    let daily = aggregate(&observations, GroupBy::Date);
    let history: Vec<PlotPoint> = daily
        .iter()
        .filter_map(|item| {
            item.date.map(|date| PlotPoint {
                date,
                hours: item.mean_hours,
            })
        })
        .collect();
    let Some(last) = history.last() else {
        return Err(WorkloadPlotError::EmptyHistory);
    };

    let first_forecast_date = last.date.checked_add_days(Days::new(1)).ok_or(
        ForecastError::DateOutOfRange {
            start: last.date,
            offset: 1,
        },
    )?;
    let estimator = TrendEstimator::new(config.clone());
    let forecasts = forecast_series_with(
        &estimator,
        first_forecast_date,
        forecast_days,
        &observations,
    )?;
    render_plot_png(output_path, &history, &forecast_points(&forecasts))
}

fn forecast_points(forecasts: &[DemandForecast]) -> Vec<PlotPoint> {
    forecasts
        .iter()
        .map(|item| PlotPoint {
            date: item.target_date,
            hours: item.predicted_demand,
        })
        .collect()
}

/// Days between `origin` and `point`, used as the x coordinate.
fn day_offset(origin: NaiveDate, point: &PlotPoint) -> i64 {
    (point.date - origin).num_days()
}

fn render_plot_png(
    output_path: &str,
    history: &[PlotPoint],
    forecast: &[PlotPoint],
) -> Result<(), WorkloadPlotError> {
    let Some(origin) = history.first().map(|point| point.date) else {
        return Err(WorkloadPlotError::EmptyHistory);
    };
    let all_points = || history.iter().chain(forecast.iter());
    let max_hours = all_points().map(|p| p.hours).fold(0.0_f64, f64::max);
    let max_y = if max_hours > 0.0 { max_hours * 1.1 } else { 1.0 };
    let max_x = all_points()
        .map(|point| day_offset(origin, point))
        .max()
        .unwrap_or(0)
        .max(1);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| WorkloadPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Workload And Predicted Demand", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0.0..max_y)
        .map_err(|e| WorkloadPlotError::Plot(e.to_string()))?;

    let label_count = (max_x as usize + 1).clamp(1, 10);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Date")
        .y_desc("Hours")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(label_count)
        .x_label_formatter(&|offset| {
            u64::try_from(*offset)
                .ok()
                .and_then(|days| origin.checked_add_days(Days::new(days)))
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| WorkloadPlotError::Plot(e.to_string()))?;

    let history_color = RGBColor(30, 122, 204);
    chart
        .draw_series(LineSeries::new(
            history
                .iter()
                .map(|point| (day_offset(origin, point), point.hours)),
            history_color.stroke_width(2),
        ))
        .map_err(|e| WorkloadPlotError::Plot(e.to_string()))?;

    let forecast_color = RGBColor(230, 120, 30);
    chart
        .draw_series(forecast.iter().map(|point| {
            Circle::new(
                (day_offset(origin, point), point.hours),
                4,
                forecast_color.filled(),
            )
        }))
        .map_err(|e| WorkloadPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| WorkloadPlotError::Plot(e.to_string()))?;
    Ok(())
}
