use chrono::NaiveDate;

use crate::domain::observation::WorkloadObservation;

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn observation(date: NaiveDate, department: &str, hours: f64) -> WorkloadObservation {
    WorkloadObservation::new(date, department, hours, 5.0)
}

/// One observation per consecutive day, starting at `start`.
pub fn daily_series(start: NaiveDate, department: &str, hours: &[f64]) -> Vec<WorkloadObservation> {
    hours
        .iter()
        .enumerate()
        .map(|(offset, value)| {
            observation(start + chrono::Duration::days(offset as i64), department, *value)
        })
        .collect()
}
