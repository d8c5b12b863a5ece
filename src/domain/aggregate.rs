use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Department label used for cross-department aggregates.
pub const ALL_DEPARTMENTS: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GroupBy {
    Date,
    Department,
    #[value(name = "date-department")]
    DateAndDepartment,
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GroupBy::Date => "date",
            GroupBy::Department => "department",
            GroupBy::DateAndDepartment => "date+department",
        };
        f.write_str(label)
    }
}

/// Summary of one non-empty group of observations.
///
/// `date` is absent when grouping only by department; `department` is
/// [`ALL_DEPARTMENTS`] when grouping only by date.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DailyAggregate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub department: String,
    pub mean_hours: f64,
    pub observation_count: usize,
}
