use chrono::NaiveDate;

/// One recorded workload data point.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadObservation {
    pub date: NaiveDate,
    pub department: String,
    pub workload_hours: f64,
    pub complexity_score: f64,
}

impl WorkloadObservation {
    pub fn new(
        date: NaiveDate,
        department: impl Into<String>,
        workload_hours: f64,
        complexity_score: f64,
    ) -> Self {
        Self {
            date,
            department: department.into(),
            workload_hours,
            complexity_score,
        }
    }
}
