use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::domain::aggregate::{ALL_DEPARTMENTS, DailyAggregate, GroupBy};
use crate::domain::observation::WorkloadObservation;

#[derive(Default)]
struct GroupTotals {
    hours: f64,
    count: usize,
}

/// Groups observations by `group_by` and returns per-group mean hours and
/// counts, ordered by date and then by department name.
pub fn aggregate(observations: &[WorkloadObservation], group_by: GroupBy) -> Vec<DailyAggregate> {
    // `None` sorts before every date, so department-only keys stay ordered by name.
    let mut groups: BTreeMap<(Option<NaiveDate>, &str), GroupTotals> = BTreeMap::new();
    for observation in observations {
        let key = match group_by {
            GroupBy::Date => (Some(observation.date), ALL_DEPARTMENTS),
            GroupBy::Department => (None, observation.department.as_str()),
            GroupBy::DateAndDepartment => {
                (Some(observation.date), observation.department.as_str())
            }
        };
        let totals = groups.entry(key).or_default();
        totals.hours += observation.workload_hours;
        totals.count += 1;
    }

    groups
        .into_iter()
        .map(|((date, department), totals)| DailyAggregate {
            date,
            department: department.to_string(),
            mean_hours: totals.hours / totals.count as f64,
            observation_count: totals.count,
        })
        .collect()
}

/// Sorted distinct department names.
pub fn department_names(observations: &[WorkloadObservation]) -> Vec<String> {
    observations
        .iter()
        .map(|observation| observation.department.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn filter_department(
    observations: &[WorkloadObservation],
    department: &str,
) -> Vec<WorkloadObservation> {
    observations
        .iter()
        .filter(|observation| observation.department == department)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{observation, on_date};

    fn mixed_history() -> Vec<WorkloadObservation> {
        vec![
            observation(on_date(2026, 3, 3), "Support", 6.0),
            observation(on_date(2026, 3, 1), "Sales", 40.0),
            observation(on_date(2026, 3, 1), "Support", 10.0),
            observation(on_date(2026, 3, 3), "Sales", 44.0),
            observation(on_date(2026, 3, 1), "Sales", 42.0),
        ]
    }

    #[test]
    fn empty_input_produces_empty_output() {
        for group_by in [GroupBy::Date, GroupBy::Department, GroupBy::DateAndDepartment] {
            assert!(aggregate(&[], group_by).is_empty());
        }
    }

    #[test]
    fn groups_by_date_across_departments() {
        let aggregates = aggregate(&mixed_history(), GroupBy::Date);

        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].date, Some(on_date(2026, 3, 1)));
        assert_eq!(aggregates[0].department, ALL_DEPARTMENTS);
        assert_eq!(aggregates[0].observation_count, 3);
        assert!((aggregates[0].mean_hours - 92.0 / 3.0).abs() < 1e-9);
        assert_eq!(aggregates[1].date, Some(on_date(2026, 3, 3)));
        assert!((aggregates[1].mean_hours - 25.0).abs() < 1e-9);
    }

    #[test]
    fn groups_by_department_without_dates() {
        let aggregates = aggregate(&mixed_history(), GroupBy::Department);

        let departments: Vec<&str> = aggregates.iter().map(|a| a.department.as_str()).collect();
        assert_eq!(departments, vec!["Sales", "Support"]);
        assert!(aggregates.iter().all(|a| a.date.is_none()));
        assert!((aggregates[0].mean_hours - 42.0).abs() < 1e-9);
        assert!((aggregates[1].mean_hours - 8.0).abs() < 1e-9);
    }

    #[test]
    fn orders_by_date_then_department_when_grouping_by_both() {
        let aggregates = aggregate(&mixed_history(), GroupBy::DateAndDepartment);

        let keys: Vec<(NaiveDate, &str)> = aggregates
            .iter()
            .map(|a| (a.date.unwrap(), a.department.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (on_date(2026, 3, 1), "Sales"),
                (on_date(2026, 3, 1), "Support"),
                (on_date(2026, 3, 3), "Sales"),
                (on_date(2026, 3, 3), "Support"),
            ]
        );
        assert!((aggregates[0].mean_hours - 41.0).abs() < 1e-9);
        assert_eq!(aggregates[0].observation_count, 2);
    }

    #[test]
    fn groups_partition_the_input() {
        let history = mixed_history();
        for group_by in [GroupBy::Date, GroupBy::Department, GroupBy::DateAndDepartment] {
            let aggregates = aggregate(&history, group_by);
            let total: usize = aggregates.iter().map(|a| a.observation_count).sum();
            assert_eq!(total, history.len());
            assert!(aggregates.iter().all(|a| a.observation_count >= 1));

            let weighted_hours: f64 = aggregates
                .iter()
                .map(|a| a.mean_hours * a.observation_count as f64)
                .sum();
            let input_hours: f64 = history.iter().map(|o| o.workload_hours).sum();
            assert!((weighted_hours - input_hours).abs() < 1e-9);
        }
    }

    #[test]
    fn mean_hours_match_hand_computed_means() {
        let march_1 = Some(on_date(2026, 3, 1));
        let march_3 = Some(on_date(2026, 3, 3));
        let cases: [(GroupBy, Vec<(Option<NaiveDate>, &str, f64)>); 3] = [
            (
                GroupBy::Date,
                vec![
                    (march_1, ALL_DEPARTMENTS, (40.0 + 10.0 + 42.0) / 3.0),
                    (march_3, ALL_DEPARTMENTS, (6.0 + 44.0) / 2.0),
                ],
            ),
            (
                GroupBy::Department,
                vec![
                    (None, "Sales", (40.0 + 44.0 + 42.0) / 3.0),
                    (None, "Support", (6.0 + 10.0) / 2.0),
                ],
            ),
            (
                GroupBy::DateAndDepartment,
                vec![
                    (march_1, "Sales", (40.0 + 42.0) / 2.0),
                    (march_1, "Support", 10.0),
                    (march_3, "Sales", 44.0),
                    (march_3, "Support", 6.0),
                ],
            ),
        ];

        for (group_by, expected) in cases {
            let result = aggregate(&mixed_history(), group_by);
            assert_eq!(result.len(), expected.len(), "{group_by}");
            for (item, (date, department, mean)) in result.iter().zip(expected) {
                assert_eq!(item.date, date, "{group_by}");
                assert_eq!(item.department, department, "{group_by}");
                assert!((item.mean_hours - mean).abs() < 1e-9, "{group_by}");
            }
        }
    }

    #[test]
    fn lists_and_filters_departments() {
        let history = mixed_history();
        assert_eq!(department_names(&history), vec!["Sales", "Support"]);

        let sales = filter_department(&history, "Sales");
        assert_eq!(sales.len(), 3);
        assert!(sales.iter().all(|o| o.department == "Sales"));
        assert!(filter_department(&history, "Finance").is_empty());
    }
}
