use chrono::NaiveDate;

use crate::api::AttendanceRecord;

/// Filter form state. The "all departments" choice is the `None`
/// variant, an explicit absent filter rather than a sentinel value that
/// a real department id could collide with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilterState {
    pub date: String,
    pub department: Option<i64>,
}

impl LogFilterState {
    pub fn for_today() -> Self {
        Self {
            date: crate::utils::time::today().format("%Y-%m-%d").to_string(),
            department: None,
        }
    }

    /// A blank or unparseable date simply drops the date filter.
    pub fn to_query(&self) -> (Option<NaiveDate>, Option<i64>) {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok();
        (date, self.department)
    }
}

/// Maps the department `<select>` value; the "all" option carries no id.
pub fn parse_department_option(value: &str) -> Option<i64> {
    match value {
        "" | "all" => None,
        other => other.parse::<i64>().ok(),
    }
}

/// Resource key for the log query; the token forces a re-fetch when the
/// filters themselves did not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogsQuery {
    pub date: Option<NaiveDate>,
    pub department: Option<i64>,
    pub token: u32,
}

impl LogsQuery {
    pub fn new(date: Option<NaiveDate>, department: Option<i64>) -> Self {
        Self {
            date,
            department,
            token: 0,
        }
    }

    pub fn with_filters(self, date: Option<NaiveDate>, department: Option<i64>) -> Self {
        Self {
            date,
            department,
            token: self.token.wrapping_add(1),
        }
    }

    pub fn refresh(self) -> Self {
        Self {
            token: self.token.wrapping_add(1),
            ..self
        }
    }
}

/// Derived purely from the loaded record set, recomputed per render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub unique_employees: usize,
}

impl LogSummary {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let completed = records
            .iter()
            .filter(|record| record.clock_out.is_some())
            .count();
        let unique_employees = records
            .iter()
            .map(|record| record.employee_id.as_str())
            .collect::<std::collections::HashSet<_>>()
            .len();
        Self {
            total: records.len(),
            completed,
            in_progress: records.len() - completed,
            unique_employees,
        }
    }
}

pub fn record_status_label(record: &AttendanceRecord) -> &'static str {
    if record.clock_out.is_some() {
        "Selesai"
    } else {
        "Bekerja"
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures;

    #[test]
    fn summary_counts_add_up() {
        let records = vec![
            fixtures::record(1, "E1", Some("2024-01-01T17:45:00Z")),
            fixtures::record(2, "E2", None),
            fixtures::record(3, "E1", None),
        ];
        let summary = LogSummary::from_records(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.in_progress, 2);
        assert_eq!(summary.completed + summary.in_progress, summary.total);
        assert_eq!(summary.unique_employees, 2);
        assert!(summary.unique_employees <= summary.total);
    }

    #[test]
    fn summary_of_empty_set_is_zero() {
        assert_eq!(LogSummary::from_records(&[]), LogSummary::default());
    }

    #[test]
    fn status_label_follows_clock_out_presence() {
        let completed = fixtures::record(1, "E1", Some("2024-01-01T17:45:00Z"));
        let working = fixtures::record(2, "E2", None);
        assert_eq!(record_status_label(&completed), "Selesai");
        assert_eq!(record_status_label(&working), "Bekerja");
    }

    #[test]
    fn department_option_all_is_no_filter() {
        assert_eq!(parse_department_option("all"), None);
        assert_eq!(parse_department_option(""), None);
        assert_eq!(parse_department_option("3"), Some(3));
        assert_eq!(parse_department_option("garbage"), None);
    }

    #[test]
    fn filter_state_parses_date_and_keeps_department() {
        let state = LogFilterState {
            date: "2024-01-01".into(),
            department: Some(2),
        };
        let (date, department) = state.to_query();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(department, Some(2));

        let blank = LogFilterState {
            date: String::new(),
            department: None,
        };
        assert_eq!(blank.to_query(), (None, None));
    }

    #[test]
    fn query_token_changes_on_refresh_but_filters_stay() {
        let query = LogsQuery::new(NaiveDate::from_ymd_opt(2024, 1, 1), Some(1));
        let refreshed = query.refresh();
        assert_eq!(refreshed.date, query.date);
        assert_eq!(refreshed.department, query.department);
        assert_ne!(refreshed.token, query.token);
        assert_ne!(query.with_filters(None, None), query);
    }
}
