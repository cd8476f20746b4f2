use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Headcount and attendance figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AttendanceSummary {
    #[schema(example = "2024-01-15", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = 12)]
    pub total_employees: u64,
    #[schema(example = 4)]
    pub total_departments: u64,
    #[schema(example = 230)]
    pub total_attendance_records: u64,
    #[schema(example = 10)]
    pub present_on_date: u64,
    #[schema(example = 2)]
    pub absent_on_date: u64,
    /// Share of all records marked `Present`, in percent with one decimal
    #[schema(example = 91.3)]
    pub attendance_rate: f64,
    /// Headcount per department, ordered by department name
    pub departments: Vec<DepartmentCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DepartmentCount {
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = 5)]
    pub count: u64,
}

/// Raw counters as read from a store.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryCounts {
    pub total_employees: u64,
    pub total_attendance_records: u64,
    pub total_present: u64,
    pub present_on_date: u64,
    pub absent_on_date: u64,
}

impl AttendanceSummary {
    /// `departments` must already be sorted by name.
    pub fn from_counts(
        date: NaiveDate,
        counts: SummaryCounts,
        departments: Vec<DepartmentCount>,
    ) -> Self {
        let attendance_rate = if counts.total_attendance_records == 0 {
            0.0
        } else {
            let pct =
                counts.total_present as f64 * 100.0 / counts.total_attendance_records as f64;
            (pct * 10.0).round() / 10.0
        };

        Self {
            date,
            total_employees: counts.total_employees,
            total_departments: departments.len() as u64,
            total_attendance_records: counts.total_attendance_records,
            present_on_date: counts.present_on_date,
            absent_on_date: counts.absent_on_date,
            attendance_rate,
            departments,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SummaryQuery {
    /// Day to report on, defaults to today (UTC)
    #[param(value_type = Option<String>, example = "2024-01-15")]
    pub date: Option<NaiveDate>,
}
