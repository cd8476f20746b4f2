use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{HrError, HrResult};
use crate::model::employee::EMPLOYEE_ID_MAX_LEN;
use crate::utils::validation::check_length;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Case-sensitive: only `Present` and `Absent` are accepted.
    pub fn parse(value: &str) -> HrResult<Self> {
        Self::from_str(value).map_err(|_| {
            HrError::Validation("Status must be either 'Present' or 'Absent'".to_string())
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "employee_id": "E001",
    "date": "2024-01-15",
    "status": "Present",
    "created_at": "2024-01-15T09:30:00.000000Z"
}))]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "E001")]
    pub employee_id: String,
    #[schema(example = "2024-01-15", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[schema(example = "2024-01-15T09:30:00.000000Z", format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}

/// Raw `attendance` row; `status` is re-parsed so bad persisted values surface as errors.
#[derive(Debug, sqlx::FromRow)]
pub struct AttendanceRow {
    pub id: u64,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AttendanceRow> for Attendance {
    type Error = HrError;

    fn try_from(row: AttendanceRow) -> HrResult<Self> {
        let status = AttendanceStatus::from_str(&row.status).map_err(|_| {
            HrError::Internal(format!(
                "attendance row {} has unknown status '{}'",
                row.id, row.status
            ))
        })?;

        Ok(Self {
            id: row.id,
            employee_id: row.employee_id,
            date: row.date,
            status,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "E001", value_type = String)]
    pub employee_id: String,
    #[schema(example = "2024-01-15", format = "date", value_type = String)]
    pub date: NaiveDate,
    /// Either `Present` or `Absent`
    #[schema(example = "Present", value_type = String)]
    pub status: String,
}

impl MarkAttendance {
    pub fn validate(&self) -> HrResult<AttendanceStatus> {
        check_length("employee_id", &self.employee_id, 1, EMPLOYEE_ID_MAX_LEN)?;
        AttendanceStatus::parse(&self.status)
    }
}
