use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::HrResult;
use crate::utils::validation::{check_email, check_length};

pub const EMPLOYEE_ID_MAX_LEN: usize = 50;
pub const FULL_NAME_MAX_LEN: usize = 255;
pub const DEPARTMENT_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": "E001",
        "full_name": "Ada Lovelace",
        "email": "ada@example.com",
        "department": "Engineering",
        "created_at": "2024-01-15T09:30:00.000000Z"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "E001")]
    pub employee_id: String,

    #[schema(example = "Ada Lovelace")]
    pub full_name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(
        example = "2024-01-15T09:30:00.000000Z",
        value_type = String,
        format = "date-time"
    )]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "E001", value_type = String)]
    pub employee_id: String,
    #[schema(example = "Ada Lovelace", value_type = String)]
    pub full_name: String,
    #[schema(example = "ada@example.com", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "Engineering", value_type = String)]
    pub department: String,
}

impl CreateEmployee {
    pub fn validate(&self) -> HrResult<()> {
        check_length("employee_id", &self.employee_id, 1, EMPLOYEE_ID_MAX_LEN)?;
        check_length("full_name", &self.full_name, 1, FULL_NAME_MAX_LEN)?;
        check_email(&self.email)?;
        check_length("department", &self.department, 1, DEPARTMENT_MAX_LEN)?;
        Ok(())
    }
}

/// Outcome of removing an employee together with its attendance history.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EmployeeDeletion {
    #[schema(example = "Employee 'E001' deleted successfully")]
    pub message: String,
    #[schema(example = "E001")]
    pub employee_id: String,
    #[schema(example = 12)]
    pub attendance_removed: u64,
}

impl EmployeeDeletion {
    pub fn new(employee_id: &str, attendance_removed: u64) -> Self {
        Self {
            message: format!("Employee '{employee_id}' deleted successfully"),
            employee_id: employee_id.to_string(),
            attendance_removed,
        }
    }
}
