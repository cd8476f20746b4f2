use crate::api::system::{HealthStatus, ServiceInfo};
use crate::error::ErrorResponse;
use crate::model::attendance::{Attendance, AttendanceStatus, MarkAttendance};
use crate::model::employee::{CreateEmployee, Employee, EmployeeDeletion};
use crate::model::summary::{AttendanceSummary, DepartmentCount};
use utoipa::OpenApi;

/// Prefix the handler paths below are declared under.
const DECLARED_PREFIX: &str = "/api";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

Record keeping for **employees** and their **daily attendance**.

### 🔹 Key Features
- **Employee Management**
  - Create, list and delete employees, addressed by their business `employee_id`
  - Deleting an employee also deletes its attendance history
- **Attendance Management**
  - Mark a day as `Present` or `Absent` and list an employee's history, newest first
- **Dashboard**
  - Headcount, department count and attendance figures for a given day

### 📦 Response Format
- JSON bodies; errors are returned as `{"detail": "..."}`
- Dates use `YYYY-MM-DD`, timestamps RFC 3339

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::system::index,
        crate::api::system::health,

        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,

        crate::api::dashboard::summary
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            EmployeeDeletion,
            Attendance,
            AttendanceStatus,
            MarkAttendance,
            AttendanceSummary,
            DepartmentCount,
            ErrorResponse,
            ServiceInfo,
            HealthStatus
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Dashboard", description = "Aggregated figures"),
        (name = "System", description = "Service information and health"),
    )
)]
pub struct ApiDoc;

/// The document with API paths moved under `api_prefix`; `/` and `/health` stay put.
pub fn openapi_for(api_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let api_prefix = api_prefix.trim_end_matches('/');
    if api_prefix == DECLARED_PREFIX {
        return doc;
    }

    let paths = std::mem::take(&mut doc.paths.paths);
    doc.paths.paths = paths
        .into_iter()
        .map(|(path, item)| match path.strip_prefix(DECLARED_PREFIX) {
            Some(rest) if rest.starts_with('/') => (format!("{api_prefix}{rest}"), item),
            _ => (path, item),
        })
        .collect();
    doc
}
