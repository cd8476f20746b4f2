use actix_web::{HttpResponse, web};
use tracing::{info, instrument};

use crate::{
    error::HrError,
    model::employee::CreateEmployee,
    store::EmployeeStore,
};

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created successfully", body = Employee),
        (status = 400, description = "Validation failed or employee ID already exists", body = ErrorResponse, example = json!({
            "detail": "Employee with ID 'E001' already exists"
        })),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Employee"
)]
#[instrument(name = "create_employee", skip(store, payload), fields(employee_id = %payload.employee_id))]
pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, HrError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let employee = store.create(payload).await?;

    Ok(HttpResponse::Created().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    store: web::Data<dyn EmployeeStore>,
) -> Result<HttpResponse, HrError> {
    let employees = store.list_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Delete Employee
///
/// Removes the employee together with every attendance record it owns.
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Business identifier of the employee")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = EmployeeDeletion),
        (status = 404, description = "Employee not found", body = ErrorResponse, example = json!({
            "detail": "Employee with ID 'E001' not found"
        })),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, HrError> {
    let employee_id = path.into_inner();

    let deletion = store.delete(&employee_id).await?;
    info!(
        employee_id = %deletion.employee_id,
        attendance_removed = deletion.attendance_removed,
        "Employee removed"
    );

    Ok(HttpResponse::Ok().json(deletion))
}
