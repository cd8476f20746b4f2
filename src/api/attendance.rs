use actix_web::{HttpResponse, web};
use tracing::instrument;

use crate::{
    error::HrError,
    model::attendance::MarkAttendance,
    store::AttendanceStore,
};

/// Mark attendance endpoint
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance marked", body = Attendance),
        (status = 400, description = "Invalid status or payload", body = ErrorResponse, example = json!({
            "detail": "Status must be either 'Present' or 'Absent'"
        })),
        (status = 404, description = "Employee not found", body = ErrorResponse, example = json!({
            "detail": "Employee with ID 'E001' not found"
        })),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
#[instrument(
    name = "mark_attendance",
    skip(store, payload),
    fields(employee_id = %payload.employee_id, date = %payload.date)
)]
pub async fn mark_attendance(
    store: web::Data<dyn AttendanceStore>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, HrError> {
    let payload = payload.into_inner();
    // Reject bad input before touching the store
    payload.validate()?;

    let record = store.mark(payload).await?;

    Ok(HttpResponse::Created().json(record))
}

/// Attendance history endpoint, newest date first
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Business identifier of the employee")
    ),
    responses(
        (status = 200, description = "Attendance records, most recent date first", body = [Attendance]),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    store: web::Data<dyn AttendanceStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, HrError> {
    let employee_id = path.into_inner();

    let records = store.list_for_employee(&employee_id).await?;

    Ok(HttpResponse::Ok().json(records))
}
