use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::{
    error::HrError,
    model::summary::SummaryQuery,
    store::SummaryStore,
};

/// Dashboard figures: headcount, departments and attendance for one day
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    params(SummaryQuery),
    responses(
        (status = 200, description = "Dashboard summary", body = AttendanceSummary),
        (status = 400, description = "Malformed date", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Dashboard"
)]
pub async fn summary(
    store: web::Data<dyn SummaryStore>,
    query: web::Query<SummaryQuery>,
) -> Result<HttpResponse, HrError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());

    let summary = store.summary(date).await?;

    Ok(HttpResponse::Ok().json(summary))
}
