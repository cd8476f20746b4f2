use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

pub type HrResult<T> = Result<T, HrError>;

/// Errors surfaced by the stores and the request handlers.
#[derive(Debug, thiserror::Error)]
pub enum HrError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    DuplicateKey(String),

    #[error("{0}")]
    NotFound(String),

    /// The cause is logged, never returned to the caller.
    #[error("internal error: {0}")]
    Internal(String),
}

impl HrError {
    pub fn employee_not_found(employee_id: &str) -> Self {
        Self::NotFound(format!("Employee with ID '{employee_id}' not found"))
    }

    pub fn duplicate_employee(employee_id: &str) -> Self {
        Self::DuplicateKey(format!("Employee with ID '{employee_id}' already exists"))
    }

    fn detail(&self) -> String {
        match self {
            Self::Internal(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<sqlx::Error> for HrError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        Self::Internal(e.to_string())
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Employee with ID 'E001' not found")]
    pub detail: String,
}

impl ResponseError for HrError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateKey(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.detail(),
        })
    }
}
