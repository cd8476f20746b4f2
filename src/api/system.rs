use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ServiceInfo {
    #[schema(example = "HRMS Lite API")]
    pub message: &'static str,
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    #[schema(example = "/swagger-ui/")]
    pub docs: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: &'static str,
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service information", body = ServiceInfo)),
    tag = "System"
)]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        message: "HRMS Lite API",
        version: env!("CARGO_PKG_VERSION"),
        docs: "/swagger-ui/",
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthStatus)),
    tag = "System"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus { status: "healthy" })
}
