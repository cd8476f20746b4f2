use crate::{
    api::{attendance, dashboard, employee, system},
    docs::openapi_for,
    error::HrError,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::anyhow;
use std::sync::Arc;
use utoipa_swagger_ui::SwaggerUi;

pub type ApiLimiter = Governor<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-peer-IP limiter replenishing `requests_per_min` tokens a minute.
pub fn build_limiter(requests_per_min: u32) -> anyhow::Result<ApiLimiter> {
    let per_ms = (60_000 / requests_per_min.max(1) as u64).max(1);
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} requests per minute"))?;
    Ok(Governor::new(&cfg))
}

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str, limiter: Arc<ApiLimiter>) {
    // Body and query parse failures use the same `{"detail": ...}` shape as domain errors
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| HrError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| HrError::Validation(err.to_string()).into()),
    );

    cfg.service(web::resource("/").route(web::get().to(system::index)))
        .service(web::resource("/health").route(web::get().to(system::health)))
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard needed to serve the JS/CSS assets
                .url("/api-doc/openapi.json", openapi_for(api_prefix)),
        );

    cfg.service(
        web::scope(api_prefix)
            .wrap(limiter) // rate limiting
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // /employees/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(web::resource("").route(web::post().to(attendance::mark_attendance)))
                    // /attendance/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::get().to(attendance::list_attendance)),
                    ),
            )
            .service(
                web::scope("/dashboard")
                    .service(web::resource("/summary").route(web::get().to(dashboard::summary))),
            ),
    );
}
