#![allow(dead_code)]

use std::net::SocketAddr;

use actix_web::test::TestRequest;
use serde_json::{Value, json};

/// Builds the full app over the given in-memory store.
/// Optional arguments override the per-minute rate limit and the API prefix.
macro_rules! init_app {
    ($store:expr) => {{
        let stores = hrms_lite::store::Stores::from($store);
        let limiter = std::sync::Arc::new(hrms_lite::routes::build_limiter(10_000).unwrap());
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(|cfg| stores.register(cfg))
                .configure(|cfg| hrms_lite::routes::configure(cfg, "/api", limiter)),
        )
        .await
    }};
    ($store:expr, $rate:expr) => {{
        let stores = hrms_lite::store::Stores::from($store);
        let limiter = std::sync::Arc::new(hrms_lite::routes::build_limiter($rate).unwrap());
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(|cfg| stores.register(cfg))
                .configure(|cfg| hrms_lite::routes::configure(cfg, "/api", limiter)),
        )
        .await
    }};
    ($store:expr, $rate:expr, $prefix:expr) => {{
        let stores = hrms_lite::store::Stores::from($store);
        let limiter = std::sync::Arc::new(hrms_lite::routes::build_limiter($rate).unwrap());
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(|cfg| stores.register(cfg))
                .configure(|cfg| hrms_lite::routes::configure(cfg, $prefix, limiter)),
        )
        .await
    }};
}
pub(crate) use init_app;

// The rate limiter keys on the peer address, so every request needs one.
pub fn peer() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

pub fn get(uri: &str) -> TestRequest {
    TestRequest::get().uri(uri).peer_addr(peer())
}

pub fn delete(uri: &str) -> TestRequest {
    TestRequest::delete().uri(uri).peer_addr(peer())
}

pub fn post_json(uri: &str, body: Value) -> TestRequest {
    TestRequest::post().uri(uri).peer_addr(peer()).set_json(body)
}

pub fn employee_body(employee_id: &str) -> Value {
    json!({
        "employee_id": employee_id,
        "full_name": format!("Employee {employee_id}"),
        "email": format!("{}@example.com", employee_id.to_lowercase()),
        "department": "Engineering",
    })
}

pub fn attendance_body(employee_id: &str, date: &str, status: &str) -> Value {
    json!({
        "employee_id": employee_id,
        "date": date,
        "status": status,
    })
}
