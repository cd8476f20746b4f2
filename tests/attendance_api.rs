mod common;

use actix_web::{http::StatusCode, test};
use hrms_lite::store::InMemoryStore;
use serde_json::{Value, json};

use common::{attendance_body, delete, employee_body, get, init_app, post_json};

#[actix_web::test]
async fn employee_lifecycle_with_attendance() {
    let app = init_app!(InMemoryStore::new());

    let employee = json!({
        "employee_id": "E001",
        "full_name": "Ada Lovelace",
        "email": "ada@example.com",
        "department": "Engineering"
    });
    let resp = test::call_service(&app, post_json("/api/employees", employee).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        post_json("/api/attendance", attendance_body("E001", "2024-01-15", "Present")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let marked: Value = test::read_body_json(resp).await;
    assert_eq!(marked["employee_id"], "E001");
    assert_eq!(marked["date"], "2024-01-15");
    assert_eq!(marked["status"], "Present");
    assert!(marked["id"].is_u64());
    assert!(marked["created_at"].is_string());

    let resp = test::call_service(&app, get("/api/attendance/E001").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let records: Vec<Value> = test::read_body_json(resp).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["status"], "Present");

    let resp = test::call_service(&app, delete("/api/employees/E001").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let confirmation: Value = test::read_body_json(resp).await;
    assert!(confirmation["message"].as_str().unwrap().contains("E001"));
    assert_eq!(confirmation["attendance_removed"], 1);

    let resp = test::call_service(&app, get("/api/attendance/E001").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn marking_for_missing_employee_is_not_found() {
    let app = init_app!(InMemoryStore::new());

    let resp = test::call_service(
        &app,
        post_json("/api/attendance", attendance_body("E404", "2024-01-15", "Present")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["detail"], "Employee with ID 'E404' not found");

    // Creating the employee afterwards shows nothing was stored
    test::call_service(&app, post_json("/api/employees", employee_body("E404")).to_request())
        .await;
    let resp = test::call_service(&app, get("/api/attendance/E404").to_request()).await;
    let records: Vec<Value> = test::read_body_json(resp).await;
    assert!(records.is_empty());
}

#[actix_web::test]
async fn unknown_status_is_rejected() {
    let app = init_app!(InMemoryStore::new());
    test::call_service(&app, post_json("/api/employees", employee_body("E001")).to_request())
        .await;

    for status in ["Late", "present", ""] {
        let resp = test::call_service(
            &app,
            post_json("/api/attendance", attendance_body("E001", "2024-01-15", status))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let err: Value = test::read_body_json(resp).await;
        assert_eq!(err["detail"], "Status must be either 'Present' or 'Absent'");
    }

    let resp = test::call_service(&app, get("/api/attendance/E001").to_request()).await;
    let records: Vec<Value> = test::read_body_json(resp).await;
    assert!(records.is_empty());
}

#[actix_web::test]
async fn malformed_date_is_a_bad_request() {
    let app = init_app!(InMemoryStore::new());
    test::call_service(&app, post_json("/api/employees", employee_body("E001")).to_request())
        .await;

    for date in ["15/01/2024", "2024-02-30", "yesterday"] {
        let resp = test::call_service(
            &app,
            post_json("/api/attendance", attendance_body("E001", date, "Present")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "date {date}");
    }
}

#[actix_web::test]
async fn same_day_markings_are_all_kept_newest_date_first() {
    let app = init_app!(InMemoryStore::new());
    test::call_service(&app, post_json("/api/employees", employee_body("E001")).to_request())
        .await;

    for (date, status) in [
        ("2024-01-14", "Present"),
        ("2024-01-15", "Present"),
        ("2024-01-15", "Absent"),
        ("2024-01-13", "Absent"),
    ] {
        let resp = test::call_service(
            &app,
            post_json("/api/attendance", attendance_body("E001", date, status)).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = test::call_service(&app, get("/api/attendance/E001").to_request()).await;
    let records: Vec<Value> = test::read_body_json(resp).await;
    let dates: Vec<&str> = records
        .iter()
        .map(|r| r["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-01-15", "2024-01-15", "2024-01-14", "2024-01-13"]);

    let mut same_day: Vec<&str> = records[..2]
        .iter()
        .map(|r| r["status"].as_str().unwrap())
        .collect();
    same_day.sort();
    assert_eq!(same_day, vec!["Absent", "Present"]);
}

#[actix_web::test]
async fn listing_for_missing_employee_is_not_found() {
    let app = init_app!(InMemoryStore::new());

    let resp = test::call_service(&app, get("/api/attendance/NOPE").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn deleting_one_employee_keeps_others_history() {
    let app = init_app!(InMemoryStore::new());
    for id in ["E001", "E002"] {
        test::call_service(&app, post_json("/api/employees", employee_body(id)).to_request())
            .await;
        test::call_service(
            &app,
            post_json("/api/attendance", attendance_body(id, "2024-01-15", "Present"))
                .to_request(),
        )
        .await;
    }

    let resp = test::call_service(&app, delete("/api/employees/E001").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, get("/api/attendance/E002").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let records: Vec<Value> = test::read_body_json(resp).await;
    assert_eq!(records.len(), 1);
}
