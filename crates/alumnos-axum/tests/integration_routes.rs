//! Integration tests for the Axum web server.
//!
//! These tests verify that routes are correctly wired to handlers.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use alumnos_core::{NewStudent, Student};
use common::{delete, get, post_json, send, test_app};

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let (app, _) = test_app().await;

    let (status, body) = send(app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn list_on_empty_database_returns_empty_array() {
    let (app, _) = test_app().await;

    let (status, body) = send(app, get("/alumnos")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"[]");
}

#[tokio::test]
async fn list_returns_stored_students_in_id_order() {
    let (app, service) = test_app().await;
    service.add(NewStudent::new("Ana")).await.unwrap();
    service
        .add(NewStudent::new("Luis").with_attribute("curso", "2B"))
        .await
        .unwrap();

    let (status, body) = send(app, get("/alumnos")).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        value,
        json!([
            {"id": 1, "name": "Ana"},
            {"id": 2, "name": "Luis", "curso": "2B"}
        ])
    );
}

#[tokio::test]
async fn post_creates_student_and_returns_it() {
    let (app, service) = test_app().await;

    let (status, body) = send(
        app,
        post_json("/alumnos", r#"{"name":"Ana","email":"ana@example.com"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let created: Student = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        created,
        Student::new(1, "Ana").with_attribute("email", "ana@example.com")
    );
    assert_eq!(service.list().await.unwrap(), vec![created]);
}

#[tokio::test]
async fn post_with_blank_name_is_bad_request() {
    let (app, service) = test_app().await;

    let (status, body) = send(app, post_json("/alumnos", r#"{"name":"  "}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], 400);
    assert!(value["error"].is_string());
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn post_with_client_supplied_id_is_bad_request() {
    let (app, _) = test_app().await;

    let (status, _) = send(app, post_json("/alumnos", r#"{"id":7,"name":"Ana"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_existing_student_returns_empty_ok() {
    let (app, service) = test_app().await;
    let ana = service.add(NewStudent::new("Ana")).await.unwrap();

    let (status, body) = send(app, delete(&format!("/alumnos/{}", ana.id))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_unknown_student_returns_not_found() {
    let (app, _) = test_app().await;

    let (status, body) = send(app, delete("/alumnos/99")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], 404);
}

#[tokio::test]
async fn unknown_route_returns_not_found() {
    let (app, _) = test_app().await;

    let (status, _) = send(app, get("/cursos")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_without_name_is_json_bad_request() {
    let (app, service) = test_app().await;

    let (status, body) = send(app, post_json("/alumnos", r#"{"email":"ana@example.com"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], 400);
    assert!(value["error"].as_str().unwrap().contains("name"));
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn post_with_malformed_json_is_json_bad_request() {
    let (app, _) = test_app().await;

    let (status, body) = send(app, post_json("/alumnos", r#"{"name": "Ana""#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], 400);
}

#[tokio::test]
async fn delete_with_non_numeric_id_is_json_bad_request() {
    let (app, _) = test_app().await;

    let (status, body) = send(app, delete("/alumnos/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], 400);
    assert!(value["error"].is_string());
}
