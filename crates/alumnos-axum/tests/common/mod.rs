//! Shared helpers for router tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use alumnos_axum::{AxumContext, CorsConfig, create_router};
use alumnos_core::StudentService;
use alumnos_db::TestDb;

/// Router over a fresh in-memory database, plus a handle on its service.
pub async fn test_app() -> (Router, StudentService) {
    let db = TestDb::new().await.unwrap();
    let service = db.service();
    let app = create_router(AxumContext::new(service.clone()), &CorsConfig::AllowAll);
    (app, service)
}

/// Send one request and return the status and the collected body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_owned()))
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
