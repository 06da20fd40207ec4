#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{test, web, App};
use backend::infra::db::ensure_schema;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::state::app_state::AppState;
use sea_orm::{ConnectOptions, Database};
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Fresh application state backed by a private in-memory SQLite database.
///
/// The pool is pinned to a single connection: every pooled SQLite connection
/// would otherwise open its own empty in-memory database.
pub async fn test_state() -> AppState {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).min_connections(1);

    let db = Database::connect(opts)
        .await
        .expect("connect to in-memory sqlite");
    ensure_schema(&db).await.expect("create schema");
    AppState::new(db)
}

/// Spin up the full application (middleware + routes) against a fresh state.
pub async fn init_app(
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>
{
    let state = test_state().await;
    test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

pub async fn send_json<S>(
    app: &S,
    method: actix_web::http::Method,
    path: &str,
    body: &Value,
) -> ServiceResponse<BoxBody>
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let req = test::TestRequest::default()
        .method(method)
        .uri(path)
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

pub async fn get<S>(app: &S, path: &str) -> ServiceResponse<BoxBody>
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let req = test::TestRequest::get().uri(path).to_request();
    test::call_service(app, req).await
}

pub async fn delete<S>(app: &S, path: &str) -> ServiceResponse<BoxBody>
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let req = test::TestRequest::delete().uri(path).to_request();
    test::call_service(app, req).await
}

/// Read the response body as JSON.
pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "response body is not JSON: {}",
            String::from_utf8_lossy(&body)
        )
    })
}

/// Create a user through the API and return its JSON representation.
pub async fn create_user<S>(app: &S, username: &str, email: &str) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let resp = send_json(
        app,
        actix_web::http::Method::POST,
        "/users",
        &serde_json::json!({ "username": username, "email": email }),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 201, "user creation should succeed");
    read_json(resp).await
}

/// Create a todo through the API and return its JSON representation.
pub async fn create_todo<S>(app: &S, user_id: i64, body: Value) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let resp = send_json(
        app,
        actix_web::http::Method::POST,
        &format!("/users/{user_id}/todos"),
        &body,
    )
    .await;
    assert_eq!(resp.status().as_u16(), 201, "todo creation should succeed");
    read_json(resp).await
}

/// Assert that a response follows the stable problem-details error contract
/// and that the body trace_id matches the x-trace-id header.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
    expected_detail_contains: Option<&str>,
) {
    assert_eq!(resp.status().as_u16(), expected_status);

    let headers = resp.headers().clone();

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let header_trace_id = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present")
        .to_string();
    assert!(!header_trace_id.is_empty());

    let body = read_json(resp).await;
    let parsed = backend_test_support::problem_details::assert_problem_details(
        &body,
        expected_status,
        expected_code,
        expected_detail_contains,
    );
    assert_eq!(
        parsed.trace_id, header_trace_id,
        "trace_id in body should match x-trace-id header"
    );
}
