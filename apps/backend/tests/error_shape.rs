//! Cross-cutting checks on the stable error contract and tracing headers.

mod common;

use actix_web::test;

#[actix_web::test]
async fn not_found_errors_carry_the_problem_details_shape() {
    let app = common::init_app().await;

    let resp = common::get(&app, "/users/1").await;
    // assert_problem validates content type, all body fields and that the
    // body trace_id matches the x-trace-id header.
    common::assert_problem(resp, 404, "USER_NOT_FOUND", Some("User not found")).await;
}

#[actix_web::test]
async fn success_responses_carry_a_trace_id_header() {
    let app = common::init_app().await;

    let resp = common::get(&app, "/health").await;
    assert_eq!(resp.status().as_u16(), 200);
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header on success responses");
    assert!(!trace_id.is_empty());

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"ok");
}

#[actix_web::test]
async fn each_request_gets_its_own_trace_id() {
    let app = common::init_app().await;

    let first = common::get(&app, "/health").await;
    let second = common::get(&app, "/health").await;

    let a = first.headers().get("x-trace-id").cloned().expect("header");
    let b = second.headers().get("x-trace-id").cloned().expect("header");
    assert_ne!(a, b);
}
