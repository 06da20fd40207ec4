//! Problem Details test helpers for backend testing
//!
//! This module provides utilities for asserting Problem Details bodies in
//! both unit and integration tests without depending on backend types.

use serde::Deserialize;
use serde_json::Value;

/// Local struct that matches the backend's ProblemDetails shape
/// but doesn't depend on backend types
#[derive(Debug, Deserialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert that a JSON body conforms to the stable error contract.
///
/// Validates that all problem-details keys are present, that `code` and
/// `status` match, and (when given) that `detail` contains the expected
/// fragment. Returns the parsed body so callers can make further checks,
/// e.g. that `trace_id` matches the `x-trace-id` response header.
pub fn assert_problem_details(
    body: &Value,
    expected_status: u16,
    expected_code: &str,
    expected_detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    let parsed: ProblemDetailsLike = serde_json::from_value(body.clone()).unwrap_or_else(|e| {
        panic!("body is not a ProblemDetails object ({e}). Raw body: {body}")
    });

    assert_eq!(parsed.status, expected_status, "status mismatch: {body}");
    assert_eq!(parsed.code, expected_code, "code mismatch: {body}");
    assert!(
        parsed.type_.ends_with(&parsed.code),
        "type should end with the error code: {body}"
    );
    assert!(!parsed.title.is_empty(), "title should not be empty");
    assert!(!parsed.trace_id.is_empty(), "trace_id should not be empty");

    if let Some(fragment) = expected_detail_contains {
        assert!(
            parsed.detail.contains(fragment),
            "detail '{}' should contain '{fragment}'",
            parsed.detail
        );
    }

    parsed
}
