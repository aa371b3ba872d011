//! Integration tests for the Record Verification Agent
//!
//! Covers the end-to-end verification flow, the verdict document
//! invariants, and the HTTP routes.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use record_verification::{
    contracts::{RecordDocument, VerdictDocument},
    handler::{create_router, HandlerState},
    processor,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use tower::ServiceExt;

fn submitted(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn record(json: Value) -> RecordDocument {
    serde_json::from_value(json).expect("valid record document")
}

#[test]
fn test_end_to_end_verified() {
    let record = record(json!({
        "sessionId": "sess-42",
        "fields": {"name": "", "email": "x@y.com"}
    }));
    let answers = submitted(&[("name", "Al"), ("email", "x@y.com")]);

    let (verdict, verified) = processor::process(&record, &answers);

    assert!(verified);
    assert!(verdict.verified);
    assert_eq!(verdict.corrected_data["name"], json!("Al"));
    assert_eq!(verdict.corrected_data["email"], json!("x@y.com"));
    assert!(verdict.errors.is_empty());
}

#[test]
fn test_end_to_end_rejected() {
    let record = record(json!({
        "sessionId": "sess-42",
        "fields": {"name": "", "email": "x@y.com"}
    }));
    let answers = submitted(&[("name", "A"), ("email", "bad")]);

    let (verdict, verified) = processor::process(&record, &answers);

    assert!(!verified);
    assert_eq!(verdict.errors["name"], "Must be at least 3 characters");
    assert_eq!(
        verdict.errors["email"],
        "Enter a valid email address (e.g., user@example.com)"
    );
    assert!(verdict.corrected_data.is_empty());
}

#[test]
fn test_number_field_rejects_non_ascii_digits() {
    // A numeric value must end up as a JSON number in correctedData;
    // digits the conversion cannot parse are rejected up front.
    let record = record(json!({
        "sessionId": "sess-digits",
        "fields": {"phone": ""}
    }));
    let (verdict, verified) = processor::process(&record, &submitted(&[("phone", "٤٢")]));

    assert!(!verified);
    assert!(verdict.corrected_data.is_empty());
    assert_eq!(
        verdict.errors["phone"],
        "Enter a valid number (integer or decimal)"
    );
}

#[test]
fn test_corrected_number_values_are_json_numbers() {
    let record = record(json!({
        "fields": {"phone": ""},
        "additionalQuestions": [
            {"id": "years", "type": "number", "required": true}
        ]
    }));
    let (verdict, verified) =
        processor::process(&record, &submitted(&[("phone", "42"), ("years", "2.5")]));

    assert!(verified);
    assert!(verdict.corrected_data["phone"].is_number());
    assert!(verdict.corrected_data["years"].is_number());
}

#[test]
fn test_verdict_invariants() {
    // Every field yields exactly one of: corrected entry or error entry.
    let record = record(json!({
        "sessionId": "sess-inv",
        "fields": {"name": "", "phone": "", "available": ""},
        "additionalQuestions": [
            {"id": "q1", "type": "number", "required": true},
            {"id": "q2", "type": "text"}
        ]
    }));
    let answers = submitted(&[
        ("name", "Ada"),
        ("phone", "nope"),
        ("available", "yes"),
        ("q1", "7"),
        // q2 unanswered and optional: dropped from both maps.
    ]);

    let (verdict, verified) = processor::process(&record, &answers);

    assert!(!verified);
    for id in ["name", "phone", "available", "q1"] {
        let corrected = verdict.corrected_data.contains_key(id);
        let errored = verdict.errors.contains_key(id);
        // No id may appear in both maps.
        assert!(!(corrected && errored), "id {} in both maps", id);
    }
    assert!(verdict.errors.contains_key("phone"));
    assert!(!verdict.errors.contains_key("q2"));
    assert!(!verdict.corrected_data.contains_key("q2"));
}

#[test]
fn test_verdict_serialization_roundtrip() {
    let record = record(json!({
        "sessionId": "sess-ser",
        "fields": {"phone": ""}
    }));
    let (verdict, _) = processor::process(&record, &submitted(&[("phone", "3.14")]));

    let wire = serde_json::to_string(&verdict).unwrap();
    let decoded: VerdictDocument = serde_json::from_str(&wire).unwrap();
    assert_eq!(verdict, decoded);

    let value: Value = serde_json::from_str(&wire).unwrap();
    assert_eq!(value["sessionId"], "sess-ser");
    assert_eq!(value["correctedData"]["phone"], json!(3.14));
    assert!(value["timestamp"].as_str().unwrap().contains('T'));
}

#[test]
fn test_timestamp_is_utc_iso8601() {
    let (verdict, _) = processor::process(&RecordDocument::default(), &HashMap::new());
    let parsed = chrono::DateTime::parse_from_rfc3339(&verdict.timestamp).unwrap();
    assert_eq!(parsed.offset().local_minus_utc(), 0);
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_verify_route_returns_verdict() {
    let router = create_router(HandlerState::new());

    let body = json!({
        "record": {
            "sessionId": "sess-http",
            "fields": {"name": ""},
            "additionalQuestions": [
                {"id": "q1", "type": "yesno", "required": true}
            ]
        },
        "answers": {"name": "Ada", "q1": "no"}
    });

    let response = router.oneshot(json_request("/verify", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["verified"], true);
    assert_eq!(json["data"]["correctedData"]["q1"], "no");
    assert!(json["metadata"]["request_id"].is_string());
}

#[tokio::test]
async fn test_verify_route_not_verified_is_still_200() {
    let router = create_router(HandlerState::new());

    let body = json!({
        "record": {"sessionId": "s", "fields": {"email": ""}},
        "answers": {"email": "nope"}
    });

    let response = router.oneshot(json_request("/verify", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["data"]["verified"], false);
    assert_eq!(
        json["data"]["errors"]["email"],
        "Enter a valid email address (e.g., user@example.com)"
    );
}

#[tokio::test]
async fn test_verify_route_rejects_malformed_body() {
    let router = create_router(HandlerState::new());

    let request = Request::builder()
        .method("POST")
        .uri("/verify")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_validate_route_contract_shape() {
    let router = create_router(HandlerState::new());

    let body = json!({"value": "3.14", "vtype": "number", "required": true});
    let response = router
        .oneshot(json_request("/validate", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    // Bare {ok, msg} shape, no envelope.
    assert_eq!(json, json!({"ok": true, "msg": ""}));
}

#[tokio::test]
async fn test_validate_route_defaults_and_rejection() {
    let router = create_router(HandlerState::new());

    // Missing value with required unset defaults to ok (optional empty).
    let response = router
        .clone()
        .oneshot(json_request("/validate", json!({"vtype": "email"})))
        .await
        .unwrap();
    let json = response_json(response).await;
    assert_eq!(json["ok"], true);

    let response = router
        .oneshot(json_request(
            "/validate",
            json!({"value": "maybe", "vtype": "yesno", "required": true}),
        ))
        .await
        .unwrap();
    let json = response_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["msg"], "Answer must be Yes or No");
}

#[tokio::test]
async fn test_health_route() {
    let router = create_router(HandlerState::new());

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["validation_engine"], true);
}

#[tokio::test]
async fn test_field_types_route() {
    let router = create_router(HandlerState::new());

    let request = Request::builder()
        .method("GET")
        .uri("/field-types")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["data"]["defaults"]["phone"], "number");
    assert_eq!(json["data"]["defaults"]["skills"], "text");
    assert_eq!(json["data"]["fallback"], "text");
}

#[test]
fn test_cli_verify_writes_output_file() {
    use record_verification::cli::{commands, ExitCode, OutputFormat};
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let record_path = dir.path().join("record.json");
    let answers_path = dir.path().join("answers.json");
    let output_path = dir.path().join("verdict.json");

    let mut record_file = std::fs::File::create(&record_path).unwrap();
    record_file
        .write_all(br#"{"sessionId": "cli-1", "fields": {"name": ""}}"#)
        .unwrap();
    let mut answers_file = std::fs::File::create(&answers_path).unwrap();
    answers_file.write_all(br#"{"name": "Ada"}"#).unwrap();

    let code = commands::execute_verify(
        record_path,
        Some(answers_path),
        Some(output_path.clone()),
        Some(OutputFormat::Json),
    )
    .unwrap();
    assert_eq!(code, ExitCode::Success);

    let written: VerdictDocument =
        serde_json::from_str(&std::fs::read_to_string(output_path).unwrap()).unwrap();
    assert!(written.verified);
    assert_eq!(written.corrected_data["name"], json!("Ada"));
}
