//! Prediction client tests against a local mock service

use boq_app::app::estimate_image;
use boq_app::predictor::{HttpPredictor, StructuralPredictor};
use boq_domain::CostCategory;
use boq_types::Error;
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

const PREDICT_PATH: &str = "/api/predict/";
const PLAN: &[u8] = b"floor plan bytes";

fn predictor(server: &MockServer) -> HttpPredictor {
    HttpPredictor::new(server.url(PREDICT_PATH), Duration::from_secs(5)).unwrap()
}

#[test]
fn test_success_response_builds_report() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(PREDICT_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "square_feet": 1000.4,
                "beds": 3,
                "baths": 2,
                "garages": 1,
                "estimated_cost": 150000
            }));
    });

    let report = estimate_image(&predictor(&server), PLAN).unwrap();

    mock.assert();
    assert_eq!(report.prediction.square_feet, 1000);
    assert_eq!(
        report.item(CostCategory::WindowsAndDoors, "Doors").unwrap().cost,
        480.0
    );
    assert_eq!(report.labour_cost, 30_000.0);
}

#[test]
fn test_error_body_becomes_missing_input() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(PREDICT_PATH);
        then.status(400)
            .header("content-type", "application/json")
            .json_body(json!({"error": "No image provided."}));
    });

    let err = estimate_image(&predictor(&server), PLAN).unwrap_err();

    mock.assert();
    assert!(err.is_retryable());
    match err {
        Error::MissingInput(msg) => {
            assert!(msg.contains("HTTP 400"), "{msg}");
            assert!(msg.contains("No image provided."), "{msg}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_request_carries_multipart_image_part() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(PREDICT_PATH)
            .body_includes("name=\"image\"")
            .body_includes("filename=\"upload.bin\"")
            .body_includes("floor plan bytes");
        then.status(200).json_body(json!({
            "square_feet": 800,
            "beds": 2,
            "baths": 1,
            "garages": 0,
            "estimated_cost": 90000
        }));
    });

    let payload = predictor(&server).predict(PLAN).unwrap();

    mock.assert();
    assert_eq!(payload.square_feet, Some(json!(800)));
}

#[test]
fn test_malformed_success_body_is_invalid_input() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(PREDICT_PATH);
        then.status(200).json_body(json!({
            "square_feet": "large",
            "beds": 2,
            "baths": 1,
            "garages": 0,
            "estimated_cost": 90000
        }));
    });

    let err = estimate_image(&predictor(&server), PLAN).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidInput {
            field: "square_feet",
            ..
        }
    ));
}
