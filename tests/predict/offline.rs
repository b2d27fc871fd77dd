use finsense_rs::{ErrorKind, FsError, PredictBuilder, SentimentLabel, health};
use httpmock::{
    Method::{GET, POST},
    MockServer,
};
use serde_json::json;

use crate::common::{client_for, fixture};

#[tokio::test]
async fn predict_posts_text_and_takes_first_result() {
    let server = MockServer::start();
    let text = "Tesla stock surges after record-breaking quarterly earnings report";

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/predict")
            .header("content-type", "application/json")
            .json_body(json!({ "text": text }));
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("predict_positive"));
    });

    let client = client_for(&server);
    let sentiment = PredictBuilder::new(&client, text).fetch().await.unwrap();

    mock.assert();
    assert_eq!(sentiment.label, SentimentLabel::Positive);
    assert_eq!(sentiment.confidence_pct(), 87);
}

#[tokio::test]
async fn extra_results_are_ignored_and_label_case_folded() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"label":"NEGATIVE","score":0.64},{"label":"neutral","score":0.3}]"#);
    });

    let client = client_for(&server);
    let sentiment = PredictBuilder::new(&client, "guidance cut").fetch().await.unwrap();
    assert_eq!(sentiment.label, SentimentLabel::Negative);
    assert_eq!(sentiment.confidence_pct(), 64);
}

#[tokio::test]
async fn blank_text_makes_no_request() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200).body(fixture("predict_positive"));
    });

    let client = client_for(&server);
    for text in ["", "   ", "\n\t"] {
        let err = PredictBuilder::new(&client, text).fetch().await.unwrap_err();
        assert!(matches!(err, FsError::EmptyInput));
    }
    mock.assert_calls(0);
}

#[tokio::test]
async fn empty_array_is_reported() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let client = client_for(&server);
    let err = PredictBuilder::new(&client, "flat day").fetch().await.unwrap_err();
    assert!(matches!(err, FsError::Data(_)), "got {err:?}");
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn object_instead_of_array_is_a_parse_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"label":"positive","score":0.9}"#);
    });

    let client = client_for(&server);
    let err = PredictBuilder::new(&client, "rally").fetch().await.unwrap_err();
    assert!(matches!(err, FsError::Json(_)), "got {err:?}");
}

#[tokio::test]
async fn model_not_loaded_surfaces_detail() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(500)
            .header("content-type", "application/json")
            .body(r#"{"detail":"Model not loaded"}"#);
    });

    let client = client_for(&server);
    let err = PredictBuilder::new(&client, "rally").fetch().await.unwrap_err();
    assert!(err.user_message().contains("Model not loaded"));
}

#[tokio::test]
async fn health_reports_active_service() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"message":"FinBERT Sentiment API (MarketAux Edition) is Running","status":"active"}"#);
    });

    let client = client_for(&server);
    let status = health::status(&client).await.unwrap();
    mock.assert();
    assert!(status.is_active());
    assert!(status.message.contains("FinBERT"));
}
