//! HTTP API tests: drive the router in-process with `oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sift_core::{DatabaseLocation, Sentiment, SiftConfig};
use sift_llm::{ExtractedMetadata, StaticExtractor};
use sift_server::{build_router, AppState};
use sift_store::{NewAnalysis, SqliteStore};
use tower::ServiceExt;

fn metadata() -> ExtractedMetadata {
    ExtractedMetadata {
        summary: "Hospitals are adopting AI diagnostics.".into(),
        title: Some("AI in Healthcare".into()),
        topics: vec!["AI".into(), "Healthcare".into(), "Diagnostics".into()],
        sentiment: Sentiment::Positive,
        confidence: 0.92,
    }
}

fn setup_with(extractor: Arc<StaticExtractor>, store: SqliteStore) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(SiftConfig::default(), store, extractor));
    (build_router(state.clone()), state)
}

fn setup(extractor: StaticExtractor) -> (Router, Arc<AppState>, Arc<StaticExtractor>) {
    let extractor = Arc::new(extractor);
    let (app, state) = setup_with(extractor.clone(), SqliteStore::open_in_memory().unwrap());
    (app, state, extractor)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post_analyze(app: &Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

fn stored(topics: [&str; 3], keywords: &[&str]) -> NewAnalysis {
    NewAnalysis {
        raw_text: "text".into(),
        summary: "summary".into(),
        title: None,
        topics: topics.iter().map(|s| s.to_string()).collect(),
        sentiment: Sentiment::Neutral,
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        confidence: 0.5,
    }
}

#[tokio::test]
async fn test_health() {
    let (app, _, _) = setup(StaticExtractor::new(metadata()));
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "LLM Knowledge Extractor");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_analyze_creates_record() {
    let (app, state, extractor) = setup(StaticExtractor::new(metadata()));
    let text = "Hospitals use AI diagnostics. The hospital staff trust the diagnostics tools.";

    let (status, body) = post_analyze(&app, &json!({ "text": text }).to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["summary"], "Hospitals are adopting AI diagnostics.");
    assert_eq!(body["title"], "AI in Healthcare");
    assert_eq!(body["topics"].as_array().unwrap().len(), 3);
    assert_eq!(body["sentiment"], "positive");
    let confidence = body["confidence"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&confidence));
    assert!(body["created_at"].is_string());
    assert!(body.get("raw_text").is_none());

    let keywords: Vec<&str> = body["keywords"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(keywords.len() <= 3);
    assert_eq!(keywords.first(), Some(&"hospital"));

    assert_eq!(extractor.call_count(), 1);
    let record = state
        .store
        .get_analysis(body["id"].as_i64().unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(record.raw_text, text);
}

#[tokio::test]
async fn test_analyze_validation_errors() {
    let (app, state, extractor) = setup(StaticExtractor::new(metadata()));

    for body in [r#"{"text": ""}"#, r#"{}"#, r#"{"text": 42}"#, "not json"] {
        let (status, resp) = post_analyze(&app, body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body {}", body);
        assert!(resp["detail"].is_string());
    }

    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .body(Body::from(r#"{"text": "hello"}"#))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(extractor.call_count(), 0);
    assert_eq!(state.store.count_analyses().unwrap(), 0);
}

#[tokio::test]
async fn test_whitespace_text_is_bad_request() {
    let (app, state, _) = setup(StaticExtractor::new(metadata()));
    let (status, body) = post_analyze(&app, r#"{"text": "   \n\t "}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("empty"));
    assert_eq!(state.store.count_analyses().unwrap(), 0);
}

#[tokio::test]
async fn test_unconfigured_extractor_is_bad_request() {
    let (app, state, _) = setup(StaticExtractor::unconfigured());
    let (status, _) = post_analyze(&app, r#"{"text": "Some text."}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(state.store.count_analyses().unwrap(), 0);
}

#[tokio::test]
async fn test_service_failure_is_unavailable_and_not_persisted() {
    let (app, state, extractor) = setup(StaticExtractor::failing("rate limited"));
    let (status, body) = post_analyze(&app, r#"{"text": "Markets rallied today."}"#).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Service temporarily unavailable: "));
    assert_eq!(extractor.call_count(), 1);
    assert_eq!(state.store.count_analyses().unwrap(), 0);
}

#[tokio::test]
async fn test_malformed_model_output_is_internal_error() {
    let (app, state, _) = setup(StaticExtractor::malformed("topics: expected 3"));
    let (status, body) = post_analyze(&app, r#"{"text": "Markets rallied today."}"#).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["detail"].as_str().unwrap().starts_with("Internal error: "));
    assert_eq!(state.store.count_analyses().unwrap(), 0);
}

#[tokio::test]
async fn test_search_all_most_recent_first() {
    let (app, state, _) = setup(StaticExtractor::new(metadata()));
    let first = state.store.insert_analysis(&stored(["a", "b", "c"], &[])).unwrap();
    let second = state.store.insert_analysis(&stored(["d", "e", "f"], &[])).unwrap();
    let third = state.store.insert_analysis(&stored(["g", "h", "i"], &[])).unwrap();

    for uri in ["/search", "/search?topic="] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 3);
        let ids: Vec<i64> = body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }
}

#[tokio::test]
async fn test_search_by_topic_case_insensitive() {
    let (app, state, _) = setup(StaticExtractor::new(metadata()));
    let by_topic = state
        .store
        .insert_analysis(&stored(["Healthcare", "Policy", "Budget"], &["reform"]))
        .unwrap();
    let by_keyword = state
        .store
        .insert_analysis(&stored(["Finance", "Markets", "Stocks"], &["healthcare"]))
        .unwrap();
    state
        .store
        .insert_analysis(&stored(["Sports", "Football", "League"], &["season"]))
        .unwrap();

    let (status, body) = get(&app, "/search?topic=HealthCare").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    let ids: Vec<i64> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![by_keyword.id, by_topic.id]);

    let (_, body) = get(&app, "/search?topic=astronomy").await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["results"], json!([]));
}

#[tokio::test]
async fn test_analyze_then_search() {
    let (app, _, _) = setup(StaticExtractor::new(metadata()));
    let (status, created) =
        post_analyze(&app, r#"{"text": "Quantum computers break new records."}"#).await;
    assert_eq!(status, StatusCode::CREATED);

    // Matches a topic from the extractor.
    let (_, body) = get(&app, "/search?topic=diagnostics").await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["id"], created["id"]);
    assert!(body["results"][0].get("raw_text").is_none());
}

#[tokio::test]
async fn test_records_survive_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    let location = DatabaseLocation::File(dir.path().join("sift.db"));

    let id = {
        let store = SqliteStore::from_location(&location).unwrap();
        let (app, _) = setup_with(Arc::new(StaticExtractor::new(metadata())), store);
        let (status, body) = post_analyze(&app, r#"{"text": "Cloud revenue grew."}"#).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    };

    let store = SqliteStore::from_location(&location).unwrap();
    let (app, _) = setup_with(Arc::new(StaticExtractor::new(metadata())), store);
    let (_, body) = get(&app, "/search").await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["id"], id);
}
