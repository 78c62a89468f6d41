//! Gateway behaviour against a local upstream
//!
//! Run with: cargo test -p football-client --test gateway

use axum::{
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use football_client::{FetchError, FetchGateway, PredictionSource};
use football_core::{GatewayConfig, TipType};
use serde_json::json;
use std::time::Duration;
use url::Url;

async fn spawn_upstream(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{}/", addr)).unwrap()
}

fn upstream() -> Router {
    Router::new()
        .route(
            "/predictions",
            get(|| async {
                Json(json!([
                    {
                        "match_id": 1,
                        "date": "2024-05-04",
                        "time": "17:30",
                        "league": "Primeira Liga",
                        "home_team": "Benfica",
                        "away_team": "Porto",
                        "predictions": {
                            "winner": {"class": 0, "confidence": 0.61},
                            "over_2_5": {"class": 1, "confidence": 0.55},
                            "over_1_5": {"class": 1, "confidence": 0.83},
                            "double_chance": {"class": 0, "confidence": 0.78},
                            "btts": {"class": 0, "confidence": 0.52}
                        }
                    },
                    {"match_id": 2, "home_team": "Braga", "away_team": "Sporting"}
                ]))
            }),
        )
        .route(
            "/predictions/{id}",
            get(|axum::extract::Path(id): axum::extract::Path<String>| async move {
                if id == "1" {
                    Json(json!({"match_id": 1, "home_team": "Benfica", "away_team": "Porto"}))
                        .into_response()
                } else {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({"detail": "Prediction for this match_id not found."})),
                    )
                        .into_response()
                }
            }),
        )
        .route("/stats", get(|| async { Json(json!({"winner": {"percent": 62.5}})) }))
        .route("/meta/last-update", get(|| async { Json(json!(null)) }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({}))
            }),
        )
        .route("/broken", get(|| async { "<html>not json</html>" }))
        .route(
            "/whoami",
            get(|headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                Json(json!({ "authorization": auth }))
            }),
        )
        .route(
            "/headers",
            get(|headers: HeaderMap| async move {
                let value = |name: &str| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string)
                };
                Json(json!({
                    "request_id": value("x-request-id"),
                    "accept": value("accept"),
                }))
            }),
        )
}

async fn gateway() -> FetchGateway {
    let base = spawn_upstream(upstream()).await;
    FetchGateway::new(GatewayConfig::new(base)).unwrap()
}

#[tokio::test]
async fn test_fetch_predictions_in_order() {
    let gateway = gateway().await;
    let records = gateway.predictions().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].home_team, "Benfica");
    assert_eq!(records[1].home_team, "Braga");
    assert_eq!(records[0].tip(&TipType::Over15).unwrap().confidence, 0.83);
}

#[tokio::test]
async fn test_fetch_single_prediction() {
    let gateway = gateway().await;
    let record = gateway.prediction("1").await.unwrap();
    assert_eq!(record.away_team, "Porto");
}

#[tokio::test]
async fn test_not_found_is_upstream_error() {
    let gateway = gateway().await;
    let err = gateway.prediction("404").await.unwrap_err();

    match err {
        FetchError::Upstream {
            status,
            status_text,
            body,
            ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(status_text, "Not Found");
            assert_eq!(
                body,
                Some(json!({"detail": "Prediction for this match_id not found."}))
            );
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_route_is_upstream_error_without_body() {
    let gateway = gateway().await;
    let err = gateway.fetch_path("nowhere").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(matches!(err, FetchError::Upstream { body: None, .. }));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let gateway = gateway().await;
    let url = gateway.url_for("slow").unwrap();

    let started = std::time::Instant::now();
    let err = gateway
        .fetch(url.clone(), Duration::from_millis(100))
        .await
        .unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(2));
    assert!(err.is_timeout());
    match &err {
        FetchError::Timeout { url: failed, timeout } => {
            assert_eq!(failed, url.as_str());
            assert_eq!(*timeout, Duration::from_millis(100));
        }
        other => panic!("expected timeout, got {:?}", other),
    }
    assert!(err.to_string().contains("100 ms"));
}

#[tokio::test]
async fn test_configured_timeout_applies_to_typed_calls() {
    let base = spawn_upstream(Router::new().route(
        "/stats",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    ))
    .await;
    let config = GatewayConfig::new(base).with_timeout(Duration::from_millis(50));
    let gateway = FetchGateway::new(config).unwrap();

    let err = PredictionSource::stats(&gateway).await.unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let gateway = gateway().await;
    let err = gateway.fetch_path("broken").await.unwrap_err();
    match err {
        FetchError::MalformedResponse { url, .. } => assert!(url.ends_with("/broken")),
        other => panic!("expected malformed response, got {:?}", other),
    }
}

#[tokio::test]
async fn test_wrong_shape_is_malformed() {
    let base = spawn_upstream(
        Router::new().route("/predictions", get(|| async { Json(json!({"oops": true})) })),
    )
    .await;
    let gateway = FetchGateway::new(GatewayConfig::new(base)).unwrap();
    let err = gateway.predictions().await.unwrap_err();
    assert!(matches!(err, FetchError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_null_payloads_are_absence() {
    let gateway = gateway().await;
    assert_eq!(gateway.last_update().await.unwrap(), None);
    let stats = gateway.stats().await.unwrap().unwrap();
    assert_eq!(stats.percent(&TipType::Winner), Some(62.5));
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let base = spawn_upstream(upstream()).await;

    let anonymous = FetchGateway::new(GatewayConfig::new(base.clone())).unwrap();
    let body = anonymous.fetch_path("whoami").await.unwrap();
    assert_eq!(body, json!({"authorization": null}));

    let proxy = FetchGateway::new(GatewayConfig::new(base).with_bearer_token("s3cret")).unwrap();
    let body = proxy.fetch_path("whoami").await.unwrap();
    assert_eq!(body, json!({"authorization": "Bearer s3cret"}));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = Url::parse(&format!("http://{}/", addr)).unwrap();
    let gateway = FetchGateway::new(GatewayConfig::new(base)).unwrap();
    let err = gateway.fetch_path("predictions").await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn test_per_call_headers_are_sent() {
    let gateway = gateway().await;
    let url = gateway.url_for("headers").unwrap();

    let mut headers = HeaderMap::new();
    headers.insert("x-request-id", HeaderValue::from_static("req-42"));
    let body = gateway
        .fetch_with_headers(url.clone(), headers, gateway.timeout())
        .await
        .unwrap();
    assert_eq!(
        body,
        json!({"request_id": "req-42", "accept": "application/json"})
    );

    let body = gateway.fetch(url, gateway.timeout()).await.unwrap();
    assert_eq!(body["request_id"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_wrong_shaped_stats_entries_do_not_fail_the_call() {
    let base = spawn_upstream(Router::new().route(
        "/stats",
        get(|| async {
            Json(json!({"winner": 55.0, "btts": {"percent": 70.0}, "best_type": 3}))
        }),
    ))
    .await;
    let gateway = FetchGateway::new(GatewayConfig::new(base)).unwrap();

    let stats = gateway.stats().await.unwrap().unwrap();
    assert_eq!(stats.winner, None);
    assert_eq!(stats.average_accuracy(), 70.0);
    assert!(!stats.is_empty());
}
