//! Integration tests for REST API endpoints
//!
//! These tests build a real ShieldEngine and drive the router end-to-end.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use callshield_server::api::create_router;
use callshield_sdk::{CallOutcome, ShieldEngine, ShieldEngineBuilder};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Helper to create an engine and router
async fn create_test_app() -> (Arc<ShieldEngine>, Router) {
    let engine = Arc::new(
        ShieldEngineBuilder::new()
            .build()
            .await
            .expect("Failed to build engine"),
    );
    let router = create_router(Arc::clone(&engine));
    (engine, router)
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Percent-encode a query value
fn encode(text: &str) -> String {
    text.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_, router) = create_test_app().await;
    let (status, body) = send(&router, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

// =============================================================================
// Rules
// =============================================================================

#[tokio::test]
async fn test_rule_lifecycle() {
    let (_, router) = create_test_app().await;

    let (status, created) = send(
        &router,
        Method::POST,
        "/api/admin/rules",
        Some(json!({ "keyword": "安全账户", "risk_level": 5, "action": "block" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["keyword"], "安全账户");
    assert_eq!(created["risk_level"], 5);
    assert_eq!(created["action"], "block");
    let rule_id = created["rule_id"].as_u64().unwrap();

    let (status, rules) = send(&router, Method::GET, "/api/admin/rules", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rules.as_array().unwrap().len(), 1);
    assert_eq!(rules[0]["rule_id"], rule_id);

    let uri = format!("/api/admin/rules/{}", rule_id);
    let (status, body) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Deleted");

    let (_, rules) = send(&router, Method::GET, "/api/admin/rules", None).await;
    assert!(rules.as_array().unwrap().is_empty());

    let (status, body) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_invalid_rules_rejected_with_detail() {
    let (engine, router) = create_test_app().await;

    let cases = [
        json!({ "keyword": "", "risk_level": 3, "action": "alert" }),
        json!({ "keyword": "转账", "risk_level": 0, "action": "alert" }),
        json!({ "keyword": "转账", "risk_level": 6, "action": "alert" }),
        json!({ "keyword": "转账", "risk_level": 3, "action": "drop" }),
        json!({ "risk_level": 3, "action": "alert" }),
    ];

    for case in cases {
        let (status, body) = send(&router, Method::POST, "/api/admin/rules", Some(case.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", case);
        assert!(body["detail"].is_string(), "{}", case);
    }

    assert_eq!(engine.stats().active_rules, 0);
}

#[tokio::test]
async fn test_duplicate_keyword_rejected() {
    let (_, router) = create_test_app().await;
    let rule = json!({ "keyword": "刷单", "risk_level": 3, "action": "alert" });

    let (status, _) = send(&router, Method::POST, "/api/admin/rules", Some(rule.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&router, Method::POST, "/api/admin/rules", Some(rule)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_malformed_rule_id_rejected() {
    let (_, router) = create_test_app().await;
    let (status, body) = send(&router, Method::DELETE, "/api/admin/rules/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_rule_pagination() {
    let (_, router) = create_test_app().await;
    for i in 0..5 {
        send(
            &router,
            Method::POST,
            "/api/admin/rules",
            Some(json!({ "keyword": format!("kw{}", i), "risk_level": 1, "action": "alert" })),
        )
        .await;
    }

    let (_, page) = send(&router, Method::GET, "/api/admin/rules?skip=1&limit=2", None).await;
    let page = page.as_array().unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0]["keyword"], "kw1");
    assert_eq!(page[1]["keyword"], "kw2");
}

// =============================================================================
// Blacklist
// =============================================================================

#[tokio::test]
async fn test_blacklist_lifecycle() {
    let (_, router) = create_test_app().await;

    let (status, created) = send(
        &router,
        Method::POST,
        "/api/admin/blacklist",
        Some(json!({
            "number": "13800138000",
            "description": "冒充客服",
            "risk_level": 5,
            "source": "manual_admin"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["number"], "13800138000");
    assert_eq!(created["source"], "manual_admin");
    assert!(created["created_at"].is_string());
    let id = created["id"].as_u64().unwrap();

    let (_, entries) = send(&router, Method::GET, "/api/admin/blacklist", None).await;
    assert_eq!(entries.as_array().unwrap().len(), 1);

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/admin/blacklist",
        Some(json!({ "number": "13800138000" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    let uri = format!("/api/admin/blacklist/{}", id);
    let (status, _) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_malformed_number_rejected() {
    let (engine, router) = create_test_app().await;
    let (status, body) = send(
        &router,
        Method::POST,
        "/api/admin/blacklist",
        Some(json!({ "number": "call-me-maybe" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("digits"));
    assert_eq!(engine.stats().blacklist_count, 0);
}

// =============================================================================
// Stats
// =============================================================================

#[tokio::test]
async fn test_stats_endpoint() {
    let (engine, router) = create_test_app().await;
    let recorder = engine.recorder();
    recorder.record_user_registered();
    recorder.record_call(CallOutcome::FraudBlocked);
    recorder.record_call(CallOutcome::Clean);

    send(
        &router,
        Method::POST,
        "/api/admin/rules",
        Some(json!({ "keyword": "冻结", "risk_level": 4, "action": "block" })),
    )
    .await;

    let (status, stats) = send(&router, Method::GET, "/api/admin/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_users"], 1);
    assert_eq!(stats["total_calls"], 2);
    assert_eq!(stats["fraud_blocked"], 1);
    assert_eq!(stats["active_rules"], 1);
    assert_eq!(stats["blacklist_count"], 0);
    assert_eq!(stats["system_health"], "100%");
}

// =============================================================================
// Test console
// =============================================================================

#[tokio::test]
async fn test_text_match_endpoint() {
    let (_, router) = create_test_app().await;
    send(
        &router,
        Method::POST,
        "/api/admin/rules",
        Some(json!({ "keyword": "安全账户", "risk_level": 5, "action": "block" })),
    )
    .await;

    let uri = format!(
        "/api/admin/test/text_match?text={}",
        encode("我是公安局的，请把钱转入安全账户")
    );
    let (status, result) = send(&router, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["hit_keywords"], json!(["安全账户"]));
    assert_eq!(result["risk_level"], 5);
    assert_eq!(result["action"], "block");

    let uri = format!("/api/admin/test/text_match?text={}", encode("明天见"));
    let (_, result) = send(&router, Method::POST, &uri, None).await;
    assert_eq!(result["hit_keywords"], json!([]));
    assert_eq!(result["risk_level"], 0);
    assert_eq!(result["action"], "pass");
}

#[tokio::test]
async fn test_text_match_requires_text() {
    let (_, router) = create_test_app().await;
    let (status, body) = send(&router, Method::POST, "/api/admin/test/text_match", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_unknown_route_has_detail() {
    let (_, router) = create_test_app().await;
    let (status, body) = send(&router, Method::GET, "/api/admin/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].is_string());
}
