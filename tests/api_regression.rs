//! API Regression Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! every endpoint using `tower::ServiceExt::oneshot()`.
//! No binary spawn, no network port.

use efficiency_engine::api::create_app;
use efficiency_engine::VariantCache;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use std::sync::{Arc, OnceLock};
use tower::ServiceExt;

fn shared_cache() -> Arc<VariantCache> {
    static CACHE: OnceLock<Arc<VariantCache>> = OnceLock::new();
    Arc::clone(CACHE.get_or_init(|| Arc::new(VariantCache::embedded().unwrap())))
}

fn app() -> Router {
    create_app(shared_cache())
}

async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read(resp).await
}

async fn post(uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read(resp).await
}

async fn read(resp: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ============================================================================
// Read Endpoints
// ============================================================================

#[tokio::test]
async fn health_lists_every_variant() {
    let (status, json) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(
        json["data"]["variants"],
        serde_json::json!(["main", "ironman", "ultimate", "lvl3", "f2p"])
    );
    assert!(json["meta"]["timestamp"].is_string());
}

#[tokio::test]
async fn variants_report_baselines() {
    let (status, json) = get("/api/v1/efficiency/variants").await;
    assert_eq!(status, StatusCode::OK);
    let variants = json["data"].as_array().unwrap();
    assert_eq!(variants.len(), 5);
    assert_eq!(variants[0]["name"], "main");
    assert_eq!(variants[0]["skills"], 23);
    assert_eq!(variants[0]["bosses"], 59);
    assert!(variants[0]["maximum_ehp"].as_f64().unwrap() > variants[0]["maxed_ehp"].as_f64().unwrap());
}

#[tokio::test]
async fn rates_default_to_main_skill_rates() {
    let (status, json) = get("/api/v1/efficiency/rates").await;
    assert_eq!(status, StatusCode::OK);
    let skills = json["data"].as_array().unwrap();
    assert_eq!(skills.len(), 23);
    assert_eq!(skills[0]["skill"], "attack");
    assert_eq!(skills[0]["methods"][0]["start_exp"], 0);
}

#[tokio::test]
async fn rates_ehb_for_f2p() {
    let (status, json) = get("/api/v1/efficiency/rates?metric=ehb&type=f2p").await;
    assert_eq!(status, StatusCode::OK);
    let bosses: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|b| b["boss"].as_str())
        .collect();
    assert_eq!(bosses, vec!["bryophyta", "obor", "scurrius"]);
}

#[tokio::test]
async fn rates_reject_unknown_metric_and_variant() {
    let (status, json) = get("/api/v1/efficiency/rates?metric=xp").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");

    let (status, json) = get("/api/v1/efficiency/rates?type=seasonal").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]["message"].as_str().unwrap().contains("seasonal"));
}

// ============================================================================
// Computations
// ============================================================================

#[tokio::test]
async fn compute_returns_full_map() {
    let body = serde_json::json!({
        "type": "regular",
        "experience": { "woodcutting": 13_034_431, "attack": -1, "sailing": 99 },
        "killcounts": { "zulrah": 70 }
    });
    let (status, json) = post("/api/v1/efficiency/compute", body).await;
    assert_eq!(status, StatusCode::OK);

    let data = &json["data"];
    assert_eq!(data["variant"], "main");
    assert_eq!(data["ehb"], 2.0);
    assert_eq!(data["bosses"]["zulrah"], 2.0);
    assert!(data["ehp"].as_f64().unwrap() > 0.0);
    assert_eq!(data["skills"]["overall"], data["ehp"]);
    assert_eq!(data["skills"]["attack"], 0.0);
    assert!(data["ttm"].as_f64().unwrap() > 0.0);
    assert!(data["tt200m"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn compute_with_empty_body_uses_main_zero_snapshot() {
    let (status, json) = post("/api/v1/efficiency/compute", serde_json::json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["variant"], "main");
    assert_eq!(json["data"]["ehp"], 0.0);
    assert_eq!(json["data"]["ehb"], 0.0);
}

#[tokio::test]
async fn compute_selects_variant_from_classification() {
    let body = serde_json::json!({ "type": "ultimate", "build": "f2p" });
    let (_, json) = post("/api/v1/efficiency/compute", body).await;
    assert_eq!(json["data"]["variant"], "ultimate");

    let body = serde_json::json!({ "type": "hardcore" });
    let (_, json) = post("/api/v1/efficiency/compute", body).await;
    assert_eq!(json["data"]["variant"], "ironman");

    let body = serde_json::json!({ "build": "lvl3" });
    let (_, json) = post("/api/v1/efficiency/compute", body).await;
    assert_eq!(json["data"]["variant"], "lvl3");
}

#[tokio::test]
async fn compute_rejects_unknown_classification() {
    let (status, json) =
        post("/api/v1/efficiency/compute", serde_json::json!({ "type": "group_ironman" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]["message"].as_str().unwrap().contains("group_ironman"));

    let (status, _) = post("/api/v1/efficiency/compute", serde_json::json!({ "build": "pure" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn compute_rejects_malformed_body() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/efficiency/compute")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, json) = read(resp).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn skill_endpoint_matches_compute() {
    let body = serde_json::json!({ "experience": { "fishing": 5_000_000, "cooking": 1_000_000 } });
    let (_, full) = post("/api/v1/efficiency/compute", body.clone()).await;
    let (status, json) = post("/api/v1/efficiency/skills/fishing", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["skill"], "fishing");
    assert_eq!(json["data"]["ehp"], full["data"]["skills"]["fishing"]);
}

#[tokio::test]
async fn boss_endpoint_scenario() {
    let body = serde_json::json!({ "killcounts": { "tzkal_zuk": 100 } });
    let (status, json) = post("/api/v1/efficiency/bosses/tzkal_zuk", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["boss"], "tzkal_zuk");
    assert_eq!(json["data"]["ehb"], 125.0);
}

#[tokio::test]
async fn unknown_identifiers_are_not_found() {
    let (status, json) = post("/api/v1/efficiency/skills/sailing", serde_json::json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");

    let (status, _) = post("/api/v1/efficiency/bosses/cerberos", serde_json::json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
