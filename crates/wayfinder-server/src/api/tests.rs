use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::{api, config::Config, state::AppState};

fn setup_app() -> (axum::Router, Arc<AppState>) {
    let mut config = Config::from_env();
    // Keep the advice path synchronous so responses are deterministic.
    config.advice_enabled = false;
    config.narration_ms_per_char = 0;

    let state = Arc::new(AppState::new(config));
    let app = api::routes().with_state(state.clone());
    (app, state)
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

async fn post_json(app: &axum::Router, uri: &str, body: Value) -> axum::response::Response {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

async fn get(app: &axum::Router, uri: &str) -> axum::response::Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

async fn create_session(app: &axum::Router) -> String {
    let res = post_json(app, "/v1/sessions", json!({})).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = read_json(res).await;
    body["id"].as_str().expect("session id").to_string()
}

#[tokio::test]
async fn airports_are_listed_and_fetched() {
    let (app, _state) = setup_app();

    let res = get(&app, "/v1/airports").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body.as_array().unwrap().len(), 7);

    let res = get(&app, "/v1/airports/del-t3").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["name"], "Delhi IGI Terminal 3");

    let res = get(&app, "/v1/airports/lhr-t5").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn plan_and_walk_a_route() {
    let (app, _state) = setup_app();
    let session_id = create_session(&app).await;

    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/plan", session_id),
        json!({
            "airport_id": "del-t3",
            "start_id": "del-e1",
            "end_id": "del-g15",
            "mode": "wheelchair"
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["phase"]["phase"], "navigating");
    assert_eq!(body["currentStep"], 0);
    let steps = body["path"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(body["path"]["estimatedTime"], "14m");

    // Fallback advice is attached synchronously in offline mode.
    let res = get(&app, &format!("/v1/sessions/{}", session_id)).await;
    let body = read_json(res).await;
    assert_eq!(body["advice"]["stepIndex"], 0);
    assert!(body["advice"]["tip"].as_str().unwrap().len() > 0);

    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/step", session_id),
        json!({ "direction": "next" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["currentStep"], 1);

    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/step", session_id),
        json!({ "direction": "prev" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["currentStep"], 0);

    // Walking off the start of the route is rejected.
    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/step", session_id),
        json!({ "direction": "prev" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn plan_rejects_bad_input() {
    let (app, _state) = setup_app();
    let session_id = create_session(&app).await;

    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/plan", session_id),
        json!({
            "airport_id": "lhr-t5",
            "start_id": "del-e1",
            "end_id": "del-g15",
            "mode": "standard"
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/plan", session_id),
        json!({
            "airport_id": "del-t3",
            "start_id": "del-g15",
            "end_id": "del-g15",
            "mode": "standard"
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert!(body["error"].as_str().unwrap().contains("del-g15"));
}

#[tokio::test]
async fn language_change_retranslates_the_route() {
    let (app, _state) = setup_app();
    let session_id = create_session(&app).await;

    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/plan", session_id),
        json!({
            "airport_id": "blr-t2",
            "start_id": "blr-e",
            "end_id": "blr-g215",
            "mode": "standard",
            "language": "en"
        }),
    )
    .await;
    let before = read_json(res).await;

    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/language", session_id),
        json!({ "language": "hi" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let after = read_json(res).await;

    assert_eq!(after["language"], "hi");
    assert_ne!(
        before["path"]["steps"][0]["instruction"],
        after["path"]["steps"][0]["instruction"]
    );
    assert_eq!(
        before["path"]["steps"][0]["point"],
        after["path"]["steps"][0]["point"]
    );
}

#[tokio::test]
async fn emergency_lifecycle() {
    let (app, _state) = setup_app();
    let session_id = create_session(&app).await;

    // No route yet, nothing to evacuate from.
    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/emergency", session_id),
        json!({ "active": true }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    post_json(
        &app,
        &format!("/v1/sessions/{}/plan", session_id),
        json!({
            "airport_id": "del-t3",
            "start_id": "del-e1",
            "end_id": "del-g15",
            "mode": "wheelchair"
        }),
    )
    .await;

    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/emergency", session_id),
        json!({ "active": true }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["phase"]["phase"], "emergency");
    assert_eq!(body["path"]["id"], "emergency-1");
    assert!(body["advice"].is_null());

    // Double activation conflicts, as does planning mid-evacuation.
    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/emergency", session_id),
        json!({ "active": true }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/plan", session_id),
        json!({
            "airport_id": "del-t3",
            "start_id": "del-e1",
            "end_id": "del-g15",
            "mode": "standard"
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/emergency", session_id),
        json!({ "active": false }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["phase"]["phase"], "planning");
    assert!(body["path"].is_null());

    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/emergency", session_id),
        json!({ "active": false }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn narration_follows_the_single_flight_rule() {
    let (app, state) = setup_app();
    let session_id = create_session(&app).await;

    // Nothing to narrate before a route exists.
    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/narrate", session_id),
        json!({ "action": "start" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    post_json(
        &app,
        &format!("/v1/sessions/{}/plan", session_id),
        json!({
            "airport_id": "del-t3",
            "start_id": "del-e1",
            "end_id": "del-g15",
            "mode": "wheelchair"
        }),
    )
    .await;

    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/narrate", session_id),
        json!({ "action": "start" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = post_json(
        &app,
        &format!("/v1/sessions/{}/narrate", session_id),
        json!({ "action": "stop" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["speaking"], false);
    assert!(!state.narrator().is_speaking());
}

#[tokio::test]
async fn summary_uses_the_offline_instruction_list() {
    let (app, _state) = setup_app();
    let session_id = create_session(&app).await;

    let res = get(&app, &format!("/v1/sessions/{}/summary", session_id)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    post_json(
        &app,
        &format!("/v1/sessions/{}/plan", session_id),
        json!({
            "airport_id": "maa-t4",
            "start_id": "maa-e",
            "end_id": "maa-g4",
            "mode": "standard"
        }),
    )
    .await;

    let res = get(&app, &format!("/v1/sessions/{}/summary", session_id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["from"], "Departure Entry 1");
    assert_eq!(body["to"], "Gate 4");
    assert_eq!(body["steps"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_sessions_are_not_found() {
    let (app, _state) = setup_app();

    let res = get(&app, "/v1/sessions/nope").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = post_json(
        &app,
        "/v1/sessions/nope/step",
        json!({ "direction": "next" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
