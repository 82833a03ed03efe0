//! HTTP seeding against a throwaway local server.

use crate::seed_args;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use ingest_client::{HttpIngestClient, IngestError, IngestSink, UsersUpsertRequest};
use recsys_seed::run_seed;
use seed_core::User;
use seed_populate::{SeedOutcome, SeedStage};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Requests the server accepted, as (path, JSON body).
#[derive(Clone, Default)]
struct ServerState {
    requests: Arc<Mutex<Vec<(String, Value)>>>,
    /// Path answered with 503 instead of 200
    fail_path: Option<&'static str>,
}

impl ServerState {
    fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|(path, _)| path).collect()
    }
}

/// HTTP handler that records every POST body
async fn record(State(state): State<ServerState>, uri: Uri, body: String) -> Response {
    if state.fail_path == Some(uri.path()) {
        return (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response();
    }

    let json: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    state
        .requests
        .lock()
        .unwrap()
        .push((uri.path().to_string(), json));
    (StatusCode::OK, "{}").into_response()
}

/// Start a test HTTP server on an ephemeral port
async fn start_test_server(
    fail_path: Option<&'static str>,
) -> anyhow::Result<(String, ServerState, tokio::task::JoinHandle<()>)> {
    let state = ServerState {
        fail_path,
        ..ServerState::default()
    };
    let app = Router::new().fallback(record).with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let base_url = format!("http://{addr}");

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok((base_url, state, server_handle))
}

fn sample_users() -> Vec<User> {
    vec![User {
        user_id: "user-0001".to_string(),
        traits: BTreeMap::from([("plan".to_string(), "pro".to_string())]),
    }]
}

#[tokio::test]
async fn test_http_seed_posts_stages_in_order() -> anyhow::Result<()> {
    let (base_url, state, server) = start_test_server(None).await?;

    let report = run_seed(seed_args(&base_url, false)).await?;
    assert!(report.is_success());

    let paths = state.paths();
    assert_eq!(
        paths,
        vec![
            "/v1/event-types:upsert",
            "/v1/users:upsert",
            "/v1/items:upsert",
            "/v1/events:batch",
        ]
    );

    let requests = state.requests();
    let event_types = &requests[0].1;
    assert_eq!(event_types["namespace"], "integration");
    assert_eq!(
        event_types["types"][1],
        serde_json::json!({
            "name": "Purchase",
            "type": 3,
            "weight": 0.4,
            "half_life_days": 60.0,
            "is_active": true
        })
    );

    let users = requests[1].1["users"].as_array().unwrap();
    assert_eq!(users.len(), 12);
    assert_eq!(users[0]["user_id"], "user-0001");
    let user_ids: HashSet<&str> = users
        .iter()
        .map(|u| u["user_id"].as_str().unwrap())
        .collect();

    let items = requests[2].1["items"].as_array().unwrap();
    assert_eq!(items.len(), 30);
    let item_ids: HashSet<&str> = items
        .iter()
        .map(|i| i["item_id"].as_str().unwrap())
        .collect();
    for item in items {
        let brand = item["props"]["brand"].as_str().unwrap();
        assert!(["acme", "globex", "initech"].contains(&brand));
    }

    let events = requests[3].1["events"].as_array().unwrap();
    assert_eq!(events.len(), report.events_uploaded);
    for event in events {
        assert!(user_ids.contains(event["user_id"].as_str().unwrap()));
        assert!(item_ids.contains(event["item_id"].as_str().unwrap()));
        let kind = event["type"].as_i64().unwrap();
        assert!(kind == 0 || kind == 3);
        if kind == 0 {
            assert_eq!(event["value"], 1);
        }
    }

    server.abort();
    Ok(())
}

#[tokio::test]
async fn test_http_rejection_stops_the_run() -> anyhow::Result<()> {
    let (base_url, state, server) = start_test_server(Some("/v1/items:upsert")).await?;

    let report = run_seed(seed_args(&base_url, false)).await?;
    assert_eq!(
        report.outcome,
        SeedOutcome::Failed {
            stage: SeedStage::Items,
            message: "Service temporarily unavailable. Please try again later.".to_string(),
        }
    );
    assert_eq!(
        report.completed_stages,
        vec![SeedStage::RegisterEventTypes, SeedStage::Users]
    );
    assert_eq!(
        state.paths(),
        vec!["/v1/event-types:upsert", "/v1/users:upsert"]
    );

    server.abort();
    Ok(())
}

#[tokio::test]
async fn test_client_reports_status_and_body() -> anyhow::Result<()> {
    let (base_url, _state, server) = start_test_server(Some("/v1/users:upsert")).await?;
    let client = HttpIngestClient::new(&base_url)?;

    let users = sample_users();
    let err = client
        .upsert_users(&UsersUpsertRequest {
            namespace: "demo",
            users: &users,
        })
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    match err {
        IngestError::Status { body, .. } => assert_eq!(body, "maintenance"),
        other => panic!("expected status error, got {other:?}"),
    }

    server.abort();
    Ok(())
}

#[tokio::test]
async fn test_client_reports_transport_errors() -> anyhow::Result<()> {
    // Bind then drop a listener to get a port nobody is serving.
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = HttpIngestClient::new(&format!("http://{addr}"))?;
    let users = sample_users();
    let err = client
        .upsert_users(&UsersUpsertRequest {
            namespace: "demo",
            users: &users,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, IngestError::Transport(_)));
    assert!(err.to_string().starts_with("Network error"));
    Ok(())
}

#[test]
fn test_client_rejects_bad_base_urls() {
    assert!(matches!(
        HttpIngestClient::new("not a url"),
        Err(IngestError::InvalidUrl { .. })
    ));
    assert!(matches!(
        HttpIngestClient::new("ftp://example.com"),
        Err(IngestError::InvalidUrl { .. })
    ));
}
