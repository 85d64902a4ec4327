//! Mock search endpoint for client tests.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"message": "error"}"#.to_string(),
            delay_ms: 0,
        }
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[derive(Default)]
struct Shared {
    responses: VecDeque<MockResponse>,
    queries: Vec<HashMap<String, String>>,
}

pub struct MockUpstream {
    pub addr: SocketAddr,
    shared: Arc<Mutex<Shared>>,
}

impl MockUpstream {
    pub async fn start() -> Self {
        let shared = Arc::new(Mutex::new(Shared::default()));
        let app = Router::new()
            .route("/api/v1/search", get(handle))
            .with_state(Arc::clone(&shared));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, shared }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1/search", self.addr)
    }

    pub async fn enqueue(&self, response: MockResponse) {
        self.shared.lock().await.responses.push_back(response);
    }

    pub async fn queries(&self) -> Vec<HashMap<String, String>> {
        self.shared.lock().await.queries.clone()
    }
}

async fn handle(
    State(shared): State<Arc<Mutex<Shared>>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let response = {
        let mut shared = shared.lock().await;
        shared.queries.push(query);
        shared
            .responses
            .pop_front()
            .unwrap_or_else(|| MockResponse::json(r#"{"hits": [], "page": 0, "nbPages": 0}"#))
    };
    if response.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(response.delay_ms)).await;
    }
    let status = StatusCode::from_u16(response.status).unwrap();
    (
        status,
        [("content-type", "application/json")],
        response.body,
    )
        .into_response()
}
