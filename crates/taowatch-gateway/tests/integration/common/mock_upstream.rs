//! Mock upstream statistics API for integration tests.
//!
//! Provides a small HTTP server that can:
//! - Answer every request with a canned status and body
//! - Record the headers the gateway forwarded

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderName, StatusCode};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::{mpsc, Mutex};

/// Headers captured from one proxied request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub accept: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct MockState {
    status: u16,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A mock upstream server for testing.
pub struct MockUpstream {
    addr: SocketAddr,
    shutdown_tx: mpsc::Sender<()>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockUpstream {
    /// Start a mock upstream on an available port, answering every request
    /// with the given status and body.
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let state = MockState {
            status,
            body: body.into(),
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/stats", get(handle_stats))
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.recv().await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx,
            requests,
        }
    }

    /// URL the gateway should be pointed at.
    pub fn url(&self) -> String {
        format!("http://{}/stats", self.addr)
    }

    /// All requests received so far.
    pub async fn received(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    /// Shutdown the server.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

async fn handle_stats(
    State(state): State<MockState>,
    headers: HeaderMap,
) -> (StatusCode, [(HeaderName, &'static str); 1], String) {
    state.requests.lock().await.push(RecordedRequest {
        accept: header_value(&headers, header::ACCEPT),
        authorization: header_value(&headers, header::AUTHORIZATION),
    });
    (
        StatusCode::from_u16(state.status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

fn header_value(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}
