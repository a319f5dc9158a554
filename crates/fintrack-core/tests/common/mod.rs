//! Shared fixtures: an in-process stub backend and a recording interceptor.

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, Uri};
use axum::{Json, Router};
use fintrack_core::{ClientConfig, FintrackApi, RequestError, ResponseInterceptor};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// A request as seen by the stub backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub accept: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
pub struct StubState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubState {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> RecordedRequest {
        self.requests().last().cloned().expect("no request recorded")
    }
}

async fn record(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Value> {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let body = if body.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&body).expect("request body is not JSON"))
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        accept: header_value(header::ACCEPT),
        content_type: header_value(header::CONTENT_TYPE),
        body,
    });

    Json(json!({ "method": method.as_str(), "path": uri.path() }))
}

/// Start a backend that records every request and echoes method and path.
pub async fn start_recording_backend() -> (SocketAddr, StubState) {
    let state = StubState::default();
    let app = Router::new().fallback(record).with_state(state.clone());
    (serve(app).await, state)
}

/// Serve `app` on an ephemeral local port.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend failed");
    });
    addr
}

pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}/", addr)
}

/// Interceptor that keeps everything it observes.
#[derive(Default)]
pub struct RecordingInterceptor {
    errors: Mutex<Vec<RequestError>>,
    responses: Mutex<Vec<(String, String, u16)>>,
}

impl RecordingInterceptor {
    pub fn errors(&self) -> Vec<RequestError> {
        self.errors.lock().unwrap().clone()
    }

    pub fn responses(&self) -> Vec<(String, String, u16)> {
        self.responses.lock().unwrap().clone()
    }
}

impl ResponseInterceptor for RecordingInterceptor {
    fn on_response(&self, method: &Method, url: &str, status: u16) {
        self.responses
            .lock()
            .unwrap()
            .push((method.to_string(), url.to_string(), status));
    }

    fn on_error(&self, error: &RequestError) {
        self.errors.lock().unwrap().push(error.clone());
    }
}

/// Build an API that reports into a recording interceptor.
pub fn recording_api(config: ClientConfig) -> (FintrackApi, Arc<RecordingInterceptor>) {
    let interceptor = Arc::new(RecordingInterceptor::default());
    let api = FintrackApi::with_interceptor(config, interceptor.clone()).unwrap();
    (api, interceptor)
}
