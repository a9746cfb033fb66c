//! Canned HTTP server for exercising the real clients

#![allow(dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use std::collections::VecDeque;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One response, served in order of arrival
#[derive(Debug, Clone)]
pub struct Canned {
    pub status: u16,
    pub body: String,
    pub content_type: &'static str,
}

impl Canned {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            content_type: "application/json",
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            content_type: "text/plain",
        }
    }
}

impl IntoResponse for Canned {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

/// A request as the stub saw it
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: String,
}

impl Captured {
    /// Path plus query string
    pub fn target(&self) -> &str {
        self.uri.path_and_query().map_or("", |pq| pq.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }

    /// Decoded `application/x-www-form-urlencoded` body
    pub fn form(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.body.as_bytes())
            .into_owned()
            .collect()
    }

    pub fn form_value(&self, name: &str) -> Option<String> {
        self.form().into_iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Decoded query string parameter
    pub fn query_value(&self, name: &str) -> Option<String> {
        let query = self.uri.query()?;
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }
}

#[derive(Default)]
struct Script {
    queue: Mutex<VecDeque<Canned>>,
    captured: Mutex<Vec<Captured>>,
}

pub struct StubServer {
    pub base_url: String,
    script: Arc<Script>,
    _handle: JoinHandle<()>,
}

impl StubServer {
    /// Answer requests with `responses` in order; extra requests get a 500
    pub async fn start(responses: Vec<Canned>) -> Self {
        let script = Arc::new(Script {
            queue: Mutex::new(responses.into()),
            captured: Mutex::default(),
        });

        let app = Router::new()
            .fallback(respond)
            .with_state(Arc::clone(&script));

        let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
            .await
            .expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            script,
            _handle: handle,
        }
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.script.captured.lock().expect("capture lock").clone()
    }
}

async fn respond(
    State(script): State<Arc<Script>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Canned {
    script.captured.lock().expect("capture lock").push(Captured {
        method,
        uri,
        headers,
        body,
    });

    script
        .queue
        .lock()
        .expect("queue lock")
        .pop_front()
        .unwrap_or_else(|| Canned::text(500, "stub exhausted"))
}
