//! Shared test helpers: an in-memory wiring of the facade and a tiny
//! canned-response HTTP server for exercising the live gateway.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tiltcheck::infrastructure::http::retry::RetryPolicy;
use tiltcheck::infrastructure::storage::memory::InMemoryClientStore;
use tiltcheck::TiltCheck;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Facade wired to an in-memory store, an unroutable backend, zero demo
/// latency, and zero retry delay. Any accidental network call fails fast.
pub fn setup() -> TiltCheck {
    setup_with_base("http://127.0.0.1:1")
}

pub fn setup_with_base(base_url: &str) -> TiltCheck {
    TiltCheck::with_providers(Arc::new(InMemoryClientStore::default()), base_url)
        .with_demo_latency(Duration::ZERO)
        .with_retry_policy(RetryPolicy::new(3, Duration::ZERO))
}

pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub headers: Vec<(&'static str, String)>,
}

impl StubResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }
}

pub struct StubServer {
    pub base_url: String,
    /// Number of connections accepted, i.e. dispatch attempts.
    pub hits: Arc<AtomicUsize>,
    /// Raw request text per connection, for header assertions.
    pub requests: Arc<Mutex<Vec<String>>>,
}

/// Serve one canned response per connection, in order. Connections are
/// closed after each response so every retry attempt reconnects and counts.
pub async fn spawn_stub(responses: Vec<StubResponse>) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let queue = Arc::new(Mutex::new(VecDeque::from(responses)));

    let accept_hits = hits.clone();
    let accept_requests = requests.clone();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            accept_hits.fetch_add(1, Ordering::SeqCst);
            let response = queue.lock().unwrap().pop_front();
            let requests = accept_requests.clone();
            tokio::spawn(async move {
                let raw = read_request(&mut socket).await;
                requests.lock().unwrap().push(raw);
                let rendered = render(response.unwrap_or_else(|| StubResponse::json(500, "{}")));
                let _ = socket.write_all(rendered.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    StubServer {
        base_url: format!("http://{addr}"),
        hits,
        requests,
    }
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let mut tmp = [0u8; 4096];
    let mut header_end: Option<usize> = None;
    let mut content_length: usize = 0;

    loop {
        match socket.read(&mut tmp).await {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&tmp[..n]);
                if header_end.is_none() {
                    if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
                        header_end = Some(pos + 4);
                        let headers = String::from_utf8_lossy(&buf[..pos]).to_ascii_lowercase();
                        for line in headers.lines() {
                            if let Some(value) = line.strip_prefix("content-length:") {
                                content_length = value.trim().parse().unwrap_or(0);
                            }
                        }
                    }
                }
                if let Some(end) = header_end {
                    if buf.len() >= end + content_length {
                        break;
                    }
                }
            }
            Err(_) => break,
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn render(r: StubResponse) -> String {
    let mut extra = String::new();
    for (name, value) in &r.headers {
        extra.push_str(&format!("{name}: {value}\r\n"));
    }
    format!(
        "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n{}\r\n{}",
        r.status,
        reason(r.status),
        r.body.len(),
        extra,
        r.body
    )
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
