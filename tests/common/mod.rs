//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use lead_relay::config::AppConfig;
use lead_relay::http::HttpServer;

/// Boot the service on an ephemeral loopback port and return its address.
pub async fn spawn_app(config: AppConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// A mock sink endpoint with a programmable status and response delay.
///
/// Counts accepted connections and captures raw request text so tests can
/// assert on forwarded headers and bodies.
pub struct MockSink {
    addr: SocketAddr,
    hits: Arc<AtomicU32>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockSink {
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn hits(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }

    /// Raw request text captured so far, lowercased for header asserts.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Poll until at least `n` hits are recorded or the deadline passes.
    #[allow(dead_code)]
    pub async fn wait_for_hits(&self, n: u32, deadline: Duration) -> bool {
        let start = std::time::Instant::now();
        while start.elapsed() < deadline {
            if self.hits() >= n {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
        self.hits() >= n
    }
}

/// Start a mock sink that responds with `status` after `delay`.
pub async fn start_mock_sink(status: u16, delay: Duration) -> MockSink {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));

    let hit_counter = hits.clone();
    let captured = requests.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    hit_counter.fetch_add(1, Ordering::SeqCst);
                    let captured = captured.clone();
                    tokio::spawn(async move {
                        let request = read_request(&mut socket).await;
                        captured.lock().unwrap().push(request);

                        tokio::time::sleep(delay).await;

                        let status_text = match status {
                            200 => "200 OK",
                            204 => "204 No Content",
                            401 => "401 Unauthorized",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok",
                            status_text
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockSink { addr, hits, requests }
}

/// Read one HTTP request (headers plus Content-Length body) and return it
/// lowercased.
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 8192];

    loop {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                data.extend_from_slice(&buf[..n]);
                if let Some(end) = data.windows(4).position(|w| w == b"\r\n\r\n") {
                    let headers = String::from_utf8_lossy(&data[..end]).to_lowercase();
                    let body_len = headers
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if data.len() >= end + 4 + body_len {
                        break;
                    }
                }
            }
        }
    }

    String::from_utf8_lossy(&data).to_lowercase()
}

/// A non-pooling reqwest client that ignores proxy environment variables.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Minimal valid submission body.
pub fn valid_submission() -> serde_json::Value {
    serde_json::json!({
        "fullName": "Jane Doe",
        "email": "jane@example.com",
        "message": "Need a deck"
    })
}
