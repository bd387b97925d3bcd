#![allow(dead_code)]

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    routing::post,
};
use playground_proxy::application::services::ShareService;
use playground_proxy::infrastructure::playground::PlaygroundClient;
use playground_proxy::routes::app_router;
use playground_proxy::state::AppState;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const BASE_URL: &str = "https://play.golang.org/p/";
pub const MAX_CODE_BYTES: usize = 64 * 1024;

/// What the stub upstream answers with.
#[derive(Clone)]
pub enum Reply {
    Fixed(StatusCode, &'static str),
    /// 200 with `"  id-<body>  \n"`, so every request gets its own identifier.
    Echo,
}

/// A request received by the stub upstream.
#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct StubState {
    reply: Reply,
    hits: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Received>>>,
}

/// Share endpoint bound to an ephemeral local port.
#[derive(Clone)]
pub struct StubUpstream {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Received>>>,
}

impl StubUpstream {
    pub fn share_url(&self) -> String {
        format!("http://{}/share", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

async fn share(State(stub): State<StubState>, headers: HeaderMap, body: String) -> (StatusCode, String) {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    stub.received.lock().unwrap().push(Received {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    });

    match stub.reply {
        Reply::Fixed(status, body) => (status, body.to_string()),
        Reply::Echo => (StatusCode::OK, format!("  id-{body}  \n")),
    }
}

pub async fn spawn_upstream(reply: Reply) -> StubUpstream {
    let hits = Arc::new(AtomicUsize::new(0));
    let received = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/share", post(share))
        .with_state(StubState {
            reply,
            hits: hits.clone(),
            received: received.clone(),
        });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubUpstream {
        addr,
        hits,
        received,
    }
}

/// How a raw upstream ends each connection after writing its response.
#[derive(Clone, Copy)]
pub enum AfterWrite {
    Close,
    /// Keep the socket open without sending anything more.
    Hang,
}

/// Share endpoint that answers every request with fixed raw bytes.
///
/// Used for responses a well-behaved server never produces, such as a body
/// shorter than its `Content-Length`.
pub async fn spawn_raw_upstream(response: &'static [u8], after: AfterWrite) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                read_request(&mut stream).await;
                let _ = stream.write_all(response).await;
                match after {
                    AfterWrite::Close => {
                        let _ = stream.shutdown().await;
                    }
                    AfterWrite::Hang => {
                        std::future::pending::<()>().await;
                    }
                }
            });
        }
    });

    format!("http://{addr}/share")
}

/// Reads one request: headers plus `Content-Length` bytes of body.
async fn read_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                return;
            }
        }
    }
}

/// URL of a local port nothing is listening on.
pub async fn unreachable_share_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/share")
}

pub fn create_test_state(share_url: String, max_code_bytes: usize) -> AppState {
    let upstream = Arc::new(PlaygroundClient::new(reqwest::Client::new(), share_url));
    let share_service = ShareService::new(upstream, BASE_URL, max_code_bytes);
    AppState::new(Arc::new(share_service))
}

pub fn create_test_app(share_url: String) -> Router {
    app_router(create_test_state(share_url, MAX_CODE_BYTES))
}

pub fn create_test_app_with_limit(share_url: String, max_code_bytes: usize) -> Router {
    app_router(create_test_state(share_url, max_code_bytes))
}
