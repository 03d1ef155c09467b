use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, RwLock};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::fixtures::{ReceivedRequest, ReplyFixture};
use crate::handlers::{contact_us, health_check};

pub const CONTACT_PATH: &str = "/api/contact-us/";

pub struct MockState {
    reply: RwLock<ReplyFixture>,
    received: Mutex<Vec<ReceivedRequest>>,
}

impl MockState {
    pub fn reply(&self) -> ReplyFixture {
        match self.reply.read() {
            Ok(reply) => reply.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set_reply(&self, reply: ReplyFixture) {
        match self.reply.write() {
            Ok(mut current) => *current = reply,
            Err(poisoned) => *poisoned.into_inner() = reply,
        }
    }

    pub fn record(&self, request: ReceivedRequest) {
        match self.received.lock() {
            Ok(mut received) => received.push(request),
            Err(poisoned) => poisoned.into_inner().push(request),
        }
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        match self.received.lock() {
            Ok(received) => received.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

pub struct MockServer {
    state: Arc<MockState>,
}

impl Default for MockServer {
    fn default() -> Self {
        Self::new(ReplyFixture::default())
    }
}

impl MockServer {
    pub fn new(reply: ReplyFixture) -> Self {
        Self {
            state: Arc::new(MockState {
                reply: RwLock::new(reply),
                received: Mutex::new(Vec::new()),
            }),
        }
    }

    fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route(CONTACT_PATH, post(contact_us))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Serves on `addr` until the process stops
    pub async fn serve(self, addr: &str) -> anyhow::Result<()> {
        let addr: SocketAddr = addr.parse()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Contact API mock listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .await
            .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;
        Ok(())
    }

    /// Serves on an ephemeral localhost port in a background task
    pub async fn spawn(self) -> anyhow::Result<RunningServer> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = self.router();

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Contact API mock stopped: {}", e);
            }
        });

        Ok(RunningServer {
            addr,
            state: self.state,
            handle,
        })
    }
}

/// Handle to a spawned mock; the server stops when this is dropped
pub struct RunningServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl RunningServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn contact_url(&self) -> String {
        format!("{}{}", self.base_url(), CONTACT_PATH)
    }

    pub fn set_reply(&self, reply: ReplyFixture) {
        self.state.set_reply(reply);
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.state.received()
    }
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
