//! NNTP client session
//!
//! One [`NntpClient`] owns one connection and runs one command at a time: every
//! operation takes `&mut self` and returns only after the status line and any
//! data block have been read in full.

mod articles;
mod auth;
mod connection;
mod group_ops;
mod io;
mod listing;
mod server;
mod state;

use crate::config::ServerConfig;
use crate::tracer::ProtocolTracer;
use state::ConnectionState;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite, BufReader};
use tracing::debug;

/// Byte stream an [`NntpClient`] can run over
///
/// Blanket-implemented for every `AsyncRead + AsyncWrite + Send + Unpin` type, so a
/// `TcpStream`, a TLS stream from another crate or an in-memory duplex all qualify.
pub trait NntpIo: AsyncRead + AsyncWrite + Send + Unpin {}

impl<T> NntpIo for T where T: AsyncRead + AsyncWrite + Send + Unpin {}

/// Async NNTP reader client
///
/// # Example
///
/// ```no_run
/// use nntp_reader::{ArticleId, NntpClient, ServerConfig};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ServerConfig::new("news.example.com");
/// let mut client = NntpClient::connect(Arc::new(config)).await?;
///
/// let info = client.select_group("comp.lang.rust").await?;
/// println!("Group has {} articles", info.count);
///
/// let article = client.article(Some(&ArticleId::ByNumber(info.first))).await?;
/// println!("{}", article);
///
/// client.close().await?;
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct NntpClient {
    /// Buffered transport (both reader and writer)
    stream: BufReader<Box<dyn NntpIo>>,
    /// Connection state
    state: ConnectionState,
    /// Server configuration
    config: Arc<ServerConfig>,
    /// Currently selected newsgroup
    current_group: Option<String>,
    /// Greeting was 200 rather than 201
    posting_allowed: bool,
    /// Optional observer of every protocol line
    tracer: Option<Arc<dyn ProtocolTracer>>,
    /// Garbage status line, missing reply, timeout or I/O failure; no further commands
    is_broken: bool,
}

impl NntpClient {
    /// Check if this connection is broken and should be discarded
    pub fn is_broken(&self) -> bool {
        self.is_broken
    }

    /// Mark this connection as broken
    fn mark_broken(&mut self) {
        self.is_broken = true;
    }

    /// Get the currently selected newsgroup, if any
    pub fn current_group(&self) -> Option<&str> {
        self.current_group.as_deref()
    }

    /// Check if the client is currently authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, ConnectionState::Authenticated)
    }

    /// Check if the session has not been closed
    pub fn is_connected(&self) -> bool {
        !matches!(self.state, ConnectionState::Closed)
    }

    /// Whether the server greeted with 200 (posting allowed)
    pub fn posting_allowed(&self) -> bool {
        self.posting_allowed
    }

    /// Configuration this session was built from
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Install a tracer that observes every line sent and received
    pub fn set_tracer(&mut self, tracer: impl ProtocolTracer + 'static) {
        self.tracer = Some(Arc::new(tracer));
    }

    /// Remove the tracer
    pub fn clear_tracer(&mut self) {
        self.tracer = None;
    }
}

impl Drop for NntpClient {
    fn drop(&mut self) {
        debug!("NntpClient dropped");
    }
}
