//! Connection management for NNTP client
//!
//! This module handles TCP connection establishment, socket tuning,
//! server greeting validation and the optional AUTHINFO step.

use crate::config::ServerConfig;
use crate::error::{NntpError, Result};
use crate::response::codes;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::state::ConnectionState;
use super::{NntpClient, NntpIo};

/// BufReader capacity for article and listing reads (64KB)
const BUFREADER_CAPACITY: usize = 64 * 1024;

impl NntpClient {
    /// Connect to an NNTP server over plain TCP
    ///
    /// Reads the greeting and, when the config carries both a username and a
    /// password, authenticates before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::Io`] - TCP connection fails (DNS resolution, network unreachable, etc.)
    /// - [`NntpError::Timeout`] - Connection or greeting times out
    /// - [`NntpError::ConnectFailed`] - No greeting, or the server refused service
    /// - [`NntpError::AuthFailed`] - Configured credentials were not accepted
    pub async fn connect(config: Arc<ServerConfig>) -> Result<Self> {
        debug!("Connecting to NNTP server {}:{}", config.host, config.port);

        let socket_addr = resolve(&config).await?;
        let tcp_stream = open_tcp(socket_addr, &config).await?;

        Self::connect_stream(tcp_stream, config).await
    }

    /// Start a session over an already-open stream
    ///
    /// Used for transports this crate does not open itself (TLS, proxies) and for
    /// scripted servers in tests. Behaves like [`connect`](Self::connect) from the
    /// greeting onwards.
    pub async fn connect_stream<S>(stream: S, config: Arc<ServerConfig>) -> Result<Self>
    where
        S: NntpIo + 'static,
    {
        let stream: Box<dyn NntpIo> = Box::new(stream);
        let mut client = Self {
            stream: BufReader::with_capacity(BUFREADER_CAPACITY, stream),
            state: ConnectionState::Ready,
            config,
            current_group: None,
            posting_allowed: false,
            tracer: None,
            is_broken: false,
        };

        client.read_greeting().await?;

        if client.config.has_credentials() {
            client.authenticate().await?;
        }

        Ok(client)
    }

    async fn read_greeting(&mut self) -> Result<()> {
        let greeting = match self.read_status().await {
            Ok(Some(greeting)) => greeting,
            Ok(None) => {
                return Err(NntpError::ConnectFailed(
                    "connection closed before greeting".to_string(),
                ));
            }
            Err(NntpError::MalformedResponse(line)) => {
                return Err(NntpError::ConnectFailed(format!("invalid greeting: {line}")));
            }
            Err(e) => return Err(e),
        };
        debug!("Server greeting: {} {}", greeting.code, greeting.message);

        if !greeting.is_success() {
            return Err(NntpError::ConnectFailed(format!(
                "{} {}",
                greeting.code, greeting.message
            )));
        }

        self.posting_allowed = greeting.code == codes::READY_POSTING_ALLOWED;
        Ok(())
    }
}

async fn resolve(config: &ServerConfig) -> Result<SocketAddr> {
    tokio::net::lookup_host(config.address())
        .await?
        .next()
        .ok_or_else(|| {
            NntpError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("No address resolved for {}", config.host),
            ))
        })
}

async fn open_tcp(socket_addr: SocketAddr, config: &ServerConfig) -> Result<TcpStream> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // Request/response protocol: small commands must go out immediately
    socket.set_nodelay(true)?;

    // Idle readers may sit on a group for a long time between commands
    if let Err(e) = socket.set_keepalive(true) {
        warn!("Failed to enable TCP keepalive: {}", e);
    }

    // socket2::Socket::connect_timeout() is blocking, so run it off the runtime
    // NOTE: Connect BEFORE setting non-blocking mode
    let connect_timeout = config.connect_timeout;
    let std_stream = timeout(
        connect_timeout,
        tokio::task::spawn_blocking(move || -> std::io::Result<std::net::TcpStream> {
            socket.connect_timeout(&socket_addr.into(), connect_timeout)?;
            socket.set_nonblocking(true)?;
            Ok(socket.into())
        }),
    )
    .await
    .map_err(|_| NntpError::Timeout)?
    .map_err(|e| NntpError::Io(std::io::Error::other(format!("Task join error: {}", e))))??;

    Ok(TcpStream::from_std(std_stream)?)
}
