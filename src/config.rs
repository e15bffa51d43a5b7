//! NNTP server configuration

use std::time::Duration;

/// Standard NNTP port
pub const DEFAULT_PORT: u16 = 119;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

/// NNTP server configuration
///
/// Contains all the information needed to connect to an NNTP server. When both
/// a username and a password are set, [`NntpClient::connect`](crate::NntpClient::connect)
/// authenticates right after the greeting.
///
/// # Example
///
/// ```
/// use nntp_reader::ServerConfig;
///
/// let config = ServerConfig::new("news.example.com");
/// assert_eq!(config.port, 119);
///
/// let config = ServerConfig::new("news.example.com")
///     .with_port(1119)
///     .with_credentials("user", "pass");
/// assert!(config.has_credentials());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerConfig {
    /// Server hostname (e.g., "news.example.com")
    pub host: String,

    /// Server port (119 unless configured otherwise)
    #[cfg_attr(feature = "serde", serde(default = "default_port"))]
    pub port: u16,

    /// Username for AUTHINFO
    #[cfg_attr(feature = "serde", serde(default))]
    pub username: Option<String>,

    /// Password for AUTHINFO
    #[cfg_attr(feature = "serde", serde(default))]
    pub password: Option<String>,

    /// Limit for establishing the TCP connection
    #[cfg_attr(feature = "serde", serde(default = "default_connect_timeout"))]
    pub connect_timeout: Duration,

    /// Limit for each status line or data block line
    #[cfg_attr(feature = "serde", serde(default = "default_read_timeout"))]
    pub read_timeout: Duration,
}

#[cfg(feature = "serde")]
fn default_port() -> u16 {
    DEFAULT_PORT
}

#[cfg(feature = "serde")]
fn default_connect_timeout() -> Duration {
    DEFAULT_CONNECT_TIMEOUT
}

#[cfg(feature = "serde")]
fn default_read_timeout() -> Duration {
    DEFAULT_READ_TIMEOUT
}

impl ServerConfig {
    /// Create a configuration for `host` on the standard port, without credentials
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            username: None,
            password: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// Use a non-standard port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Authenticate with AUTHINFO USER/PASS after connecting
    ///
    /// **Warning:** credentials travel in clear text.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Override the connect and read timeouts
    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }

    /// Whether authentication should run on connect
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// `host:port` string for address resolution
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
