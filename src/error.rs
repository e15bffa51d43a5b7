//! NNTP error types

use std::fmt;

use thiserror::Error;

/// Why an AUTHINFO exchange did not end in 281
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// Server rejected the credentials (481/482)
    Rejected,
    /// Server still wanted more input after AUTHINFO PASS (381)
    Incomplete,
    /// Credentials valid but no permission to use the service (502)
    NoPermission,
    /// Any other code during the exchange
    Unexpected,
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AuthFailure::Rejected => "rejected",
            AuthFailure::Incomplete => "incomplete",
            AuthFailure::NoPermission => "no permission",
            AuthFailure::Unexpected => "unexpected response",
        };
        f.write_str(s)
    }
}

/// NNTP protocol and connection errors
#[derive(Error, Debug)]
pub enum NntpError {
    /// Transport failure while connecting, writing or reading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection or read timeout
    #[error("Connection timeout")]
    Timeout,

    /// Server sent no usable greeting
    #[error("Connection failed: {0}")]
    ConnectFailed(String),

    /// AUTHINFO USER/PASS exchange failed
    #[error("Authentication failed ({reason}): {code} {message}")]
    AuthFailed {
        /// Classified cause
        reason: AuthFailure,
        /// Final response code
        code: u16,
        /// Final response text
        message: String,
    },

    /// Authentication requested but username or password is not configured
    #[error("Missing credentials: {0}")]
    MissingCredentials(&'static str),

    /// A command argument contains CR, LF or NUL; nothing was sent
    #[error("Invalid argument for {command}: control characters are not allowed")]
    InvalidArgument {
        /// Command verb the argument belonged to
        command: String,
    },

    /// Command line exceeds the 510 character limit; nothing was sent
    #[error("Command too long: {length} characters (max {max})")]
    CommandTooLong {
        /// Length of the rejected command line, without CRLF
        length: usize,
        /// Maximum permitted length
        max: usize,
    },

    /// Server answered a command with a code outside the expected class
    #[error("{command} failed: {code} {message}")]
    UnexpectedStatus {
        /// Command verb (e.g. "ARTICLE", "LIST OVERVIEW.FMT")
        command: String,
        /// NNTP response code
        code: u16,
        /// Response text from server
        message: String,
    },

    /// Status line could not be decoded
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Stream ended where a status line was expected
    #[error("No response to {command}")]
    NoResponse {
        /// Command verb that went unanswered
        command: String,
    },

    /// A data block line did not match the expected listing format
    #[error("Malformed listing line: {0}")]
    MalformedListing(String),

    /// QUIT did not complete positively
    #[error("Disconnect failed: {0}")]
    DisconnectFailed(String),

    /// Session already closed
    #[error("Not connected")]
    NotConnected,

    /// An earlier transport failure left the stream in an unknown position
    #[error("Connection is broken")]
    Broken,
}

impl NntpError {
    /// Response code carried by this error, if the server sent one
    pub fn code(&self) -> Option<u16> {
        match self {
            NntpError::AuthFailed { code, .. } | NntpError::UnexpectedStatus { code, .. } => {
                Some(*code)
            }
            _ => None,
        }
    }

    /// Whether the server reported a transient (4xx) condition
    ///
    /// A transient failure leaves the session usable; the caller decides whether to retry.
    pub fn is_transient(&self) -> bool {
        matches!(self.code(), Some(code) if (400..500).contains(&code))
    }
}

/// Result type alias using NntpError
pub type Result<T> = std::result::Result<T, NntpError>;
