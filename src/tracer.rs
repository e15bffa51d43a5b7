//! Protocol tracing hook
//!
//! A tracer sees every line the session sends or receives, status lines and data
//! block lines alike, after CRLF removal. It observes only. AUTHINFO PASS
//! arguments are masked before they reach it.

use std::fmt;

/// Direction of a traced line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Client to server
    Sent,
    /// Server to client
    Received,
}

impl Direction {
    /// Short marker used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Sent => ">>>",
            Direction::Received => "<<<",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink for raw protocol lines
///
/// Implemented for any `Fn(Direction, &str) + Send + Sync` closure.
///
/// # Example
///
/// ```
/// use nntp_reader::{Direction, ProtocolTracer};
///
/// let tracer = |direction: Direction, line: &str| eprintln!("{} {}", direction, line);
/// tracer.line(Direction::Sent, "LIST");
/// ```
pub trait ProtocolTracer: Send + Sync {
    /// Observe one line
    fn line(&self, direction: Direction, text: &str);
}

impl<F> ProtocolTracer for F
where
    F: Fn(Direction, &str) + Send + Sync,
{
    fn line(&self, direction: Direction, text: &str) {
        self(direction, text)
    }
}
