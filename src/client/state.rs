//! Connection state types for NNTP client

/// Session state
///
/// A session starts `Ready` once the greeting is read, passes through
/// `InProgress` while AUTHINFO is exchanged, and ends `Closed` after QUIT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ConnectionState {
    /// Connected and ready for commands (not authenticated)
    Ready,
    /// AUTHINFO USER sent, exchange not finished
    InProgress,
    /// Successfully authenticated
    Authenticated,
    /// QUIT acknowledged; no further commands are sent
    Closed,
}
