//! NNTP command builders and response parsers

// Module declarations
pub mod article;
pub mod group;
pub mod list;
pub mod over;
pub mod response;

// Re-export all public items for backward compatibility
pub use article::*;
pub use group::*;
pub use list::*;
pub use over::*;
pub use response::*;

use std::borrow::Cow;
use std::fmt;

use crate::error::{NntpError, Result};

/// Maximum command line length, excluding the terminating CRLF (RFC 977 Section 2.3)
pub const MAX_COMMAND_LENGTH: usize = 510;

/// A single command line: the verb followed by space-separated arguments
///
/// Absent optional arguments are simply not appended. The line is only checked
/// against [`MAX_COMMAND_LENGTH`] and for embedded line breaks when it is framed
/// for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    verb: &'static str,
    line: String,
    /// Byte offset past which the line is masked in logs
    masked_from: Option<usize>,
    /// Some argument carried CR, LF or NUL
    has_control_chars: bool,
}

impl Command {
    /// Start a command with the given verb (e.g. "ARTICLE", "LIST OVERVIEW.FMT")
    pub fn new(verb: &'static str) -> Self {
        Self {
            verb,
            line: verb.to_string(),
            masked_from: None,
            has_control_chars: false,
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl fmt::Display) -> Self {
        let arg = arg.to_string();
        if arg.contains(['\r', '\n', '\0']) {
            self.has_control_chars = true;
        }
        self.line.push(' ');
        self.line.push_str(&arg);
        self
    }

    /// Append an argument if present
    pub fn arg_opt<T: fmt::Display>(self, arg: Option<T>) -> Self {
        match arg {
            Some(arg) => self.arg(arg),
            None => self,
        }
    }

    /// Append an argument that must never appear in logs
    fn secret_arg(mut self, arg: &str) -> Self {
        self.masked_from = Some(self.line.len() + 1);
        self.arg(arg)
    }

    /// Command verb, used to label errors
    pub fn verb(&self) -> &'static str {
        self.verb
    }

    /// Command line without CRLF
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Command line safe to log or hand to a tracer
    pub fn loggable(&self) -> Cow<'_, str> {
        match self.masked_from {
            Some(pos) => Cow::Owned(format!("{}****", &self.line[..pos])),
            None => Cow::Borrowed(&self.line),
        }
    }

    /// Frame the command for transmission, enforcing the line length limit
    ///
    /// # Errors
    ///
    /// Returns [`NntpError::InvalidArgument`] if an argument contains CR, LF or NUL,
    /// and [`NntpError::CommandTooLong`] if the line exceeds [`MAX_COMMAND_LENGTH`].
    pub fn to_wire(&self) -> Result<String> {
        // The error names only the verb so a password never ends up in it
        if self.has_control_chars {
            return Err(NntpError::InvalidArgument {
                command: self.verb.to_string(),
            });
        }
        if self.line.len() > MAX_COMMAND_LENGTH {
            return Err(NntpError::CommandTooLong {
                length: self.line.len(),
                max: MAX_COMMAND_LENGTH,
            });
        }
        Ok(format!("{}\r\n", self.line))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.loggable())
    }
}

// Authentication and connection management commands

/// Build AUTHINFO USER command
pub fn authinfo_user(username: &str) -> Command {
    Command::new("AUTHINFO USER").arg(username)
}

/// Build AUTHINFO PASS command
///
/// The password is masked when the command is displayed.
pub fn authinfo_pass(password: &str) -> Command {
    Command::new("AUTHINFO PASS").secret_arg(password)
}

/// Build QUIT command
pub fn quit() -> Command {
    Command::new("QUIT")
}

/// Build HELP command
///
/// Response is multi-line, starting with 100.
pub fn help() -> Command {
    Command::new("HELP")
}

/// Build DATE command
///
/// Response: 111 yyyymmddhhmmss
pub fn date() -> Command {
    Command::new("DATE")
}

/// Build MODE READER command
///
/// Instructs the server to switch to reader mode (for news reading clients).
pub fn mode_reader() -> Command {
    Command::new("MODE READER")
}
