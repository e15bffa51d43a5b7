//! Low-level I/O operations for NNTP protocol communication
//!
//! This module provides the core I/O primitives used by all NNTP client operations:
//! - Command transmission with logging and tracer notification
//! - Status line decoding
//! - Dot-terminated data block reading
//! - Read timeouts and broken-connection detection

use super::NntpClient;
use super::state::ConnectionState;
use crate::block::{BlockLine, classify_line};
use crate::commands::{self, Command};
use crate::error::{NntpError, Result};
use crate::response::NntpResponse;
use crate::tracer::Direction;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt};
use tokio::time::timeout;
use tracing::{debug, trace};

/// Most data block lines fit comfortably in this
const LINE_INITIAL_CAPACITY: usize = 512;

/// Build the error for a status code outside the expected class
pub(super) fn unexpected_status(command: &Command, response: NntpResponse) -> NntpError {
    NntpError::UnexpectedStatus {
        command: command.verb().to_string(),
        code: response.code,
        message: response.message,
    }
}

/// Strip exactly one line delimiter ("\r\n" or "\n")
fn strip_delimiter(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

impl NntpClient {
    fn trace_line(&self, direction: Direction, text: &str) {
        if let Some(tracer) = &self.tracer {
            tracer.line(direction, text);
        }
    }

    /// Send a command to the server
    ///
    /// The length ceiling is enforced before anything is written, so an oversized
    /// command leaves the stream untouched. A broken session refuses to send.
    pub(super) async fn send_command(&mut self, command: &Command) -> Result<()> {
        if self.state == ConnectionState::Closed {
            return Err(NntpError::NotConnected);
        }
        if self.is_broken {
            return Err(NntpError::Broken);
        }
        let wire = command.to_wire()?;

        let shown = command.loggable();
        trace!("Sending command: {}", shown);
        self.trace_line(Direction::Sent, &shown);

        let write_timeout = self.config.read_timeout;
        let stream = self.stream.get_mut();
        let write = async {
            stream.write_all(wire.as_bytes()).await?;
            stream.flush().await
        };
        let result = match timeout(write_timeout, write).await {
            Ok(written) => written.map_err(NntpError::from),
            Err(_) => Err(NntpError::Timeout),
        };
        self.check_transport(result)
    }

    /// Mark the session broken on a transport failure
    ///
    /// After a timeout or I/O error mid-exchange the stream position is unknown,
    /// so any unread reply lines would be taken as the answer to the next command.
    fn check_transport<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(NntpError::Timeout | NntpError::Io(_)) = &result {
            self.mark_broken();
        }
        result
    }

    /// Read one line without its delimiter; `None` at end of stream
    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::with_capacity(LINE_INITIAL_CAPACITY);
        let result = match timeout(
            self.config.read_timeout,
            self.stream.read_until(b'\n', &mut bytes),
        )
        .await
        {
            Ok(read) => read.map_err(NntpError::from),
            Err(_) => Err(NntpError::Timeout),
        };
        let read = self.check_transport(result)?;

        if read == 0 {
            return Ok(None);
        }

        // Lossy: article bodies are not guaranteed to be UTF-8
        let line = String::from_utf8_lossy(&bytes);
        let line = strip_delimiter(&line).to_string();
        trace!("Received: {}", line);
        self.trace_line(Direction::Received, &line);
        Ok(Some(line))
    }

    /// Read and decode one status line; `None` if the stream has ended
    pub(super) async fn read_status(&mut self) -> Result<Option<NntpResponse>> {
        let Some(line) = self.read_line().await? else {
            return Ok(None);
        };
        let result = commands::parse_single_response(&line);
        // Mark connection as broken if we got invalid/garbage data
        if let Err(NntpError::MalformedResponse(_)) = &result {
            self.mark_broken();
        }
        result.map(Some)
    }

    /// Read a dot-terminated data block, unstuffing escaped lines
    ///
    /// End of stream before the terminator ends the block without error.
    pub(super) async fn read_data_block(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::with_capacity(64);
        loop {
            let Some(line) = self.read_line().await? else {
                debug!("Stream ended inside data block after {} lines", lines.len());
                break;
            };
            match classify_line(&line) {
                BlockLine::End => break,
                BlockLine::Data(data) => lines.push(data.to_string()),
            }
        }
        Ok(lines)
    }

    /// Send a command and read its status line
    ///
    /// Returns the response whatever its class; an absent status line is
    /// [`NntpError::NoResponse`].
    pub(super) async fn execute(&mut self, command: &Command) -> Result<NntpResponse> {
        self.send_command(command).await?;
        match self.read_status().await? {
            Some(response) => Ok(response),
            None => {
                self.mark_broken();
                Err(NntpError::NoResponse {
                    command: command.verb().to_string(),
                })
            }
        }
    }

    /// Send a command and require a positive completion (2xx) status
    pub(super) async fn execute_ok(&mut self, command: &Command) -> Result<NntpResponse> {
        let response = self.execute(command).await?;
        if !response.is_success() {
            return Err(unexpected_status(command, response));
        }
        Ok(response)
    }

    /// Send a command, require 2xx and read the data block that follows
    pub(super) async fn execute_multiline(&mut self, command: &Command) -> Result<NntpResponse> {
        let mut response = self.execute_ok(command).await?;
        response.lines = self.read_data_block().await?;
        trace!(
            "{} returned {} data lines",
            command.verb(),
            response.lines.len()
        );
        Ok(response)
    }
}
