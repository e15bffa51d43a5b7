//! Server information and session teardown
//!
//! - HELP - Server help text
//! - DATE - Server clock
//! - MODE READER - Switch to reader mode
//! - QUIT - Close the session

use super::NntpClient;
use super::io::unexpected_status;
use super::state::ConnectionState;
use crate::commands;
use crate::date::parse_server_date;
use crate::error::{NntpError, Result};
use crate::response::codes;
use chrono::NaiveDateTime;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

impl NntpClient {
    /// Get server help text (HELP)
    ///
    /// The 100 reply is informational rather than 2xx; its text block is
    /// returned line by line.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`] - Any code other than 100
    /// - [`NntpError::Timeout`] - Server did not respond in time
    pub async fn help(&mut self) -> Result<Vec<String>> {
        let command = commands::help();
        let response = self.execute(&command).await?;
        if response.code != codes::HELP_TEXT_FOLLOWS {
            return Err(unexpected_status(&command, response));
        }
        self.read_data_block().await
    }

    /// Get the server's current UTC time (DATE)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`] - DATE not supported (500)
    /// - [`NntpError::MalformedResponse`] - The 111 line is not `yyyymmddhhmmss`
    pub async fn date(&mut self) -> Result<NaiveDateTime> {
        let command = commands::date();
        let response = self.execute(&command).await?;
        if response.code != codes::SERVER_DATE {
            return Err(unexpected_status(&command, response));
        }
        parse_server_date(&response.message)
    }

    /// Switch the server to reader mode (MODE READER)
    ///
    /// Returns whether posting is allowed (200) or not (201).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`] - The server refused (e.g. 502)
    pub async fn mode_reader(&mut self) -> Result<bool> {
        let response = self.execute_ok(&commands::mode_reader()).await?;
        self.posting_allowed = response.code == codes::READY_POSTING_ALLOWED;
        debug!("MODE READER: posting allowed = {}", self.posting_allowed);
        Ok(self.posting_allowed)
    }

    /// Close the session (QUIT)
    ///
    /// Calling this on an already closed session succeeds without sending anything.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::DisconnectFailed`] - QUIT was not answered with 2xx, or the session is broken
    /// - [`NntpError::Io`] - QUIT could not be written
    pub async fn close(&mut self) -> Result<()> {
        if self.state == ConnectionState::Closed {
            return Ok(());
        }
        debug!("Sending QUIT");

        let response = match self.execute(&commands::quit()).await {
            Ok(response) => response,
            Err(NntpError::NoResponse { .. }) => {
                return Err(NntpError::DisconnectFailed(
                    "no response to QUIT".to_string(),
                ));
            }
            Err(NntpError::Broken) => {
                return Err(NntpError::DisconnectFailed(
                    "connection is broken".to_string(),
                ));
            }
            Err(NntpError::MalformedResponse(line)) => {
                return Err(NntpError::DisconnectFailed(format!(
                    "malformed response to QUIT: {line}"
                )));
            }
            Err(e) => return Err(e),
        };

        if !response.is_success() {
            return Err(NntpError::DisconnectFailed(format!(
                "{} {}",
                response.code, response.message
            )));
        }

        self.state = ConnectionState::Closed;
        self.current_group = None;

        // The server closes its side after 205; a failed shutdown changes nothing
        if let Err(e) = self.stream.get_mut().shutdown().await {
            warn!("Error shutting down connection: {}", e);
        }
        debug!("Connection closed");
        Ok(())
    }
}
