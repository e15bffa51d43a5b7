//! NNTP authentication support (AUTHINFO USER/PASS)

use super::NntpClient;
use super::state::ConnectionState;
use crate::commands;
use crate::error::{AuthFailure, NntpError, Result};
use crate::response::{NntpResponse, codes};
use tracing::debug;

/// Classify the final response of an AUTHINFO exchange
fn auth_failure(code: u16) -> AuthFailure {
    match code {
        codes::AUTH_CONTINUE => AuthFailure::Incomplete,
        codes::AUTH_REJECTED | codes::AUTH_OUT_OF_SEQUENCE => AuthFailure::Rejected,
        codes::ACCESS_DENIED => AuthFailure::NoPermission,
        _ => AuthFailure::Unexpected,
    }
}

impl NntpClient {
    /// Authenticate with username and password (AUTHINFO USER/PASS)
    ///
    /// Sends AUTHINFO USER and, if the server asks for more (381), AUTHINFO PASS
    /// using the credentials from the client configuration. [`connect`](Self::connect)
    /// already calls this when both credentials are configured.
    ///
    /// The last code received decides the failure reason. A 381 followed by 481
    /// after AUTHINFO PASS is [`AuthFailure::Rejected`], not
    /// [`AuthFailure::Incomplete`]; `Incomplete` means PASS itself was answered
    /// with 381.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nntp_reader::{NntpClient, ServerConfig};
    /// # use std::sync::Arc;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ServerConfig::new("news.example.com").with_credentials("user", "pass");
    /// let mut client = NntpClient::connect(Arc::new(config)).await?;
    /// assert!(client.is_authenticated());
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::MissingCredentials`] - No username, or the server asked for a
    ///   password that is not configured
    /// - [`NntpError::AuthFailed`] - The final code was not 281; `reason` tells
    ///   rejected credentials, an incomplete exchange, missing permission and
    ///   anything else apart
    /// - [`NntpError::NoResponse`] - Server closed the connection
    /// - [`NntpError::Timeout`] - Server did not respond in time
    pub async fn authenticate(&mut self) -> Result<()> {
        if self.state == ConnectionState::Authenticated {
            debug!("Already authenticated");
            return Ok(());
        }

        let config = self.config.clone();
        let username = config
            .username
            .as_deref()
            .ok_or(NntpError::MissingCredentials("username"))?;
        debug!("Authenticating as {}", username);

        // Mark authentication as in progress
        self.state = ConnectionState::InProgress;

        let result = self.authinfo_exchange(username, config.password.as_deref()).await;
        self.state = match result {
            Ok(()) => ConnectionState::Authenticated,
            // Reset to Ready state on failure
            Err(_) => ConnectionState::Ready,
        };
        result
    }

    async fn authinfo_exchange(&mut self, username: &str, password: Option<&str>) -> Result<()> {
        let mut response = self.execute(&commands::authinfo_user(username)).await?;

        // 381: server wants the password; 281 here means no password needed
        if response.code == codes::AUTH_CONTINUE {
            let password = password.ok_or(NntpError::MissingCredentials("password"))?;
            response = self.execute(&commands::authinfo_pass(password)).await?;
        }

        if response.code == codes::AUTH_ACCEPTED {
            debug!("Authentication successful");
            return Ok(());
        }

        let NntpResponse { code, message, .. } = response;
        debug!("Authentication failed: {} {}", code, message);
        Err(NntpError::AuthFailed {
            reason: auth_failure(code),
            code,
            message,
        })
    }
}
