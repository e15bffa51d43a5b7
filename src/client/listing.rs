//! Server-wide listings
//!
//! - LIST - All active newsgroups
//! - NEWGROUPS - Groups created since a date
//! - NEWNEWS - Message-ids of articles posted since a date
//! - LIST OVERVIEW.FMT - Field order of XOVER records

use crate::commands::{self, Newsgroup};
use crate::error::Result;
use chrono::NaiveDateTime;
use tracing::debug;

use super::NntpClient;

impl NntpClient {
    /// List all newsgroups the server carries
    ///
    /// Each line must be exactly `name last first flags`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`](crate::NntpError::UnexpectedStatus) - The server refused the listing
    /// - [`NntpError::MalformedListing`](crate::NntpError::MalformedListing) - A line has the wrong shape or non-numeric watermarks
    pub async fn list(&mut self) -> Result<Vec<Newsgroup>> {
        let response = self.execute_multiline(&commands::list()).await?;
        let groups = commands::parse_newsgroup_listing(&response.lines)?;

        debug!("LIST returned {} newsgroups", groups.len());
        Ok(groups)
    }

    /// Newsgroups created since `since` (server local time)
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nntp_reader::{NntpClient, ServerConfig};
    /// # use std::sync::Arc;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = ServerConfig::new("news.example.com");
    /// # let mut client = NntpClient::connect(Arc::new(config)).await?;
    /// let since = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
    ///     .and_then(|d| d.and_hms_opt(0, 0, 0))
    ///     .ok_or("bad date")?;
    /// for group in client.newgroups(&since).await? {
    ///     println!("{}", group.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// As [`list`](Self::list).
    pub async fn newgroups(&mut self, since: &NaiveDateTime) -> Result<Vec<Newsgroup>> {
        let response = self.execute_multiline(&commands::newgroups(since)).await?;
        let groups = commands::parse_newsgroup_listing(&response.lines)?;

        debug!("NEWGROUPS returned {} newsgroups", groups.len());
        Ok(groups)
    }

    /// Message-ids of articles posted to `newsgroups` since `since`
    ///
    /// `newsgroups` is passed through as one argument, so wildmats such as
    /// `comp.lang.*` and comma-separated lists work as the server allows.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`](crate::NntpError::UnexpectedStatus) - The server refused (e.g. 502)
    /// - [`NntpError::CommandTooLong`](crate::NntpError::CommandTooLong) - The group list is too long for one command
    pub async fn newnews(
        &mut self,
        newsgroups: &str,
        since: &NaiveDateTime,
    ) -> Result<Vec<String>> {
        let response = self
            .execute_multiline(&commands::newnews(newsgroups, since))
            .await?;
        let ids = commands::parse_message_ids(&response.lines);

        debug!("NEWNEWS returned {} message-ids", ids.len());
        Ok(ids)
    }

    /// Field names of XOVER records, in order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`](crate::NntpError::UnexpectedStatus) - The server does not support LIST OVERVIEW.FMT
    pub async fn overview_format(&mut self) -> Result<Vec<String>> {
        let response = self.execute_multiline(&commands::list_overview_fmt()).await?;
        Ok(commands::parse_overview_format(&response.lines))
    }
}
