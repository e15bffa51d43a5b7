//! Article retrieval and navigation commands (RFC 977 §3.1, §3.5, §3.6)
//!
//! This module implements NNTP commands for fetching articles and navigating
//! within a newsgroup:
//! - ARTICLE - Fetch full article (headers + body)
//! - HEAD - Fetch headers only
//! - BODY - Fetch body only
//! - STAT - Select an article without retrieving content
//! - NEXT - Navigate to next article
//! - LAST - Navigate to previous article

use crate::article::{Article, Headers, parse_article, parse_body, parse_headers};
use crate::commands::{self, ArticleId, ArticleInfo, Command};
use crate::error::{NntpError, Result};
use tracing::{debug, trace};

use super::NntpClient;

impl NntpClient {
    /// Fetch a full article (headers and body)
    ///
    /// `None` fetches the current article of the selected group. Header
    /// continuation lines are folded into the preceding header; everything from
    /// the first non-header line onwards is body.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`] - The article does not exist (423, 430) or
    ///   no group/article is selected (412, 420)
    /// - [`NntpError::CommandTooLong`] - The message-id makes the command exceed 510 characters
    /// - [`NntpError::Timeout`] - Server did not respond in time
    pub async fn article(&mut self, id: Option<&ArticleId>) -> Result<Article> {
        trace!("Fetching article: {:?}", id);

        let response = self.execute_multiline(&commands::article(id)).await?;
        let (number, message_id) = commands::parse_article_status(&response.message);
        let (headers, body) = parse_article(&response.lines);

        Ok(Article {
            number: number.or(match id {
                Some(ArticleId::ByNumber(n)) => Some(*n),
                _ => None,
            }),
            message_id: message_id.or(match id {
                Some(ArticleId::ByMessageId(m)) => Some(m.clone()),
                _ => None,
            }),
            headers,
            body,
        })
    }

    /// Fetch article headers only
    ///
    /// Every line of the block is split at the first `": "`; later duplicates
    /// overwrite earlier values.
    ///
    /// # Errors
    ///
    /// Same as [`article`](Self::article).
    pub async fn head(&mut self, id: Option<&ArticleId>) -> Result<Headers> {
        trace!("Fetching head: {:?}", id);

        let response = self.execute_multiline(&commands::head(id)).await?;
        Ok(parse_headers(&response.lines))
    }

    /// Fetch article body only, one `\n` after every line
    ///
    /// # Errors
    ///
    /// Same as [`article`](Self::article).
    pub async fn body(&mut self, id: Option<&ArticleId>) -> Result<String> {
        trace!("Fetching body: {:?}", id);

        let response = self.execute_multiline(&commands::body(id)).await?;
        Ok(parse_body(&response.lines))
    }

    /// Select an article without fetching it
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`] - The article does not exist
    /// - [`NntpError::MalformedResponse`] - The 223 line lacks a number or message-id
    pub async fn stat(&mut self, id: Option<&ArticleId>) -> Result<ArticleInfo> {
        trace!("Checking article status: {:?}", id);
        self.pointer_command(&commands::stat(id)).await
    }

    /// Advance the current article pointer (NEXT)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`] - 421 (no next article), 412 or 420
    /// - [`NntpError::MalformedResponse`] - The 223 line lacks a number or message-id
    pub async fn next(&mut self) -> Result<ArticleInfo> {
        self.pointer_command(&commands::next()).await
    }

    /// Move the current article pointer back (LAST)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`] - 422 (no previous article), 412 or 420
    /// - [`NntpError::MalformedResponse`] - The 223 line lacks a number or message-id
    pub async fn last(&mut self) -> Result<ArticleInfo> {
        self.pointer_command(&commands::last()).await
    }

    /// NEXT, then ARTICLE for the identifier it reported
    ///
    /// # Errors
    ///
    /// Any error from [`next`](Self::next) or [`article`](Self::article).
    pub async fn next_article(&mut self) -> Result<Article> {
        self.move_and_fetch(&commands::next()).await
    }

    /// LAST, then ARTICLE for the identifier it reported
    ///
    /// # Errors
    ///
    /// Any error from [`last`](Self::last) or [`article`](Self::article).
    pub async fn last_article(&mut self) -> Result<Article> {
        self.move_and_fetch(&commands::last()).await
    }

    async fn pointer_command(&mut self, command: &Command) -> Result<ArticleInfo> {
        let response = self.execute_ok(command).await?;
        commands::parse_article_info(&response)
    }

    async fn move_and_fetch(&mut self, command: &Command) -> Result<Article> {
        let response = self.execute_ok(command).await?;
        let token = response
            .first_token()
            .ok_or_else(|| NntpError::MalformedResponse(response.message.clone()))?;
        let id = ArticleId::parse(token)?;
        debug!("{} moved to article {}", command.verb(), id);

        self.article(Some(&id)).await
    }
}
