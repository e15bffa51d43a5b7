//! Article retrieval and navigation commands

use std::fmt;

use crate::error::{NntpError, Result};
use crate::response::NntpResponse;

use super::Command;

/// Identifies an article either by its number in the selected group or by message-id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArticleId {
    /// Article number within the currently selected newsgroup
    ByNumber(u64),
    /// Globally unique message-id, including the angle brackets
    ByMessageId(String),
}

impl ArticleId {
    /// Interpret a protocol token: all digits is a number, anything else a message-id
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(NntpError::MalformedResponse(
                "empty article identifier".to_string(),
            ));
        }
        if token.bytes().all(|b| b.is_ascii_digit()) {
            let number = token
                .parse()
                .map_err(|_| NntpError::MalformedResponse(token.to_string()))?;
            Ok(ArticleId::ByNumber(number))
        } else {
            Ok(ArticleId::ByMessageId(token.to_string()))
        }
    }

    /// Build a message-id identifier
    pub fn message_id(id: impl Into<String>) -> Self {
        ArticleId::ByMessageId(id.into())
    }
}

impl From<u64> for ArticleId {
    fn from(number: u64) -> Self {
        ArticleId::ByNumber(number)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::ByNumber(n) => write!(f, "{}", n),
            ArticleId::ByMessageId(id) => f.write_str(id),
        }
    }
}

/// Build ARTICLE command; `None` requests the current article
pub fn article(id: Option<&ArticleId>) -> Command {
    Command::new("ARTICLE").arg_opt(id)
}

/// Build HEAD command; `None` requests the current article
pub fn head(id: Option<&ArticleId>) -> Command {
    Command::new("HEAD").arg_opt(id)
}

/// Build BODY command; `None` requests the current article
pub fn body(id: Option<&ArticleId>) -> Command {
    Command::new("BODY").arg_opt(id)
}

/// Build STAT command
///
/// Selects an article without retrieving its text.
pub fn stat(id: Option<&ArticleId>) -> Command {
    Command::new("STAT").arg_opt(id)
}

/// Build NEXT command
///
/// Moves to the next article in the current group.
pub fn next() -> Command {
    Command::new("NEXT")
}

/// Build LAST command
///
/// Moves to the previous article in the current group.
pub fn last() -> Command {
    Command::new("LAST")
}

/// Article pointer returned by STAT, NEXT, and LAST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleInfo {
    /// Article number (0 if a message-id was used in a STAT request)
    pub number: u64,
    /// Message identifier (e.g., "<abc@example.com>")
    pub message_id: String,
}

/// Parse a 223 response: "223 n message-id [text]"
pub fn parse_article_info(response: &NntpResponse) -> Result<ArticleInfo> {
    let mut parts = response.message.split_whitespace();
    let (Some(number), Some(message_id)) = (parts.next(), parts.next()) else {
        return Err(NntpError::MalformedResponse(response.message.clone()));
    };

    let number = number
        .parse()
        .map_err(|_| NntpError::MalformedResponse(response.message.clone()))?;

    Ok(ArticleInfo {
        number,
        message_id: message_id.to_string(),
    })
}

/// Extract article number and message-id from a 220/221/222 status text
///
/// Format: "n message-id [text]". Either part may be missing or unusable; a number
/// of 0 (message-id request) is reported as absent.
pub fn parse_article_status(message: &str) -> (Option<u64>, Option<String>) {
    let mut parts = message.split_whitespace();
    let number = parts
        .next()
        .and_then(|n| n.parse::<u64>().ok())
        .filter(|&n| n != 0);
    let message_id = parts
        .next()
        .filter(|id| id.starts_with('<'))
        .map(str::to_string);
    (number, message_id)
}
