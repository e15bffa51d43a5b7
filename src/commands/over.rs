//! XOVER command and overview data parsing

use crate::error::{NntpError, Result};

use super::Command;

/// Maximum number of tab-separated fields kept from one overview record
pub const OVERVIEW_FIELDS: usize = 9;

/// Build XOVER command; without a range the current article is described
pub fn xover(range: Option<&str>) -> Command {
    Command::new("XOVER").arg_opt(range)
}

/// Overview record describing one article
///
/// Format: "number\tsubject\tfrom\tdate\tmessage-id\treferences\tbytes\tlines\txref"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewEntry {
    /// Article number within the newsgroup
    pub article_number: u64,
    /// Article subject line
    pub subject: String,
    /// Article author (From header)
    pub author: String,
    /// Article date string
    pub date: String,
    /// Unique message ID
    pub message_id: String,
    /// References to parent articles (for threading)
    pub references: String,
    /// Article size in bytes
    pub bytes: u64,
    /// Number of lines in the article
    pub lines: u64,
    /// Trailing Xref field, if the server sends one
    pub xref: Option<String>,
}

/// Article number of an overview record: its first tab-separated field
pub fn parse_overview_number(line: &str) -> Result<u64> {
    line.split('\t')
        .next()
        .and_then(|n| n.trim().parse().ok())
        .ok_or_else(|| NntpError::MalformedListing(line.to_string()))
}

/// Parse a full overview record
///
/// At most [`OVERVIEW_FIELDS`] fields are split off; anything after the eighth tab
/// stays in `xref`. Empty byte/line counts decode as 0.
pub fn parse_xover_line(line: &str) -> Result<OverviewEntry> {
    let parts: Vec<&str> = line.splitn(OVERVIEW_FIELDS, '\t').collect();
    if parts.len() < 8 {
        return Err(NntpError::MalformedListing(line.to_string()));
    }

    let count = |s: &str| -> Result<u64> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(0);
        }
        s.parse()
            .map_err(|_| NntpError::MalformedListing(line.to_string()))
    };

    Ok(OverviewEntry {
        article_number: parse_overview_number(line)?,
        subject: parts[1].to_string(),
        author: parts[2].to_string(),
        date: parts[3].to_string(),
        message_id: parts[4].to_string(),
        references: parts[5].to_string(),
        bytes: count(parts[6])?,
        lines: count(parts[7])?,
        xref: parts.get(8).map(|x| x.to_string()),
    })
}
