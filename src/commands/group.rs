//! Group selection and newsgroup-related commands

use chrono::NaiveDateTime;

use crate::date::format_nntp_date;
use crate::error::{NntpError, Result};
use crate::response::NntpResponse;

use super::Command;

/// Build GROUP command
pub fn group(newsgroup: &str) -> Command {
    Command::new("GROUP").arg(newsgroup)
}

/// Build LISTGROUP command
///
/// Without a newsgroup the server lists the currently selected group.
pub fn listgroup(newsgroup: Option<&str>) -> Command {
    Command::new("LISTGROUP").arg_opt(newsgroup)
}

/// Build NEWGROUPS command
///
/// Format: `NEWGROUPS yymmdd hhmmss`
pub fn newgroups(since: &NaiveDateTime) -> Command {
    Command::new("NEWGROUPS").arg(format_nntp_date(since))
}

/// Group information returned by the GROUP command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfo {
    /// Estimated number of articles in the group
    pub count: u64,
    /// Number of the first article
    pub first: u64,
    /// Number of the last article
    pub last: u64,
    /// Group name as echoed by the server
    pub name: String,
}

/// Parse GROUP response to extract article count and range
///
/// Response format: "211 count first last group-name". Servers that omit the name
/// get `requested` recorded instead.
pub fn parse_group_response(response: &NntpResponse, requested: &str) -> Result<GroupInfo> {
    let parts: Vec<&str> = response.message.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(NntpError::MalformedResponse(response.message.clone()));
    }

    let number = |s: &str| {
        s.parse::<u64>()
            .map_err(|_| NntpError::MalformedResponse(response.message.clone()))
    };

    Ok(GroupInfo {
        count: number(parts[0])?,
        first: number(parts[1])?,
        last: number(parts[2])?,
        name: parts.get(3).unwrap_or(&requested).to_string(),
    })
}

/// Newsgroup entry from LIST or NEWGROUPS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Newsgroup {
    /// Newsgroup name
    pub name: String,
    /// Highest article number (high watermark)
    pub high: u64,
    /// Lowest article number (low watermark)
    pub low: u64,
    /// Posting flag: "y" = posting allowed, "n" = not allowed, "m" = moderated
    pub flags: String,
}

impl Newsgroup {
    /// Whether the flag permits posting
    pub fn posting_allowed(&self) -> bool {
        self.flags == "y"
    }

    /// Whether postings are sent to a moderator
    pub fn is_moderated(&self) -> bool {
        self.flags == "m"
    }
}

/// Parse one LIST / NEWGROUPS line: "group last first flags"
///
/// Exactly four whitespace-separated fields are required and both watermarks
/// must be unsigned integers.
///
/// # Errors
///
/// Returns [`NntpError::MalformedListing`] for any other shape.
pub fn parse_newsgroup_line(line: &str) -> Result<Newsgroup> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [name, high, low, flags] = parts.as_slice() else {
        return Err(NntpError::MalformedListing(line.to_string()));
    };

    let watermark = |s: &str| {
        s.parse::<u64>()
            .map_err(|_| NntpError::MalformedListing(line.to_string()))
    };

    Ok(Newsgroup {
        name: name.to_string(),
        high: watermark(high)?,
        low: watermark(low)?,
        flags: flags.to_string(),
    })
}

/// Parse every line of a LIST / NEWGROUPS data block
pub fn parse_newsgroup_listing(lines: &[String]) -> Result<Vec<Newsgroup>> {
    lines.iter().map(|line| parse_newsgroup_line(line)).collect()
}

/// Parse a LISTGROUP data block: one article number per line
pub fn parse_article_numbers(lines: &[String]) -> Result<Vec<u64>> {
    lines
        .iter()
        .map(|line| {
            line.trim()
                .parse::<u64>()
                .map_err(|_| NntpError::MalformedListing(line.clone()))
        })
        .collect()
}
