//! LIST, LIST OVERVIEW.FMT and NEWNEWS

use chrono::NaiveDateTime;

use crate::date::format_nntp_date;

use super::Command;

/// Build LIST command
///
/// Lists all newsgroups on the server with their watermarks and posting flag.
pub fn list() -> Command {
    Command::new("LIST")
}

/// Build LIST OVERVIEW.FMT command
///
/// Lists the fields, in order, of each XOVER record.
pub fn list_overview_fmt() -> Command {
    Command::new("LIST OVERVIEW.FMT")
}

/// Build NEWNEWS command
///
/// Lists message-IDs of articles posted to `newsgroups` (a wildmat) since the given date.
/// Format: `NEWNEWS newsgroups yymmdd hhmmss`
pub fn newnews(newsgroups: &str, since: &NaiveDateTime) -> Command {
    Command::new("NEWNEWS")
        .arg(newsgroups)
        .arg(format_nntp_date(since))
}

/// Extract the field name from one LIST OVERVIEW.FMT line
///
/// "Subject:" gives "Subject", "Xref:full" gives "Xref". Metadata items written
/// with a leading colon (":bytes") give "bytes".
pub fn parse_overview_fmt_line(line: &str) -> &str {
    let line = line.strip_prefix(':').unwrap_or(line);
    line.split(':').next().unwrap_or(line)
}

/// Parse a LIST OVERVIEW.FMT data block into field names
pub fn parse_overview_format(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| parse_overview_fmt_line(line).to_string())
        .collect()
}

/// Parse a NEWNEWS data block into message-IDs, verbatim
pub fn parse_message_ids(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
