//! Date arguments and DATE responses
//!
//! NEWNEWS and NEWGROUPS take the date as two tokens, `yymmdd hhmmss`, with a
//! 24-hour clock. The DATE command answers with `yyyymmddhhmmss`.

use chrono::NaiveDateTime;

use crate::error::{NntpError, Result};

const ARGUMENT_FORMAT: &str = "%y%m%d %H%M%S";
const SERVER_DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// Format a date as a NEWNEWS / NEWGROUPS argument (`yymmdd HHMMSS`)
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nntp_reader::format_nntp_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9)
///     .unwrap()
///     .and_hms_opt(7, 5, 0)
///     .unwrap();
/// assert_eq!(format_nntp_date(&date), "240309 070500");
/// ```
pub fn format_nntp_date(date: &NaiveDateTime) -> String {
    date.format(ARGUMENT_FORMAT).to_string()
}

/// Parse the `yyyymmddhhmmss` text of a 111 response
pub fn parse_server_date(text: &str) -> Result<NaiveDateTime> {
    let token = text.split_whitespace().next().unwrap_or_default();
    NaiveDateTime::parse_from_str(token, SERVER_DATE_FORMAT).map_err(|_| {
        NntpError::MalformedResponse(format!(
            "Invalid server date: {} (expected yyyymmddhhmmss)",
            text
        ))
    })
}
