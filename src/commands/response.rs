//! Status line decoding

use crate::error::{NntpError, Result};
use crate::response::NntpResponse;

fn malformed(line: &str) -> NntpError {
    NntpError::MalformedResponse(line.chars().take(100).collect())
}

/// Parse NNTP status line into code and message
///
/// The code is the leading three ASCII digits; the message is everything after the
/// separating space with trailing whitespace removed. A bare code ("205") yields an
/// empty message. Anything shorter than three digits is malformed.
pub fn parse_response_line(line: &str) -> Result<(u16, String)> {
    // Strip UTF-8 BOM if present (some broken servers/proxies add it)
    let line = line.trim_start_matches('\u{FEFF}').trim_end();

    let bytes = line.as_bytes();
    if bytes.len() < 3 || !bytes[..3].iter().all(u8::is_ascii_digit) {
        return Err(malformed(line));
    }

    // "99999 message" must not decode as 999 with message "99 message"
    if bytes.len() > 3 && bytes[3].is_ascii_digit() {
        return Err(malformed(line));
    }

    let code = line[..3].parse::<u16>().map_err(|_| malformed(line))?;

    let message = match bytes.get(3) {
        Some(b' ') => line[4..].to_string(),
        Some(_) => line[3..].to_string(),
        None => String::new(),
    };

    Ok((code, message))
}

/// Parse single-line NNTP response
pub fn parse_single_response(line: &str) -> Result<NntpResponse> {
    let (code, message) = parse_response_line(line)?;

    Ok(NntpResponse {
        code,
        message,
        lines: vec![],
    })
}
