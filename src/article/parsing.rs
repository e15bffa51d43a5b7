//! Article parsing functions
//!
//! Decodes the lines of a data block (already unstuffed) into headers and bodies.

use tracing::warn;

use super::types::Headers;

/// Header name/value separator
const HEADER_SEPARATOR: &str = ": ";

/// Split a header line on the first ": "
pub fn split_header(line: &str) -> Option<(&str, &str)> {
    line.split_once(HEADER_SEPARATOR)
}

fn is_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

/// Parse a HEAD data block into a flat header map
///
/// Every line is split on its first ": ". No folding is applied; a later header
/// with the same name overwrites the earlier value. Lines without a separator
/// are skipped.
pub fn parse_headers<I>(lines: I) -> Headers
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut headers = Headers::new();
    for line in lines {
        let line = line.as_ref();
        match split_header(line) {
            Some((name, value)) => headers.insert(name, value),
            None => warn!("Skipping header line without separator: {}", line),
        }
    }
    headers
}

/// Parse an ARTICLE data block into headers and body
///
/// The header region is the leading run of lines that either start a header
/// ("Name: value") or continue the previous one (leading space or tab; appended
/// verbatim after a "\n"). The first line that is neither, normally the blank
/// separator, starts the body; it and every later line are appended to the body
/// with a trailing "\n".
///
/// # Examples
///
/// ```
/// use nntp_reader::article::parse_article;
///
/// let (headers, body) = parse_article(["Subject: hi", " there", "", "text"]);
/// assert_eq!(headers.get("Subject"), Some("hi\n there"));
/// assert_eq!(body, "\ntext\n");
/// ```
pub fn parse_article<I>(lines: I) -> (Headers, String)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut lines = lines.into_iter();
    let mut headers = Headers::new();
    let mut current: Option<String> = None;
    let mut body = String::new();

    for line in lines.by_ref() {
        let line = line.as_ref();

        if is_continuation(line) {
            if let Some(name) = &current {
                headers.append_continuation(name, line);
                continue;
            }
        } else if let Some((name, value)) = split_header(line) {
            headers.insert(name, value);
            current = Some(name.to_string());
            continue;
        }

        body.push_str(line);
        body.push('\n');
        break;
    }

    for line in lines {
        body.push_str(line.as_ref());
        body.push('\n');
    }

    (headers, body)
}

/// Join a BODY data block, terminating every line with "\n"
pub fn parse_body<I>(lines: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut body = String::new();
    for line in lines {
        body.push_str(line.as_ref());
        body.push('\n');
    }
    body
}
