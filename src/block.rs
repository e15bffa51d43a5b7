//! Multi-line data blocks
//!
//! A positive reply to ARTICLE, HEAD, BODY, LIST and friends is followed by a block
//! of text lines ending with a line holding a single ".". Content lines that begin
//! with "." were dot-stuffed by the server and lose their leading dot here.

/// The block terminator line, without CRLF
pub const TERMINATOR: &str = ".";

/// One raw line of a data block, classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockLine<'a> {
    /// The lone-dot terminator; not part of the content
    End,
    /// A content line with dot-stuffing removed
    Data(&'a str),
}

/// Classify a raw block line (already stripped of CRLF)
///
/// The session reads line by line and stops at the first [`BlockLine::End`], so
/// nothing after the terminator is consumed.
///
/// # Examples
///
/// ```
/// use nntp_reader::{BlockLine, classify_line};
///
/// assert_eq!(classify_line("."), BlockLine::End);
/// assert_eq!(classify_line(".b"), BlockLine::Data("b"));
/// assert_eq!(classify_line("a"), BlockLine::Data("a"));
/// ```
pub fn classify_line(line: &str) -> BlockLine<'_> {
    if line == TERMINATOR {
        return BlockLine::End;
    }
    BlockLine::Data(line.strip_prefix('.').unwrap_or(line))
}
