//! Articles as retrieved with ARTICLE, HEAD and BODY
//!
//! This module is organized into:
//! - `types`: Core article data structures (Article, Headers)
//! - `parsing`: Decoding of data blocks into headers and bodies

mod parsing;
mod types;

// Re-export public API
pub use self::parsing::{parse_article, parse_body, parse_headers, split_header};
pub use self::types::{Article, Headers};
