#![doc = include_str!("../README.md")]

/// Article types and header/body parsing
pub mod article;
/// Dot-terminated data block framing
pub mod block;
mod client;
/// NNTP command builders and response parsers
pub mod commands;
mod config;
mod date;
mod error;
mod response;
mod tracer;

pub use article::{Article, Headers};
pub use block::{BlockLine, classify_line};
pub use client::{NntpClient, NntpIo};
pub use commands::{
    ArticleId, ArticleInfo, Command, GroupInfo, MAX_COMMAND_LENGTH, Newsgroup, OverviewEntry,
};
pub use config::{DEFAULT_PORT, ServerConfig};
pub use date::{format_nntp_date, parse_server_date};
pub use error::{AuthFailure, NntpError, Result};
pub use response::{NntpResponse, ResponseClass, codes};
pub use tracer::{Direction, ProtocolTracer};
