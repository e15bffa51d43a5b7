//! RFC 977 Section 2.4.3 - Multi-line Responses
//!
//! These tests verify data block framing over the wire:
//! - Blocks are terminated by a line containing only "."
//! - A leading "." on any longer line is removed (dot-unstuffing)
//! - End of stream before the terminator ends the block without error

use super::mock::{connect, connect_stalling};
use nntp_reader::{ArticleId, NntpError};
use std::time::Duration;

async fn body_of(reply: &str) -> String {
    let (mut client, _server) = connect(&[reply]).await;
    client
        .body(Some(&ArticleId::ByNumber(1)))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_terminator_ends_block() {
    assert_eq!(body_of("222 1 <a@b>\r\na\r\n.\r\n").await, "a\n");
}

#[tokio::test]
async fn test_stuffed_line_is_unstuffed() {
    assert_eq!(body_of("222 1 <a@b>\r\na\r\n.b\r\n.\r\n").await, "a\nb\n");
}

#[tokio::test]
async fn test_double_dot_becomes_single_dot() {
    assert_eq!(body_of("222 1 <a@b>\r\n..\r\n...\r\n.\r\n").await, ".\n..\n");
}

#[tokio::test]
async fn test_empty_block() {
    assert_eq!(body_of("222 1 <a@b>\r\n.\r\n").await, "");
}

#[tokio::test]
async fn test_blank_lines_are_content() {
    assert_eq!(body_of("222 1 <a@b>\r\n\r\nx\r\n\r\n.\r\n").await, "\nx\n\n");
}

#[tokio::test]
async fn test_end_of_stream_ends_block() {
    // Server hangs up mid-block: everything read so far is returned
    assert_eq!(body_of("222 1 <a@b>\r\npartial\r\nmore\r\n").await, "partial\nmore\n");
}

#[tokio::test]
async fn test_bare_lf_line_endings() {
    assert_eq!(body_of("222 1 <a@b>\nunix\n.\n").await, "unix\n");
}

#[tokio::test]
async fn test_trailing_whitespace_is_preserved() {
    assert_eq!(body_of("222 1 <a@b>\r\nsig -- \r\n.\r\n").await, "sig -- \n");
}

#[tokio::test]
async fn test_lines_after_terminator_belong_to_next_reply() {
    let (mut client, server) = connect(&[
        "222 1 <a@b>\r\nfirst\r\n.\r\n",
        "222 2 <c@d>\r\nsecond\r\n.\r\n",
    ])
    .await;

    let first = client.body(Some(&ArticleId::ByNumber(1))).await.unwrap();
    let second = client.body(Some(&ArticleId::ByNumber(2))).await.unwrap();
    assert_eq!(first, "first\n");
    assert_eq!(second, "second\n");
    assert_eq!(server.received(), vec!["BODY 1", "BODY 2"]);
}

#[tokio::test]
async fn test_utf8_body() {
    let (mut client, _server) = connect(&["222 1 <a@b>\r\ncaf\u{e9}\r\n.\r\n"]).await;
    let body = client.body(Some(&ArticleId::ByNumber(1))).await.unwrap();
    assert_eq!(body, "caf\u{e9}\n");
}

#[tokio::test(start_paused = true)]
async fn test_timeout_inside_block_breaks_session() {
    // The rest of the block and a stray GROUP reply arrive only after the read timeout
    let (mut client, server) = connect_stalling(
        "222 1 <a@b>\r\nfirst\r\n",
        Duration::from_secs(5),
        "second\r\n.\r\n211 9 1 9 stale.group\r\n",
    )
    .await;

    let err = client
        .body(Some(&ArticleId::ByNumber(1)))
        .await
        .unwrap_err();
    assert!(matches!(err, NntpError::Timeout));
    assert!(client.is_broken());

    // The leftover lines must never be read as the reply to a new command
    tokio::time::sleep(Duration::from_secs(10)).await;
    let err = client.select_group("real.group").await.unwrap_err();
    assert!(matches!(err, NntpError::Broken));
    assert_eq!(client.current_group(), None);
    assert_eq!(server.received(), vec!["BODY 1"]);
}
