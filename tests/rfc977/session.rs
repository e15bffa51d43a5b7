//! Session lifecycle: greeting, dispatch, command length, QUIT, tracing

use super::mock::{connect, connect_stalling, connect_with, test_config};
use nntp_reader::{Direction, MAX_COMMAND_LENGTH, NntpClient, NntpError};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::AsyncWriteExt;

#[tokio::test]
async fn test_greeting_posting_allowed() {
    let (client, _server) = connect(&[]).await;
    assert!(client.posting_allowed());
    assert!(client.is_connected());
    assert!(!client.is_authenticated());
    assert_eq!(client.current_group(), None);
}

#[tokio::test]
async fn test_greeting_no_posting() {
    let (client, _server) = connect_with(test_config(), "201 read only\r\n", &[]).await;
    assert!(!client.unwrap().posting_allowed());
}

#[tokio::test]
async fn test_greeting_refused() {
    let (client, _server) =
        connect_with(test_config(), "400 service unavailable\r\n", &[]).await;
    assert!(matches!(client, Err(NntpError::ConnectFailed(_))));
}

#[tokio::test]
async fn test_close_sends_quit() {
    let (mut client, server) = connect(&["205 closing connection\r\n"]).await;
    client.close().await.unwrap();
    assert!(!client.is_connected());
    assert_eq!(server.received(), vec!["QUIT"]);
}

#[tokio::test]
async fn test_close_is_idempotent() {
    let (mut client, server) = connect(&["205 bye\r\n"]).await;
    client.close().await.unwrap();
    client.close().await.unwrap();
    client.close().await.unwrap();
    assert_eq!(server.received(), vec!["QUIT"]);
}

#[tokio::test]
async fn test_close_negative_reply_is_disconnect_error() {
    let (mut client, _server) = connect(&["500 what?\r\n"]).await;
    let err = client.close().await.unwrap_err();
    assert!(matches!(err, NntpError::DisconnectFailed(ref m) if m.contains("500")));
    assert!(client.is_connected());
}

#[tokio::test]
async fn test_close_without_reply_is_disconnect_error() {
    let (mut client, _server) = connect(&[]).await;
    let err = client.close().await.unwrap_err();
    assert!(matches!(err, NntpError::DisconnectFailed(_)));
}

#[tokio::test]
async fn test_commands_after_close_fail() {
    let (mut client, server) = connect(&["205 bye\r\n"]).await;
    client.close().await.unwrap();
    let err = client.select_group("misc.test").await.unwrap_err();
    assert!(matches!(err, NntpError::NotConnected));
    assert_eq!(server.received(), vec!["QUIT"]);
}

#[tokio::test]
async fn test_command_at_length_limit_is_sent() {
    // "GROUP " + name == 510 characters
    let name = "g".repeat(MAX_COMMAND_LENGTH - "GROUP ".len());
    let reply = format!("211 3 1 3 {}\r\n", name);
    let (mut client, server) = connect(&[reply.as_str()]).await;

    let info = client.select_group(&name).await.unwrap();
    assert_eq!(info.count, 3);

    let received = server.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].len(), MAX_COMMAND_LENGTH);
}

#[tokio::test]
async fn test_command_over_length_limit_is_never_sent() {
    let name = "g".repeat(MAX_COMMAND_LENGTH - "GROUP ".len() + 1);
    let (mut client, server) = connect(&["205 bye\r\n"]).await;

    let err = client.select_group(&name).await.unwrap_err();
    match err {
        NntpError::CommandTooLong { length, max } => {
            assert_eq!(length, 511);
            assert_eq!(max, 510);
        }
        other => panic!("expected CommandTooLong, got {other:?}"),
    }
    assert_eq!(client.current_group(), None);

    // The session stays usable and the oversized line never reached the server
    client.close().await.unwrap();
    assert_eq!(server.received(), vec!["QUIT"]);
}

#[tokio::test]
async fn test_select_group() {
    let (mut client, server) = connect(&["211 1234 3000234 3002322 misc.test\r\n"]).await;

    let info = client.select_group("misc.test").await.unwrap();
    assert_eq!(info.count, 1234);
    assert_eq!(info.first, 3000234);
    assert_eq!(info.last, 3002322);
    assert_eq!(info.name, "misc.test");
    assert_eq!(client.current_group(), Some("misc.test"));
    assert_eq!(server.received(), vec!["GROUP misc.test"]);
}

#[tokio::test]
async fn test_select_missing_group() {
    let (mut client, _server) = connect(&["411 no such news group\r\n"]).await;

    let err = client.select_group("alt.nowhere").await.unwrap_err();
    match &err {
        NntpError::UnexpectedStatus { command, code, .. } => {
            assert_eq!(command, "GROUP");
            assert_eq!(*code, 411);
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
    assert!(err.is_transient());
    assert_eq!(client.current_group(), None);
    assert!(!client.is_broken());
}

#[tokio::test]
async fn test_missing_status_line() {
    let (mut client, _server) = connect(&[]).await;

    let err = client.select_group("misc.test").await.unwrap_err();
    assert!(matches!(err, NntpError::NoResponse { ref command } if command == "GROUP"));
}

#[tokio::test]
async fn test_malformed_status_line_breaks_session() {
    let (mut client, _server) = connect(&["OK then\r\n"]).await;

    let err = client.select_group("misc.test").await.unwrap_err();
    assert!(matches!(err, NntpError::MalformedResponse(_)));
    assert!(client.is_broken());
}

#[tokio::test(start_paused = true)]
async fn test_status_line_timeout_breaks_session() {
    let (mut client, server) =
        connect_stalling("", Duration::from_secs(5), "211 9 1 9 misc.test\r\n").await;

    let err = client.select_group("misc.test").await.unwrap_err();
    assert!(matches!(err, NntpError::Timeout));
    assert!(client.is_broken());
    assert_eq!(client.current_group(), None);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(matches!(client.stat(None).await, Err(NntpError::Broken)));
    assert!(matches!(
        client.close().await,
        Err(NntpError::DisconnectFailed(_))
    ));
    assert_eq!(server.received(), vec!["GROUP misc.test"]);
}

#[tokio::test]
async fn test_write_to_closed_peer_is_io_error() {
    let (client_side, mut server_side) = tokio::io::duplex(1024);
    server_side
        .write_all(b"200 news.example.com ready\r\n")
        .await
        .unwrap();
    let mut client = NntpClient::connect_stream(client_side, Arc::new(test_config()))
        .await
        .unwrap();
    drop(server_side);

    let err = client.select_group("misc.test").await.unwrap_err();
    assert!(matches!(err, NntpError::Io(_)));
    assert!(client.is_broken());
    assert!(matches!(
        client.select_group("misc.test").await,
        Err(NntpError::Broken)
    ));
}

#[tokio::test]
async fn test_line_break_in_argument_is_never_sent() {
    let (mut client, server) = connect(&["205 bye\r\n"]).await;

    let err = client.select_group("misc.test\r\nQUIT").await.unwrap_err();
    assert!(matches!(err, NntpError::InvalidArgument { ref command } if command == "GROUP"));
    assert!(!client.is_broken());

    client.close().await.unwrap();
    assert_eq!(server.received(), vec!["QUIT"]);
}

#[tokio::test]
async fn test_help() {
    let (mut client, server) = connect(&[
        "100 help text follows\r\nARTICLE [MessageID|Number]\r\nGROUP newsgroup\r\n.\r\n",
    ])
    .await;

    let help = client.help().await.unwrap();
    assert_eq!(help, vec!["ARTICLE [MessageID|Number]", "GROUP newsgroup"]);
    assert_eq!(server.received(), vec!["HELP"]);
}

#[tokio::test]
async fn test_date() {
    let (mut client, _server) = connect(&["111 20240309070500\r\n"]).await;

    let date = client.date().await.unwrap();
    assert_eq!(date.to_string(), "2024-03-09 07:05:00");
}

#[tokio::test]
async fn test_mode_reader() {
    let (mut client, server) = connect(&["201 reader mode, no posting\r\n"]).await;
    assert!(client.posting_allowed());

    let posting = client.mode_reader().await.unwrap();
    assert!(!posting);
    assert!(!client.posting_allowed());
    assert_eq!(server.received(), vec!["MODE READER"]);
}

#[tokio::test]
async fn test_tracer_observes_both_directions() {
    let (mut client, _server) = connect(&["211 2 1 2 misc.test\r\n", "205 bye\r\n"]).await;

    let seen: Arc<Mutex<Vec<(Direction, String)>>> = Arc::default();
    let sink = seen.clone();
    client.set_tracer(move |direction: Direction, line: &str| {
        sink.lock().unwrap().push((direction, line.to_string()));
    });

    client.select_group("misc.test").await.unwrap();
    client.clear_tracer();
    client.close().await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            (Direction::Sent, "GROUP misc.test".to_string()),
            (Direction::Received, "211 2 1 2 misc.test".to_string()),
        ]
    );
}
