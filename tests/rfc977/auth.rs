//! AUTHINFO USER/PASS exchange run by `connect` when credentials are configured

use super::mock::{connect, connect_with, test_config};
use nntp_reader::{AuthFailure, NntpClient, NntpError, Result, ServerConfig};

const GREETING: &str = "200 news.example.com ready\r\n";

fn credentials() -> ServerConfig {
    test_config().with_credentials("alice", "s3cret")
}

fn auth_failure(result: Result<NntpClient>) -> (AuthFailure, u16) {
    match result {
        Err(NntpError::AuthFailed { reason, code, .. }) => (reason, code),
        Err(other) => panic!("expected AuthFailed, got {other:?}"),
        Ok(_) => panic!("expected AuthFailed, got a session"),
    }
}

#[tokio::test]
async fn test_user_then_pass_accepted() {
    let (client, server) = connect_with(
        credentials(),
        GREETING,
        &["381 password required\r\n", "281 authentication accepted\r\n"],
    )
    .await;

    let client = client.unwrap();
    assert!(client.is_authenticated());
    assert_eq!(
        server.received(),
        vec!["AUTHINFO USER alice", "AUTHINFO PASS s3cret"]
    );
}

#[tokio::test]
async fn test_user_alone_accepted() {
    let (client, server) =
        connect_with(credentials(), GREETING, &["281 welcome back\r\n"]).await;

    assert!(client.unwrap().is_authenticated());
    assert_eq!(server.received(), vec!["AUTHINFO USER alice"]);
}

#[tokio::test]
async fn test_second_continuation_is_incomplete() {
    let (client, _server) = connect_with(
        credentials(),
        GREETING,
        &["381 password required\r\n", "381 still more\r\n"],
    )
    .await;

    assert_eq!(auth_failure(client), (AuthFailure::Incomplete, 381));
}

#[tokio::test]
async fn test_password_rejected() {
    let (client, _server) = connect_with(
        credentials(),
        GREETING,
        &["381 password required\r\n", "481 authentication rejected\r\n"],
    )
    .await;

    assert_eq!(auth_failure(client), (AuthFailure::Rejected, 481));
}

#[tokio::test]
async fn test_out_of_sequence_is_rejected() {
    let (client, _server) =
        connect_with(credentials(), GREETING, &["482 out of sequence\r\n"]).await;

    assert_eq!(auth_failure(client), (AuthFailure::Rejected, 482));
}

#[tokio::test]
async fn test_no_permission() {
    let (client, _server) = connect_with(
        credentials(),
        GREETING,
        &["381 password required\r\n", "502 no permission\r\n"],
    )
    .await;

    assert_eq!(auth_failure(client), (AuthFailure::NoPermission, 502));
}

#[tokio::test]
async fn test_unexpected_code() {
    let (client, _server) =
        connect_with(credentials(), GREETING, &["500 command not recognized\r\n"]).await;

    assert_eq!(auth_failure(client), (AuthFailure::Unexpected, 500));
}

#[tokio::test]
async fn test_no_credentials_means_no_authinfo() {
    let (mut client, server) = connect(&["205 bye\r\n"]).await;
    assert!(!client.is_authenticated());

    client.close().await.unwrap();
    assert_eq!(server.received(), vec!["QUIT"]);
}

#[tokio::test]
async fn test_explicit_authenticate_without_username() {
    let (mut client, server) = connect(&[]).await;

    let err = client.authenticate().await.unwrap_err();
    assert!(matches!(err, NntpError::MissingCredentials("username")));
    assert!(!client.is_authenticated());
    assert!(server.received().is_empty());
}

#[tokio::test]
async fn test_password_requested_but_not_configured() {
    // A username alone does not trigger authentication on connect
    let config = ServerConfig {
        username: Some("alice".to_string()),
        ..test_config()
    };
    let (client, server) = connect_with(config, GREETING, &["381 password required\r\n"]).await;
    let mut client = client.unwrap();
    assert!(server.received().is_empty());

    let err = client.authenticate().await.unwrap_err();
    assert!(matches!(err, NntpError::MissingCredentials("password")));
    assert!(!client.is_authenticated());
    assert_eq!(server.received(), vec!["AUTHINFO USER alice"]);
}
