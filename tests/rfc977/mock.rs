//! Scripted NNTP server over an in-memory duplex stream
//!
//! The server sends a greeting, then answers each command line it receives with
//! the next scripted reply, in order. Every line it receives is recorded. Once
//! the script is exhausted it closes its write side and keeps recording until
//! the client goes away.

use nntp_reader::{NntpClient, Result, ServerConfig};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Handle to the scripted server task
pub struct MockServer {
    received: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// Command lines received so far, without CRLF
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

/// Config with short timeouts so a script mismatch fails fast instead of hanging
pub fn test_config() -> ServerConfig {
    ServerConfig::new("news.example.com")
        .with_timeouts(Duration::from_secs(2), Duration::from_secs(2))
}

/// Spawn a server that sends `greeting` and then one reply per command
pub fn spawn(greeting: &str, replies: &[&str]) -> (tokio::io::DuplexStream, MockServer) {
    let (client_side, server_side) = tokio::io::duplex(64 * 1024);
    let received = Arc::new(Mutex::new(Vec::new()));
    let log = received.clone();
    let greeting = greeting.to_string();
    let replies: Vec<String> = replies.iter().map(|r| r.to_string()).collect();

    tokio::spawn(async move {
        let (reader, mut writer) = tokio::io::split(server_side);
        let mut reader = BufReader::new(reader);

        if writer.write_all(greeting.as_bytes()).await.is_err() {
            return;
        }

        let mut replies = replies.into_iter();
        let mut line = String::new();
        loop {
            line.clear();
            match reader.read_line(&mut line).await {
                Ok(0) | Err(_) => return,
                Ok(_) => {}
            }
            log.lock()
                .unwrap()
                .push(line.trim_end_matches(['\r', '\n']).to_string());

            match replies.next() {
                Some(reply) => {
                    if writer.write_all(reply.as_bytes()).await.is_err() {
                        return;
                    }
                    if replies.len() == 0 {
                        let _ = writer.shutdown().await;
                    }
                }
                None => {
                    let _ = writer.shutdown().await;
                }
            }
        }
    });

    (client_side, MockServer { received })
}

/// Spawn a server that answers the first command with `partial`, waits `stall`,
/// then writes `rest` and goes on recording whatever else arrives
pub fn spawn_stalling(
    greeting: &str,
    partial: &str,
    stall: Duration,
    rest: &str,
) -> (tokio::io::DuplexStream, MockServer) {
    let (client_side, server_side) = tokio::io::duplex(64 * 1024);
    let received = Arc::new(Mutex::new(Vec::new()));
    let log = received.clone();
    let greeting = greeting.to_string();
    let partial = partial.to_string();
    let rest = rest.to_string();

    tokio::spawn(async move {
        let (reader, mut writer) = tokio::io::split(server_side);
        let mut reader = BufReader::new(reader);

        if writer.write_all(greeting.as_bytes()).await.is_err() {
            return;
        }

        let mut line = String::new();
        let mut answered = false;
        loop {
            line.clear();
            match reader.read_line(&mut line).await {
                Ok(0) | Err(_) => return,
                Ok(_) => {}
            }
            log.lock()
                .unwrap()
                .push(line.trim_end_matches(['\r', '\n']).to_string());

            if !answered {
                answered = true;
                if writer.write_all(partial.as_bytes()).await.is_err() {
                    return;
                }
                tokio::time::sleep(stall).await;
                if writer.write_all(rest.as_bytes()).await.is_err() {
                    return;
                }
            }
        }
    });

    (client_side, MockServer { received })
}

/// Connect to a stalling server with [`test_config`] timeouts
pub async fn connect_stalling(
    partial: &str,
    stall: Duration,
    rest: &str,
) -> (NntpClient, MockServer) {
    let (stream, server) = spawn_stalling("200 news.example.com ready\r\n", partial, stall, rest);
    let client = NntpClient::connect_stream(stream, Arc::new(test_config()))
        .await
        .expect("connect to stalling server");
    (client, server)
}

/// Connect a client to a scripted server using `config`
pub async fn connect_with(
    config: ServerConfig,
    greeting: &str,
    replies: &[&str],
) -> (Result<NntpClient>, MockServer) {
    let (stream, server) = spawn(greeting, replies);
    let client = NntpClient::connect_stream(stream, Arc::new(config)).await;
    (client, server)
}

/// Connect without credentials and a posting-allowed greeting
pub async fn connect(replies: &[&str]) -> (NntpClient, MockServer) {
    let (client, server) = connect_with(test_config(), "200 news.example.com ready\r\n", replies).await;
    (client.expect("connect to mock server"), server)
}
