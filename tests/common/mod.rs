//! Mock HTTP backends for race tests.

#![allow(dead_code)]

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// Start a backend that answers every request with `status` after `delay`.
pub async fn start_backend(status: u16, delay: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                if read_head(&mut socket).await.is_none() {
                    return;
                }
                tokio::time::sleep(delay).await;
                let _ = respond(&mut socket, status).await;
            });
        }
    });

    format!("http://{}/", addr)
}

/// A backend that accepts connections but never answers.
pub async fn start_silent_backend() -> String {
    start_backend(200, Duration::from_secs(3600)).await
}

/// Start a backend that answers 200 at once and reports each request head.
pub async fn start_recording_backend() -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(head) = read_head(&mut socket).await {
                    let _ = tx.send(head);
                    let _ = respond(&mut socket, 200).await;
                }
            });
        }
    });

    (format!("http://{}/", addr), rx)
}

/// An address nothing listens on.
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

async fn read_head(socket: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    Some(String::from_utf8_lossy(&buf).into_owned())
}

async fn respond(socket: &mut TcpStream, status: u16) -> std::io::Result<()> {
    let response = format!(
        "HTTP/1.1 {} Mock\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        status
    );
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}
