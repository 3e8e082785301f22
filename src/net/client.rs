// Copyright (c) 2025 Ant Group
//
// SPDX-License-Identifier: Apache-2.0
//

//! Raw TCP socket client issuing a hand-written HTTP/1.0 request.

use anyhow::{Context, Result};
use slog::{info, o};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

// Convenience macro to obtain the scope logger
macro_rules! sl {
    () => {
        slog_scope::logger().new(o!("subsystem" => "net-client"))
    };
}

/// Default remote probed by [`dump_root`].
pub const DEFAULT_TARGET: &str = "ascii.jp:80";

/// Dials `target` ("host:port"), sends a fixed HTTP/1.0 request for `/`
/// and copies the full response to `sink`, returning the number of bytes
/// copied.
///
/// HTTP/1.0 without keep-alive: the remote closes the connection after
/// the response, which terminates the copy.
pub async fn fetch_root<W>(target: &str, sink: &mut W) -> Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let host = target.split(':').next().unwrap_or(target);

    let mut stream = TcpStream::connect(target)
        .await
        .with_context(|| format!("dial {}", target))?;
    info!(sl!(), "connected to {}", target);

    let request = format!("GET / HTTP/1.0\r\nHost: {}\r\n\r\n", host);
    stream
        .write_all(request.as_bytes())
        .await
        .context("send request")?;

    let copied = tokio::io::copy(&mut stream, sink)
        .await
        .context("copy response")?;

    Ok(copied)
}

/// Probes [`DEFAULT_TARGET`] and dumps the response to standard output.
pub async fn dump_root() -> Result<u64> {
    fetch_root(DEFAULT_TARGET, &mut tokio::io::stdout()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    const CANNED_RESPONSE: &[u8] = b"HTTP/1.0 200 OK\r\nContent-Length: 2\r\n\r\nok";

    #[tokio::test]
    async fn test_fetch_root_copies_response() {
        test_utils::ensure_global_logger();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            // Read up to the blank line ending the request head.
            let mut request = Vec::new();
            let mut buf = [0u8; 256];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            socket.write_all(CANNED_RESPONSE).await.unwrap();
            // The socket drops here, closing the connection.
            String::from_utf8_lossy(&request).into_owned()
        });

        let mut sink = Vec::new();
        let copied = fetch_root(&addr.to_string(), &mut sink).await.unwrap();

        assert_eq!(copied, CANNED_RESPONSE.len() as u64);
        assert_eq!(sink, CANNED_RESPONSE);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET / HTTP/1.0\r\n"));
        assert!(request.contains("Host: 127.0.0.1\r\n"));
    }

    #[tokio::test]
    async fn test_fetch_root_connection_refused() {
        test_utils::ensure_global_logger();

        let mut sink = Vec::new();
        fetch_root("127.0.0.1:1", &mut sink).await.unwrap_err();
    }
}
