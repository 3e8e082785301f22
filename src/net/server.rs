// Copyright (c) 2025 Ant Group
//
// SPDX-License-Identifier: Apache-2.0
//

//! Minimal HTTP server answering every request with the same fixed body.

use std::convert::Infallible;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use hyper::server::conn::Http;
use hyper::service::service_fn;
use hyper::{Body, Request, Response};
use slog::{info, o, warn};
use tokio::net::TcpListener;

// Convenience macro to obtain the scope logger
macro_rules! sl {
    () => {
        slog_scope::logger().new(o!("subsystem" => "net-server"))
    };
}

/// Default listen address of [`serve`].
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Fixed plaintext body answered to every request.
pub const RESPONSE_BODY: &str = "http.ResponseWriter sample";

// Every request gets the same fixed body: no routing, no status-code
// logic.
async fn respond(_req: Request<Body>) -> Result<Response<Body>, Infallible> {
    Ok(Response::new(Body::from(RESPONSE_BODY)))
}

/// Binds `addr` and serves the fixed-body handler until the listener
/// fails.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {}", addr))?;

    serve_on(listener).await
}

/// Serves the fixed-body handler on an already-bound listener.
///
/// Per-connection serve errors are logged and do not stop the listener.
pub async fn serve_on(listener: TcpListener) -> Result<()> {
    let local_addr = listener.local_addr().context("listener address")?;
    info!(sl!(), "listening on {}", local_addr);

    loop {
        let (stream, _) = listener.accept().await.context("accept connection")?;
        tokio::task::spawn(async move {
            if let Err(err) = Http::new()
                .serve_connection(stream, service_fn(respond))
                .await
            {
                warn!(sl!(), "failed to serve connection: {:?}", err);
            }
        });
    }
}
