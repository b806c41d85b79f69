//! Shared test support: a canned single-shot HTTP responder.
//!
//! Serves `{meta, data}` envelopes from a route function so scenario tests
//! can drive the real client end to end without a backend.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use pricewatch_sdk::prelude::*;

/// One canned HTTP response.
#[derive(Clone)]
pub struct Canned {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Canned {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub type Router = Arc<dyn Fn(&str) -> Canned + Send + Sync>;

/// Start a responder on an ephemeral port; returns its address.
///
/// The route function receives the request target (path + query) and picks
/// the response. Connections are handled concurrently so the client's
/// paired latest/interval requests can resolve independently.
pub async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind responder");
    let addr = listener.local_addr().expect("responder addr");

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let router = router.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let mut read = 0usize;
                loop {
                    match socket.read(&mut buf[read..]).await {
                        Ok(0) => return,
                        Ok(n) => {
                            read += n;
                            if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                            if read == buf.len() {
                                return;
                            }
                        }
                        Err(_) => return,
                    }
                }
                let head = String::from_utf8_lossy(&buf[..read]).into_owned();
                let target = head.split_whitespace().nth(1).unwrap_or("/").to_string();

                let canned = router(&target);
                if !canned.delay.is_zero() {
                    tokio::time::sleep(canned.delay).await;
                }
                let reason = if canned.status == 200 { "OK" } else { "ERR" };
                let response = format!(
                    "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    canned.status,
                    reason,
                    canned.body.len(),
                    canned.body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// A `{meta, data}` envelope body.
pub fn envelope(code: u16, message: &str, data: &str) -> String {
    format!(r#"{{"meta":{{"code":{code},"message":"{message}"}},"data":{data}}}"#)
}

/// A history sample JSON object timestamped `hours_ago` before now.
pub fn sample_json(symbol: &str, hours_ago: i64, price: i64) -> String {
    let ts = (Utc::now() - chrono::Duration::hours(hours_ago)).to_rfc3339();
    format!(r#"{{"timestamp":"{ts}","symbol":"{symbol}","currency":"USDT","price":{price}}}"#)
}

/// A client pointed at the responder.
pub fn client_for(addr: SocketAddr, poll_interval: Duration) -> PricewatchClient {
    PricewatchClient::builder()
        .base_url(&format!("http://{addr}"))
        .poll_interval(poll_interval)
        .build()
        .expect("build client")
}
