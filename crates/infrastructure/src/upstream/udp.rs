//! UDP transport to the upstream resolver (RFC 1035 §4.2.1)
//!
//! One query, one reply, no framing. A fresh ephemeral socket is bound
//! per exchange and released on every exit path. Replies whose
//! transaction id does not match the query are discarded and the wait
//! continues until the deadline.

use async_trait::async_trait;
use cinder_dns_application::{ProxyError, UpstreamExchange};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpUpstream {
    server_addr: SocketAddr,
    timeout: Duration,
}

impl UdpUpstream {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            server_addr,
            timeout,
        }
    }

    fn unreachable(&self, reason: String) -> ProxyError {
        ProxyError::UpstreamUnreachable {
            server: self.server_addr.to_string(),
            reason,
        }
    }

    fn timed_out(&self) -> ProxyError {
        ProxyError::UpstreamTimeout {
            server: self.server_addr.to_string(),
            timeout_ms: self.timeout.as_millis() as u64,
        }
    }
}

#[async_trait]
impl UpstreamExchange for UdpUpstream {
    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, ProxyError> {
        if query.len() < 2 {
            return Err(self.unreachable("query shorter than a transaction id".to_string()));
        }
        let query_id = u16::from_be_bytes([query[0], query[1]]);

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.unreachable(format!("failed to bind UDP socket: {e}")))?;

        let deadline = Instant::now() + self.timeout;

        let bytes_sent = tokio::time::timeout_at(deadline, socket.send_to(query, self.server_addr))
            .await
            .map_err(|_| self.timed_out())?
            .map_err(|e| self.unreachable(format!("failed to send query: {e}")))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            id = query_id,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let (bytes_received, from_addr) =
                tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| self.timed_out())?
                    .map_err(|e| self.unreachable(format!("failed to receive reply: {e}")))?;

            if from_addr.ip() != self.server_addr.ip() {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP reply from unexpected source, discarding"
                );
                continue;
            }

            if bytes_received < 2 {
                warn!(bytes_received = bytes_received, "UDP reply too short, discarding");
                continue;
            }

            let reply_id = u16::from_be_bytes([recv_buf[0], recv_buf[1]]);
            if reply_id != query_id {
                warn!(
                    expected = query_id,
                    received = reply_id,
                    "transaction id mismatch, discarding reply"
                );
                continue;
            }

            debug!(
                server = %self.server_addr,
                bytes_received = bytes_received,
                id = reply_id,
                "UDP reply received"
            );

            recv_buf.truncate(bytes_received);
            return Ok(recv_buf);
        }
    }

    fn server(&self) -> String {
        self.server_addr.to_string()
    }
}
