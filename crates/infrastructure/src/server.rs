//! UDP serving loop.
//!
//! One task per datagram. Per-request failures are logged and never
//! stop the loop; undecodable or unanswerable datagrams simply get no
//! reply.

use cinder_dns_application::ProxyQueryUseCase;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{info, warn};

/// Largest client datagram we accept.
const MAX_DATAGRAM_SIZE: usize = 4096;

pub struct UdpServer {
    socket: Arc<UdpSocket>,
    handler: Arc<ProxyQueryUseCase>,
}

impl UdpServer {
    pub async fn bind(addr: SocketAddr, handler: Arc<ProxyQueryUseCase>) -> io::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        Ok(Self {
            socket: Arc::new(socket),
            handler,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    pub async fn serve(&self) -> io::Result<()> {
        info!(addr = %self.local_addr()?, "DNS proxy listening");

        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
        loop {
            let (len, peer) = match self.socket.recv_from(&mut buf).await {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "failed to receive datagram");
                    continue;
                }
            };

            let datagram = buf[..len].to_vec();
            let socket = Arc::clone(&self.socket);
            let handler = Arc::clone(&self.handler);

            tokio::spawn(async move {
                if let Some(reply) = handler.handle(&datagram).await {
                    if let Err(e) = socket.send_to(&reply, peer).await {
                        warn!(peer = %peer, error = %e, "failed to send reply");
                    }
                }
            });
        }
    }
}
