use cinder_dns_application::{ProxyError, UpstreamExchange};
use cinder_dns_domain::{Message, Question, RecordClass, RecordType};
use cinder_dns_infrastructure::UdpUpstream;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;

fn query_bytes(id: u16) -> Vec<u8> {
    Message::query(
        id,
        vec![Question::new("example.com", RecordType::A, RecordClass::In)],
    )
    .to_bytes()
    .unwrap()
}

/// Binds a stub resolver on localhost and answers each query by echoing
/// it back with the QR bit set, optionally preceded by decoys with a
/// corrupted transaction id.
async fn spawn_stub_resolver(decoys_before_reply: usize) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    tokio::spawn(async move {
        let mut buf = vec![0u8; 4096];
        loop {
            let (len, peer) = socket.recv_from(&mut buf).await.unwrap();
            let mut reply = buf[..len].to_vec();
            reply[2] |= 0x80;

            for _ in 0..decoys_before_reply {
                let mut decoy = reply.clone();
                decoy[0] ^= 0xFF;
                decoy[1] ^= 0xFF;
                socket.send_to(&decoy, peer).await.unwrap();
            }
            socket.send_to(&reply, peer).await.unwrap();
        }
    });

    addr
}

#[tokio::test]
async fn test_exchange_returns_reply_with_matching_id() {
    let addr = spawn_stub_resolver(0).await;
    let upstream = UdpUpstream::new(addr, Duration::from_secs(2));

    let reply = upstream.exchange(&query_bytes(0x4242)).await.unwrap();
    assert_eq!(u16::from_be_bytes([reply[0], reply[1]]), 0x4242);
    assert_ne!(reply[2] & 0x80, 0, "QR bit must be set in the reply");
}

#[tokio::test]
async fn test_exchange_discards_mismatched_ids_until_real_reply() {
    let addr = spawn_stub_resolver(3).await;
    let upstream = UdpUpstream::new(addr, Duration::from_secs(2));

    let reply = upstream.exchange(&query_bytes(0x0F0F)).await.unwrap();
    assert_eq!(u16::from_be_bytes([reply[0], reply[1]]), 0x0F0F);
}

#[tokio::test]
async fn test_exchange_times_out_when_upstream_is_silent() {
    // A bound socket that never answers.
    let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = silent.local_addr().unwrap();

    let upstream = UdpUpstream::new(addr, Duration::from_millis(100));
    let err = upstream.exchange(&query_bytes(1)).await.unwrap_err();
    assert!(
        matches!(err, ProxyError::UpstreamTimeout { timeout_ms: 100, .. }),
        "expected timeout, got {err}"
    );
}

#[tokio::test]
async fn test_exchange_keeps_waiting_after_only_decoys() {
    // Stub that sends a single wrong-id datagram and nothing else.
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    tokio::spawn(async move {
        let mut buf = vec![0u8; 4096];
        let (len, peer) = socket.recv_from(&mut buf).await.unwrap();
        let mut decoy = buf[..len].to_vec();
        decoy[0] ^= 0xFF;
        socket.send_to(&decoy, peer).await.unwrap();
    });

    let upstream = UdpUpstream::new(addr, Duration::from_millis(150));
    let err = upstream.exchange(&query_bytes(0xBEEF)).await.unwrap_err();
    assert!(matches!(err, ProxyError::UpstreamTimeout { .. }));
}
