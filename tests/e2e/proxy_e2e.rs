//! End-to-end tests: a real `UdpServer` wired to a stub resolver, all
//! over loopback UDP sockets.

use cinder_dns_application::{LocalAnswers, ProxyQueryUseCase, UpstreamResolver};
use cinder_dns_domain::config::LocalRecord;
use cinder_dns_domain::{
    Flags, Header, Message, Question, RecordClass, RecordType, ResourceRecord, ResponseCode,
};
use cinder_dns_infrastructure::{UdpServer, UdpUpstream};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;

/// Stub recursive resolver. Answers every A query with 93.184.216.34.
async fn spawn_stub_resolver() -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    tokio::spawn(async move {
        let mut buf = vec![0u8; 4096];
        loop {
            let (len, peer) = socket.recv_from(&mut buf).await.unwrap();
            let query = Message::from_bytes(&buf[..len]).unwrap();

            let answer = ResourceRecord::new(
                query.questions[0].name.clone(),
                RecordType::A,
                RecordClass::In,
                3600,
                vec![93, 184, 216, 34],
            );
            let reply = Message {
                header: Header::new(
                    query.header.id,
                    Flags::reply(query.header.flags, ResponseCode::NoError),
                    1,
                    1,
                    0,
                    0,
                ),
                questions: query.questions,
                answers: vec![answer],
                authorities: vec![],
                additionals: vec![],
            };
            socket.send_to(&reply.to_bytes().unwrap(), peer).await.unwrap();
        }
    });

    addr
}

async fn spawn_proxy(
    upstream: SocketAddr,
    timeout: Duration,
    local_records: Vec<LocalRecord>,
) -> SocketAddr {
    let transport = Arc::new(UdpUpstream::new(upstream, timeout));
    let handler = Arc::new(ProxyQueryUseCase::new(
        UpstreamResolver::new(transport),
        LocalAnswers::new(local_records),
    ));

    let server = UdpServer::bind("127.0.0.1:0".parse().unwrap(), handler)
        .await
        .unwrap();
    let addr = server.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.serve().await;
    });

    addr
}

async fn ask(proxy: SocketAddr, datagram: &[u8]) -> Vec<u8> {
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.send_to(datagram, proxy).await.unwrap();

    let mut buf = vec![0u8; 4096];
    let (len, _) = tokio::time::timeout(Duration::from_secs(5), client.recv_from(&mut buf))
        .await
        .expect("no reply from proxy")
        .unwrap();
    buf.truncate(len);
    buf
}

fn a_query(id: u16, name: &str) -> Vec<u8> {
    Message::query(id, vec![Question::new(name, RecordType::A, RecordClass::In)])
        .to_bytes()
        .unwrap()
}

#[tokio::test]
async fn test_forwarded_query_end_to_end() {
    let upstream = spawn_stub_resolver().await;
    let proxy = spawn_proxy(upstream, Duration::from_secs(2), vec![]).await;

    let reply_bytes = ask(proxy, &a_query(0xABCD, "example.com")).await;
    let reply = Message::from_bytes(&reply_bytes).unwrap();

    assert_eq!(reply.header.id, 0xABCD);
    assert!(reply.header.flags.response);
    assert!(reply.header.flags.recursion_available);
    assert_eq!(reply.header.answer_count, 1);
    assert_eq!(reply.questions[0].name, "example.com");
    assert_eq!(reply.answers[0].data, vec![93, 184, 216, 34]);
    assert_eq!(reply.answers[0].ttl, 3600);
}

#[tokio::test]
async fn test_malformed_query_gets_formerr() {
    let upstream = spawn_stub_resolver().await;
    let proxy = spawn_proxy(upstream, Duration::from_secs(2), vec![]).await;

    // Header claims one question but the body is missing.
    let mut datagram = vec![0u8; 12];
    datagram[0..2].copy_from_slice(&0x5150u16.to_be_bytes());
    datagram[5] = 1;

    let reply = Message::from_bytes(&ask(proxy, &datagram).await).unwrap();
    assert_eq!(reply.header.id, 0x5150);
    assert_eq!(reply.header.flags.response_code, ResponseCode::FormErr);
}

#[tokio::test]
async fn test_dead_upstream_gets_servfail() {
    // Bind an upstream socket that never answers.
    let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let upstream = silent.local_addr().unwrap();
    let proxy = spawn_proxy(upstream, Duration::from_millis(100), vec![]).await;

    let reply = Message::from_bytes(&ask(proxy, &a_query(0x0101, "example.com")).await).unwrap();
    assert_eq!(reply.header.id, 0x0101);
    assert_eq!(reply.header.flags.response_code, ResponseCode::ServFail);
}

#[tokio::test]
async fn test_local_record_served_without_upstream() {
    // Upstream that never answers; the local record must win first.
    let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let upstream = silent.local_addr().unwrap();

    let proxy = spawn_proxy(
        upstream,
        Duration::from_millis(100),
        vec![LocalRecord {
            name: "printer.lan".to_string(),
            address: IpAddr::from_str("10.0.0.9").unwrap(),
            ttl: None,
        }],
    )
    .await;

    let reply = Message::from_bytes(&ask(proxy, &a_query(0x0007, "printer.lan")).await).unwrap();
    assert!(reply.header.flags.authoritative);
    assert_eq!(reply.answers[0].data, vec![10, 0, 0, 9]);
}

#[tokio::test]
async fn test_concurrent_clients_get_their_own_answers() {
    let upstream = spawn_stub_resolver().await;
    let proxy = spawn_proxy(upstream, Duration::from_secs(2), vec![]).await;

    let mut tasks = Vec::new();
    for i in 0..20u16 {
        tasks.push(tokio::spawn(async move {
            let name = format!("host{i}.example.com");
            let reply = Message::from_bytes(&ask(proxy, &a_query(i, &name)).await).unwrap();
            assert_eq!(reply.header.id, i);
            assert_eq!(reply.questions[0].name, name);
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }
}
