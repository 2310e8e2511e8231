mod common;

use common::{first_a, query, FakeUpstream, Relay};
use ferrous_relay_application::ports::{QueryStatsRecorder, ResponseCachePort};
use ferrous_relay_domain::{CacheKey, QueryClass, Question, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use std::net::Ipv4Addr;
use std::time::Duration;

fn example_key() -> CacheKey {
    CacheKey::from_question(&Question::new("example.com.", RecordType::A, QueryClass::IN))
}

#[tokio::test]
async fn test_miss_then_hit_round_trip() {
    let upstream = FakeUpstream::start(Some(Ipv4Addr::new(93, 184, 216, 34))).await;
    let relay = Relay::start(&[upstream.addr], Duration::from_secs(1), 300).await;

    let first = relay.ask(&query(0x1111, "example.com.")).await;

    assert_eq!(first.id(), 0x1111);
    assert_eq!(first.response_code(), ResponseCode::NoError);
    assert_eq!(first_a(&first), Some(Ipv4Addr::new(93, 184, 216, 34)));
    assert_eq!(upstream.received(), 1);
    assert!(relay.cache.get(&example_key()).is_some());

    let second = relay.ask(&query(0x2222, "example.com.")).await;

    assert_eq!(second.id(), 0x2222);
    assert_eq!(first_a(&second), Some(Ipv4Addr::new(93, 184, 216, 34)));
    assert_eq!(upstream.received(), 1, "second query must not reach upstream");

    let summary = relay.stats.summary();
    assert_eq!(summary.total_queries, 2);
    assert_eq!(summary.cache_hits, 1);
    assert_eq!(summary.cache_misses, 1);
    assert_eq!(summary.errors, 0);
    assert!((summary.hit_rate - 0.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_cached_entry_expires_after_ttl() {
    let upstream = FakeUpstream::start(Some(Ipv4Addr::new(192, 0, 2, 1))).await;
    let relay = Relay::start(&[upstream.addr], Duration::from_secs(1), 1).await;

    relay.ask(&query(1, "example.com.")).await;
    relay.ask(&query(2, "example.com.")).await;
    assert_eq!(upstream.received(), 1);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    relay.ask(&query(3, "example.com.")).await;
    assert_eq!(upstream.received(), 2);
}

#[tokio::test]
async fn test_zero_ttl_disables_caching() {
    let upstream = FakeUpstream::start(Some(Ipv4Addr::new(192, 0, 2, 1))).await;
    let relay = Relay::start(&[upstream.addr], Duration::from_secs(1), 0).await;

    relay.ask(&query(1, "example.com.")).await;
    relay.ask(&query(2, "example.com.")).await;

    assert_eq!(upstream.received(), 2);
    assert!(relay.cache.is_empty());
}

#[tokio::test]
async fn test_nxdomain_is_forwarded_but_never_cached() {
    let upstream =
        FakeUpstream::start_with_rcode(Some(Ipv4Addr::new(192, 0, 2, 1)), ResponseCode::NXDomain)
            .await;
    let relay = Relay::start(&[upstream.addr], Duration::from_secs(1), 300).await;

    let reply = relay.ask(&query(9, "missing.example.")).await;
    assert_eq!(reply.response_code(), ResponseCode::NXDomain);

    relay.ask(&query(10, "missing.example.")).await;
    assert_eq!(upstream.received(), 2);
    assert!(relay.cache.is_empty());
}

#[tokio::test]
async fn test_query_without_question_is_formerr() {
    let upstream = FakeUpstream::start(Some(Ipv4Addr::new(192, 0, 2, 1))).await;
    let relay = Relay::start(&[upstream.addr], Duration::from_secs(1), 300).await;

    let mut empty = Message::new();
    empty
        .set_id(0x0D0D)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);

    let reply = relay.ask(&empty).await;

    assert_eq!(reply.id(), 0x0D0D);
    assert_eq!(reply.response_code(), ResponseCode::FormErr);
    assert_eq!(upstream.received(), 0);
    assert!(relay.cache.is_empty());

    let summary = relay.stats.summary();
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.cache_misses, 1);
}

#[tokio::test]
async fn test_runt_datagram_gets_no_reply() {
    let upstream = FakeUpstream::start(Some(Ipv4Addr::new(192, 0, 2, 1))).await;
    let relay = Relay::start(&[upstream.addr], Duration::from_secs(1), 300).await;

    let reply = relay
        .ask_raw(&[0x00, 0x01, 0x02], Duration::from_millis(200))
        .await;

    assert!(reply.is_none());
    assert_eq!(relay.stats.summary().total_queries, 0);
}

#[tokio::test]
async fn test_concurrent_clients_all_answered() {
    let upstream = FakeUpstream::start(Some(Ipv4Addr::new(192, 0, 2, 44))).await;
    let relay = std::sync::Arc::new(Relay::start(&[upstream.addr], Duration::from_secs(1), 300).await);

    let mut handles = Vec::new();
    for i in 0..20u16 {
        let relay = relay.clone();
        handles.push(tokio::spawn(async move {
            let name = format!("host{}.example.", i % 5);
            let reply = relay.ask(&query(1000 + i, &name)).await;
            assert_eq!(reply.id(), 1000 + i);
            assert_eq!(first_a(&reply), Some(Ipv4Addr::new(192, 0, 2, 44)));
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let summary = relay.stats.summary();
    assert_eq!(summary.total_queries, 20);
    assert_eq!(summary.errors, 0);
    assert!(relay.cache.len() <= 5);
}
