mod common;

use common::{first_a, query, FakeUpstream, Relay};
use ferrous_relay_application::ports::{QueryStatsRecorder, ResponseCachePort};
use hickory_proto::op::ResponseCode;
use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_silent_upstreams_are_skipped() {
    let dead_one = FakeUpstream::start(None).await;
    let dead_two = FakeUpstream::start(None).await;
    let healthy = FakeUpstream::start(Some(Ipv4Addr::new(198, 51, 100, 7))).await;

    let timeout = Duration::from_millis(150);
    let relay = Relay::start(&[dead_one.addr, dead_two.addr, healthy.addr], timeout, 300).await;

    let start = Instant::now();
    let reply = relay.ask(&query(0x3333, "example.com.")).await;
    let elapsed = start.elapsed();

    assert_eq!(reply.id(), 0x3333);
    assert_eq!(first_a(&reply), Some(Ipv4Addr::new(198, 51, 100, 7)));
    assert_eq!(dead_one.received(), 1);
    assert_eq!(dead_two.received(), 1);
    assert_eq!(healthy.received(), 1);
    assert!(elapsed >= timeout * 2);
    assert!(elapsed < timeout * 2 + Duration::from_secs(1));
}

#[tokio::test]
async fn test_all_upstreams_down_is_servfail() {
    let dead_one = FakeUpstream::start(None).await;
    let dead_two = FakeUpstream::start(None).await;

    let relay = Relay::start(
        &[dead_one.addr, dead_two.addr],
        Duration::from_millis(100),
        300,
    )
    .await;

    let reply = relay.ask(&query(0x4444, "example.com.")).await;

    assert_eq!(reply.id(), 0x4444);
    assert_eq!(reply.response_code(), ResponseCode::ServFail);
    assert!(reply.answers().is_empty());
    assert_eq!(reply.queries().len(), 1);
    assert!(relay.cache.is_empty());

    let summary = relay.stats.summary();
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.cache_misses, 1);
    assert_eq!(summary.cache_hits, 0);
}

#[tokio::test]
async fn test_failover_answer_is_cached() {
    let dead = FakeUpstream::start(None).await;
    let healthy = FakeUpstream::start(Some(Ipv4Addr::new(192, 0, 2, 99))).await;

    let relay = Relay::start(&[dead.addr, healthy.addr], Duration::from_millis(100), 300).await;

    relay.ask(&query(1, "example.com.")).await;
    let cached = relay.ask(&query(2, "example.com.")).await;

    assert_eq!(cached.id(), 2);
    assert_eq!(first_a(&cached), Some(Ipv4Addr::new(192, 0, 2, 99)));
    assert_eq!(dead.received(), 1);
    assert_eq!(healthy.received(), 1);
    assert_eq!(relay.stats.summary().cache_hits, 1);
}
