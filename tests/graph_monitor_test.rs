//! Subscriber-driven automatic stream start/stop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use gencam::config::GencamConfig;
use gencam::device::CameraDevice;
use gencam::node::CameraNode;
use gencam::testing::SyntheticCamera;

fn open_node() -> (Arc<CameraNode>, Arc<SyntheticCamera>) {
    let camera = SyntheticCamera::new("monitor-cam");
    let config = GencamConfig::new("monitor-cam").with_buffer_count(4);
    let node = CameraNode::open(config, camera.clone()).expect("node open");
    (node, camera)
}

fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    condition()
}

/// Several monitor poll cycles; long enough to observe absence of action.
const SETTLE: Duration = Duration::from_millis(300);

#[test]
fn first_subscriber_starts_the_stream_exactly_once() {
    let (node, camera) = open_node();

    let subscription = node.subscribe();
    assert!(wait_until(Duration::from_secs(1), || camera.is_streaming()));
    assert_eq!(camera.started_sessions(), 1);
    assert_eq!(camera.streaming_buffer_count(), Some(4));

    // Nothing further happens while the subscriber stays.
    std::thread::sleep(SETTLE);
    assert_eq!(camera.started_sessions(), 1);

    drop(subscription);
    assert!(wait_until(Duration::from_secs(1), || !camera.is_streaming()));
    assert_eq!(camera.stopped_sessions(), 1);

    // And nothing further after the stop either.
    std::thread::sleep(SETTLE);
    assert_eq!(camera.stopped_sessions(), 1);
}

#[test]
fn additional_subscribers_do_not_restart_the_stream() {
    let (node, camera) = open_node();

    let first = node.subscribe();
    assert!(wait_until(Duration::from_secs(1), || camera.is_streaming()));

    let second = node.subscribe();
    std::thread::sleep(SETTLE);
    assert_eq!(camera.started_sessions(), 1);

    drop(first);
    std::thread::sleep(SETTLE);
    assert!(camera.is_streaming(), "one subscriber left, keep streaming");
    assert_eq!(camera.stopped_sessions(), 0);

    drop(second);
    assert!(wait_until(Duration::from_secs(1), || !camera.is_streaming()));
    assert_eq!(camera.stopped_sessions(), 1);
}

#[test]
fn subscribe_unsubscribe_within_one_poll_is_a_no_op() {
    let (node, camera) = open_node();

    // Created and dropped before the monitor can possibly act on both
    // observations; whatever it sees must leave the stream stopped.
    drop(node.subscribe());

    std::thread::sleep(SETTLE);
    assert!(!camera.is_streaming());
    assert_eq!(camera.started_sessions(), camera.stopped_sessions());
}

#[tokio::test]
async fn subscriber_receives_frames_from_auto_started_stream() {
    let (node, camera) = open_node();

    let mut subscription = node.subscribe();
    let frame = tokio::time::timeout(Duration::from_secs(2), subscription.recv())
        .await
        .expect("frame before timeout")
        .expect("hub alive");

    assert!(camera.is_streaming());
    assert_eq!(frame.width, 1920);
    assert_eq!(frame.height, 1080);
    assert_eq!(frame.pixel_format, "Mono8");
}

#[test]
fn monitor_survives_failed_automatic_start() {
    let (node, camera) = open_node();

    camera.inject_start_error(-12);
    let first = node.subscribe();
    std::thread::sleep(SETTLE);
    assert!(!camera.is_streaming(), "injected failure keeps stream down");

    // The next graph change retries and succeeds.
    let _second = node.subscribe();
    assert!(wait_until(Duration::from_secs(1), || camera.is_streaming()));
    drop(first);
}
