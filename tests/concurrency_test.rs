//! Concurrency-group guarantees: stream transitions serialize, feature
//! access does not wait for them, settings persistence is independent.

use std::sync::Arc;
use std::time::{Duration, Instant};

use gencam::config::GencamConfig;
use gencam::device::CameraDevice;
use gencam::node::CameraNode;
use gencam::testing::SyntheticCamera;

fn open_slow_node(delay: Duration) -> (Arc<CameraNode>, Arc<SyntheticCamera>) {
    let camera = SyntheticCamera::builder("concurrency-cam")
        .transition_delay(delay)
        .build();
    let config = GencamConfig::new("concurrency-cam").with_buffer_count(4);
    let node = CameraNode::open(config, camera.clone()).expect("node open");
    (node, camera)
}

#[test]
fn concurrent_start_and_stop_requests_never_overlap() {
    let (node, camera) = open_slow_node(Duration::from_millis(10));

    let mut workers = Vec::new();
    for worker in 0..4 {
        let node = node.clone();
        workers.push(std::thread::spawn(move || {
            for round in 0..10 {
                if (worker + round) % 2 == 0 {
                    let _ = node.stream_start();
                } else {
                    node.stream_stop();
                }
            }
        }));
    }
    // Churn the subscriber graph at the same time so the monitor's automatic
    // transitions contend with the explicit ones.
    {
        let node = node.clone();
        workers.push(std::thread::spawn(move || {
            for _ in 0..10 {
                let sub = node.subscribe();
                std::thread::sleep(Duration::from_millis(20));
                drop(sub);
                std::thread::sleep(Duration::from_millis(20));
            }
        }));
    }

    for worker in workers {
        worker.join().expect("worker panicked");
    }

    assert_eq!(
        camera.max_transition_overlap(),
        1,
        "a start and a stop executed simultaneously"
    );
}

#[test]
fn feature_access_does_not_wait_for_stream_transitions() {
    let (node, _camera) = open_slow_node(Duration::from_millis(500));

    // Hold a slow transition open in the background.
    let transition = {
        let node = node.clone();
        std::thread::spawn(move || {
            let _ = node.stream_start();
        })
    };
    // Give the transition thread time to take the lock.
    std::thread::sleep(Duration::from_millis(50));

    let begin = Instant::now();
    let width = node.device().feature_int_get("Width").expect("get");
    let elapsed = begin.elapsed();

    assert_eq!(width, 1920);
    assert!(
        elapsed < Duration::from_millis(250),
        "feature access blocked behind a stream transition ({:?})",
        elapsed
    );

    transition.join().expect("transition panicked");
}

#[test]
fn concurrent_feature_access_on_disjoint_features_all_succeed() {
    let (node, _camera) = open_slow_node(Duration::ZERO);

    let names = ["Width", "Height", "ExposureTime", "Gain", "PixelFormat"];
    let mut workers = Vec::new();
    for name in names {
        let node = node.clone();
        workers.push(std::thread::spawn(move || {
            for _ in 0..50 {
                match name {
                    "ExposureTime" | "Gain" => {
                        node.device().feature_float_get(name).expect("float get");
                    }
                    "PixelFormat" => {
                        node.device().feature_enum_get(name).expect("enum get");
                    }
                    _ => {
                        node.device().feature_int_get(name).expect("int get");
                    }
                }
            }
        }));
    }

    for worker in workers {
        worker.join().expect("worker panicked");
    }
}

#[test]
fn settings_persistence_is_independent_of_streaming() {
    let (node, camera) = open_slow_node(Duration::ZERO);
    let dir = tempfile::tempdir().expect("tempdir");

    node.stream_start().expect("start");

    // Save and reload while the stream is live; neither disturbs it.
    let path = dir.path().join("live.settings");
    node.settings_save(&path).expect("save");
    node.settings_load(&path).expect("load");

    assert!(camera.is_streaming());

    // Saves from several threads serialize on the settings lock; every file
    // comes out whole.
    let mut workers = Vec::new();
    for i in 0..4 {
        let node = node.clone();
        let path = dir.path().join(format!("settings-{}.json", i));
        workers.push(std::thread::spawn(move || {
            for _ in 0..10 {
                node.settings_save(&path).expect("save");
                node.settings_load(&path).expect("load");
            }
        }));
    }
    for worker in workers {
        worker.join().expect("worker panicked");
    }

    assert!(camera.is_streaming());
}
