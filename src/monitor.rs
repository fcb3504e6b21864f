//! Background observer driving automatic stream start/stop from subscriber
//! presence.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::errors::CameraError;
use crate::stream::{FrameHub, StreamController};

/// Bound on how long the loop sleeps before re-checking the stop flag.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Watches the subscriber graph and requests lifecycle transitions whenever
/// the subscriber count crosses zero.
///
/// All transitions go through the [`StreamController`], so they serialize
/// with explicit stream_start/stream_stop requests. The loop is cancelled
/// cooperatively: it observes the stop flag at least once per poll interval
/// and the owning node joins the thread during teardown.
pub struct GraphMonitor {
    stop_flag: Arc<AtomicBool>,
    handle: Mutex<Option<thread::JoinHandle<()>>>,
}

impl GraphMonitor {
    pub fn spawn(
        hub: Arc<FrameHub>,
        controller: Arc<StreamController>,
    ) -> Result<Self, CameraError> {
        let stop_flag = Arc::new(AtomicBool::new(false));

        let flag = stop_flag.clone();
        let handle = thread::Builder::new()
            .name("gencam-graph-monitor".to_string())
            .spawn(move || monitor_loop(hub, controller, flag))
            .map_err(|e| {
                CameraError::InitializationError(format!("Failed to spawn graph monitor: {}", e))
            })?;

        Ok(Self {
            stop_flag,
            handle: Mutex::new(Some(handle)),
        })
    }

    /// Raise the stop flag and join the monitor thread. Safe to call more
    /// than once.
    pub fn shutdown(&self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.lock().expect("lock poisoned").take() {
            let _ = handle.join();
        }
    }
}

fn monitor_loop(hub: Arc<FrameHub>, controller: Arc<StreamController>, stop_flag: Arc<AtomicBool>) {
    while !stop_flag.load(Ordering::Relaxed) {
        thread::sleep(POLL_INTERVAL);

        if !hub.take_graph_change() {
            continue;
        }

        let subscribers = hub.subscriber_count();
        if subscribers > 0 && !controller.is_streaming() {
            log::debug!("First subscriber appeared, starting stream");
            if let Err(error) = controller.start() {
                log::error!("Automatic stream start failed: {}", error);
            }
        } else if subscribers == 0 && controller.is_streaming() {
            log::debug!("Last subscriber left, stopping stream");
            controller.stop();
        }
    }
}
