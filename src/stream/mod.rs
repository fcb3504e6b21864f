//! Streaming lifecycle: buffer pool, frame relay, subscriber hub and the
//! controller that owns every transition between Stopped and Streaming.

pub mod hub;
pub mod pool;
pub mod relay;

pub use hub::{FrameHub, FrameSubscription};
pub use pool::{FramePool, PoolBuffer, RequeueError};
pub use relay::FrameRelay;

use std::sync::{Arc, Mutex};

use crate::config::{SharedConfig, MAX_BUFFER_COUNT, MIN_BUFFER_COUNT};
use crate::device::{CameraDevice, FrameCallback};
use crate::errors::CameraError;

/// The only component allowed to transition the camera's streaming state.
///
/// Observable states are Stopped and Streaming (read back from the device
/// flag); the transient starting/stopping phases live entirely inside the
/// transition lock, which serializes explicit stream requests against the
/// graph monitor's automatic ones. Feature access never takes this lock.
pub struct StreamController {
    device: Arc<dyn CameraDevice>,
    hub: Arc<FrameHub>,
    config: Arc<SharedConfig>,
    transition: Mutex<()>,
    current_relay: Mutex<Option<Arc<FrameRelay>>>,
}

impl StreamController {
    pub fn new(
        device: Arc<dyn CameraDevice>,
        hub: Arc<FrameHub>,
        config: Arc<SharedConfig>,
    ) -> Self {
        Self {
            device,
            hub,
            config,
            transition: Mutex::new(()),
            current_relay: Mutex::new(None),
        }
    }

    /// Start streaming with the configured buffer count.
    ///
    /// On failure the device stays stopped and the freshly allocated pool is
    /// dropped, so no buffers outlive a failed start.
    pub fn start(&self) -> Result<(), CameraError> {
        let _transition = self.transition.lock().expect("lock poisoned");

        if self.device.is_streaming() {
            return Err(CameraError::AlreadyStreaming);
        }

        // Re-checked under the transition lock: a configuration update that
        // raced this start cannot smuggle in an unvalidated count.
        let buffer_count = self.config.buffer_count();
        if !(MIN_BUFFER_COUNT..=MAX_BUFFER_COUNT).contains(&buffer_count) {
            return Err(CameraError::InvalidBufferCount(buffer_count));
        }

        let relay = Arc::new(FrameRelay::new(self.hub.clone()));
        let pool = FramePool::new(buffer_count);

        let callback_relay = relay.clone();
        let callback: FrameCallback = Box::new(move |frame| callback_relay.on_frame(frame));

        self.device
            .start_streaming(pool, callback)
            .map_err(CameraError::from_device)?;

        *self.current_relay.lock().expect("lock poisoned") = Some(relay);
        log::info!("Stream started using {} buffers", buffer_count);
        Ok(())
    }

    /// Stop streaming. Idempotent: stopping an already stopped stream is a
    /// no-op success, so the monitor's auto-stop path is safe to call
    /// redundantly. Device-level stop errors never block the transition.
    pub fn stop(&self) {
        let _transition = self.transition.lock().expect("lock poisoned");

        if !self.device.is_streaming() {
            return;
        }

        if let Err(error) = self.device.stop_streaming() {
            log::warn!("Device stream stop failed with {}", error.code);
        }

        *self.current_relay.lock().expect("lock poisoned") = None;
        log::info!("Stream stopped");
    }

    pub fn is_streaming(&self) -> bool {
        self.device.is_streaming()
    }

    /// Relay of the active session, for sequence diagnostics. `None` while
    /// stopped.
    pub fn relay(&self) -> Option<Arc<FrameRelay>> {
        self.current_relay.lock().expect("lock poisoned").clone()
    }
}
