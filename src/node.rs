//! Assembly of the camera node: one opened device, the subscriber hub, the
//! stream controller and the graph monitor, torn down in a fixed order.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::config::{GencamConfig, SharedConfig};
use crate::device::CameraDevice;
use crate::errors::CameraError;
use crate::monitor::GraphMonitor;
use crate::stream::{FrameHub, FrameSubscription, StreamController};
use crate::types::CameraStatus;

/// One camera, owned for the process lifetime.
///
/// Concurrency groups live here: feature access goes straight to the device
/// with no locking, stream transitions serialize inside the controller, and
/// settings persistence has its own mutex so save/load never interleave with
/// themselves but stay independent of stream transitions.
pub struct CameraNode {
    device: Arc<dyn CameraDevice>,
    hub: Arc<FrameHub>,
    controller: Arc<StreamController>,
    config: Arc<SharedConfig>,
    monitor: GraphMonitor,
    settings_lock: Mutex<()>,
}

impl CameraNode {
    /// Build the node around an already-opened device.
    ///
    /// Loads the startup settings file if one is configured; a load failure
    /// is logged with the device code and startup continues. Spawning the
    /// graph monitor is the last step, so a half-initialized node never
    /// streams.
    pub fn open(
        config: GencamConfig,
        device: Arc<dyn CameraDevice>,
    ) -> Result<Arc<Self>, CameraError> {
        let config = Arc::new(SharedConfig::new(config)?);

        log::info!("Initializing camera node for device {} ...", device.device_id());

        if let Some(path) = config.settings_file() {
            if let Err(error) = device.settings_load(&path) {
                log::error!(
                    "Loading settings from file {} failed with {}",
                    path.display(),
                    error.code
                );
            }
        }

        let hub = Arc::new(FrameHub::new());
        let controller = Arc::new(StreamController::new(
            device.clone(),
            hub.clone(),
            config.clone(),
        ));
        let monitor = GraphMonitor::spawn(hub.clone(), controller.clone())?;

        log::info!("Initialization done.");

        Ok(Arc::new(Self {
            device,
            hub,
            controller,
            config,
            monitor,
            settings_lock: Mutex::new(()),
        }))
    }

    pub fn device(&self) -> &Arc<dyn CameraDevice> {
        &self.device
    }

    pub fn controller(&self) -> &Arc<StreamController> {
        &self.controller
    }

    pub fn hub(&self) -> &Arc<FrameHub> {
        &self.hub
    }

    /// Subscribe to the live frame stream. The first subscription makes the
    /// graph monitor start streaming; dropping the last one makes it stop.
    pub fn subscribe(&self) -> FrameSubscription {
        self.hub.subscribe()
    }

    pub fn stream_start(&self) -> Result<(), CameraError> {
        self.controller.start()
    }

    pub fn stream_stop(&self) {
        self.controller.stop()
    }

    pub fn is_streaming(&self) -> bool {
        self.device.is_streaming()
    }

    /// Camera identity and live state snapshot.
    pub fn status(&self) -> Result<CameraStatus, CameraError> {
        self.device.camera_info_get().map_err(CameraError::from_device)
    }

    /// Persist the current camera configuration to `path`. Serialized against
    /// other settings operations, independent of stream transitions.
    pub fn settings_save(&self, path: &Path) -> Result<(), CameraError> {
        let _guard = self.settings_lock.lock().expect("lock poisoned");
        self.device
            .settings_save(path)
            .map_err(CameraError::from_device)
    }

    /// Load camera configuration from `path`, under the settings lock.
    pub fn settings_load(&self, path: &Path) -> Result<(), CameraError> {
        let _guard = self.settings_lock.lock().expect("lock poisoned");
        self.device
            .settings_load(path)
            .map_err(CameraError::from_device)
    }

    pub fn config_snapshot(&self) -> GencamConfig {
        self.config.snapshot()
    }

    /// Change the buffer count used by the next stream start. Rejected while
    /// a session is active since its pool size is fixed.
    pub fn set_buffer_count(&self, buffer_count: usize) -> Result<(), CameraError> {
        if self.device.is_streaming() {
            return Err(CameraError::NotSupportedWhileStreaming(
                "Buffer count change not supported while streaming".to_string(),
            ));
        }
        self.config.set_buffer_count(buffer_count)
    }
}

impl Drop for CameraNode {
    fn drop(&mut self) {
        // Teardown order matters: silence the monitor before touching the
        // stream so no automatic transition races the final stop, then
        // release the device last.
        self.monitor.shutdown();
        self.controller.stop();
    }
}
