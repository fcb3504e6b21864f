//! gencam: machine-vision camera integration for Tauri applications
//!
//! This crate exposes a GenICam-style industrial camera as a set of Tauri
//! commands (feature read/write, settings persistence, status query, stream
//! control) and republishes its live frames to subscribers, starting and
//! stopping the camera stream automatically as subscribers come and go.
//!
//! # Features
//! - Typed feature access (int/float/string/bool/enum/raw/command)
//! - Subscriber-driven automatic stream start/stop
//! - Fixed buffer-pool acquisition with strict ownership handoff
//! - Frame-loss diagnostics from device sequence ids
//! - Concurrent command dispatch: parallel feature access, serialized
//!   stream transitions, serialized settings persistence
//! - Fully synthetic camera backend for offline development and tests
//!
//! # Usage
//! Add this to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! gencam = "0.3"
//! tauri = { version = "2.0", features = ["protocol-asset"] }
//! ```
//!
//! Then in your Tauri app, hand the plugin an opened camera:
//! ```rust,ignore
//! use gencam::config::GencamConfig;
//! use gencam::testing::SyntheticCamera;
//!
//! fn main() {
//!     let camera = SyntheticCamera::new("cam0");
//!     tauri::Builder::default()
//!         .plugin(gencam::init(camera, GencamConfig::new("cam0")))
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
pub mod commands;
pub mod config;
pub mod device;
pub mod errors;
pub mod monitor;
pub mod node;
pub mod stream;
pub mod types;

// Testing utilities - synthetic camera for offline development
pub mod testing;

// Re-exports for convenience
pub use config::GencamConfig;
pub use device::{CameraDevice, DeviceError};
pub use errors::CameraError;
pub use node::CameraNode;
pub use stream::{FrameHub, FrameSubscription, StreamController};
pub use types::{CameraStatus, Frame};

use std::sync::Arc;

use tauri::{
    plugin::{Builder, TauriPlugin},
    Runtime,
};

/// Initialize the gencam plugin around an already-opened camera device.
///
/// The node is built during plugin setup; if that fails (invalid
/// configuration, monitor spawn failure) application startup aborts, since
/// the plugin has no meaning without its camera. A configured settings file
/// is loaded once here; a load failure is logged and startup continues.
pub fn init<R: Runtime>(
    device: Arc<dyn CameraDevice>,
    config: GencamConfig,
) -> TauriPlugin<R> {
    Builder::new("gencam")
        .setup(move |_app, _api| {
            let node = CameraNode::open(config, device)?;
            commands::install_node(node)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Feature access commands
            commands::features::feature_int_get,
            commands::features::feature_int_set,
            commands::features::feature_int_info_get,
            commands::features::feature_float_get,
            commands::features::feature_float_set,
            commands::features::feature_float_info_get,
            commands::features::feature_string_get,
            commands::features::feature_string_set,
            commands::features::feature_string_info_get,
            commands::features::feature_bool_get,
            commands::features::feature_bool_set,
            commands::features::feature_command_run,
            commands::features::feature_command_is_done,
            commands::features::feature_enum_get,
            commands::features::feature_enum_set,
            commands::features::feature_enum_info_get,
            commands::features::feature_enum_as_int_get,
            commands::features::feature_enum_as_string_get,
            commands::features::feature_raw_get,
            commands::features::feature_raw_set,
            commands::features::feature_raw_info_get,
            commands::features::feature_access_mode_get,
            commands::features::feature_info_query,
            commands::features::features_list_get,
            // Settings persistence commands
            commands::settings::settings_save,
            commands::settings::settings_load,
            // Status command
            commands::status::status,
            // Stream commands
            commands::stream::stream_start,
            commands::stream::stream_stop,
            commands::stream::stream_subscribe,
            commands::stream::stream_unsubscribe,
            // Configuration commands
            commands::config::get_config,
            commands::config::set_buffer_count,
        ])
        .build()
}

/// Initialize logging for the camera node
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "gencam=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
