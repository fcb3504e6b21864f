//! Configuration commands.

use tauri::command;

use crate::commands::node;
use crate::config::GencamConfig;
use crate::errors::CameraError;

/// Snapshot of the node configuration.
#[command]
pub async fn get_config() -> Result<GencamConfig, CameraError> {
    Ok(node()?.config_snapshot())
}

/// Change the buffer count used by the next stream start.
///
/// Rejected while streaming: the active session's pool size is fixed.
#[command]
pub async fn set_buffer_count(buffer_count: usize) -> Result<(), CameraError> {
    let node = node()?;
    match node.set_buffer_count(buffer_count) {
        Ok(()) => {
            log::info!("Buffer count set to {}", buffer_count);
            Ok(())
        }
        Err(e) => {
            log::warn!("Buffer count change rejected: {}", e);
            Err(e)
        }
    }
}
