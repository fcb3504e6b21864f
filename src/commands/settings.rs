//! Settings persistence commands.
//!
//! Save and load share one exclusive lock inside the node so they never
//! interleave with each other, while staying independent of stream
//! transitions and feature access.

use std::path::PathBuf;

use tauri::command;

use crate::commands::{blocking, node};
use crate::errors::CameraError;

/// Persist the camera's current configuration to a file on the host.
#[command]
pub async fn settings_save(file_path: String) -> Result<(), CameraError> {
    let node = node()?;
    blocking(move || {
        let path = PathBuf::from(file_path);
        node.settings_save(&path)
    })
    .await
}

/// Load camera configuration from a file on the host.
#[command]
pub async fn settings_load(file_path: String) -> Result<(), CameraError> {
    let node = node()?;
    blocking(move || {
        let path = PathBuf::from(file_path);
        node.settings_load(&path)
    })
    .await
}
