//! Camera status query.

use tauri::command;

use crate::commands::{blocking, node};
use crate::errors::CameraError;
use crate::types::CameraStatus;

/// Aggregated camera identity and live state. Fields the device does not
/// report (network identity on non-GigE cameras) are omitted from the
/// response.
#[command]
pub async fn status() -> Result<CameraStatus, CameraError> {
    let node = node()?;
    blocking(move || node.status()).await
}
