use serde::{Deserialize, Serialize};
use std::fmt;

use crate::device::DeviceError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CameraError {
    /// Error code reported by the camera binding, forwarded verbatim.
    Device { code: i64 },
    AlreadyStreaming,
    NotSupportedWhileStreaming(String),
    InvalidBufferCount(usize),
    InitializationError(String),
    StreamError(String),
    Internal(String),
}

impl CameraError {
    pub fn from_device(error: DeviceError) -> Self {
        CameraError::Device { code: error.code }
    }

    /// Vendor error code carried by this error, if any.
    pub fn device_code(&self) -> Option<i64> {
        match self {
            CameraError::Device { code } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CameraError::Device { code } => write!(f, "Device error: {}", code),
            CameraError::AlreadyStreaming => write!(f, "Stream error: already streaming"),
            CameraError::NotSupportedWhileStreaming(msg) => {
                write!(f, "Not supported while streaming: {}", msg)
            }
            CameraError::InvalidBufferCount(count) => {
                write!(f, "Invalid buffer count: {} (expected 3..=1000)", count)
            }
            CameraError::InitializationError(msg) => {
                write!(f, "Camera initialization error: {}", msg)
            }
            CameraError::StreamError(msg) => write!(f, "Stream error: {}", msg),
            CameraError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<DeviceError> for CameraError {
    fn from(error: DeviceError) -> Self {
        CameraError::from_device(error)
    }
}
