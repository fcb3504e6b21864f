//! Boundary to the vendor camera binding.
//!
//! The node does not talk to transport layers or feature marshaling itself;
//! it drives an already-opened device through [`CameraDevice`]. Implementations
//! wrap a vendor SDK (or the synthetic camera in [`crate::testing`]) and must
//! be fully thread-safe: feature access runs concurrently from many request
//! handlers while the acquisition callback fires on a device-owned thread.
//!
//! Every fallible call returns the vendor's error code untouched; the node
//! forwards these codes verbatim and never remaps them.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::stream::pool::{FramePool, PoolBuffer, RequeueError};
use crate::types::{
    AccessMode, CameraStatus, EnumFeatureInfo, FeatureInfo, FloatFeatureInfo, IntFeatureInfo,
};

/// Opaque error code sourced from the camera binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceError {
    pub code: i64,
}

impl DeviceError {
    pub fn new(code: i64) -> Self {
        Self { code }
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "device error code {}", self.code)
    }
}

impl std::error::Error for DeviceError {}

pub type DeviceResult<T> = Result<T, DeviceError>;

/// Callback installed for the duration of a streaming session. Invoked once
/// per frame, on a device-owned thread, in non-decreasing sequence-id order.
pub type FrameCallback = Box<dyn Fn(DeliveredFrame) + Send + Sync>;

/// A filled acquisition buffer on loan from the device.
///
/// The receiver must return the buffer exactly once via [`requeue`]; taking
/// `self` by value makes a double requeue unrepresentable, and the relay is
/// responsible for never dropping a frame without requeueing it.
///
/// [`requeue`]: DeliveredFrame::requeue
pub struct DeliveredFrame {
    sequence_id: i64,
    timestamp: DateTime<Utc>,
    width: u32,
    height: u32,
    pixel_format: String,
    buffer: PoolBuffer,
}

impl DeliveredFrame {
    pub fn new(
        sequence_id: i64,
        timestamp: DateTime<Utc>,
        width: u32,
        height: u32,
        pixel_format: String,
        buffer: PoolBuffer,
    ) -> Self {
        Self {
            sequence_id,
            timestamp,
            width,
            height,
            pixel_format,
            buffer,
        }
    }

    pub fn sequence_id(&self) -> i64 {
        self.sequence_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_format(&self) -> &str {
        &self.pixel_format
    }

    pub fn pixel_data(&self) -> &[u8] {
        self.buffer.data()
    }

    /// Return the underlying buffer to the acquisition ring.
    pub fn requeue(self) -> Result<(), RequeueError> {
        self.buffer.requeue()
    }
}

impl fmt::Debug for DeliveredFrame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DeliveredFrame")
            .field("sequence_id", &self.sequence_id)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixel_format", &self.pixel_format)
            .finish()
    }
}

/// Contract of the opened camera handle.
///
/// Calls are assumed to complete in bounded time; the node imposes no
/// timeouts of its own. `start_streaming` must either begin acquisition and
/// report `is_streaming() == true`, or fail leaving the device exactly as it
/// was (the node drops the buffer pool on failure, completing the rollback).
pub trait CameraDevice: Send + Sync {
    fn device_id(&self) -> String;
    fn is_streaming(&self) -> bool;

    fn feature_int_get(&self, name: &str) -> DeviceResult<i64>;
    fn feature_int_set(&self, name: &str, value: i64) -> DeviceResult<()>;
    fn feature_int_info_get(&self, name: &str) -> DeviceResult<IntFeatureInfo>;

    fn feature_float_get(&self, name: &str) -> DeviceResult<f64>;
    fn feature_float_set(&self, name: &str, value: f64) -> DeviceResult<()>;
    fn feature_float_info_get(&self, name: &str) -> DeviceResult<FloatFeatureInfo>;

    fn feature_string_get(&self, name: &str) -> DeviceResult<String>;
    fn feature_string_set(&self, name: &str, value: &str) -> DeviceResult<()>;
    /// Maximum length accepted by the string feature.
    fn feature_string_info_get(&self, name: &str) -> DeviceResult<u32>;

    fn feature_bool_get(&self, name: &str) -> DeviceResult<bool>;
    fn feature_bool_set(&self, name: &str, value: bool) -> DeviceResult<()>;

    fn feature_command_run(&self, name: &str) -> DeviceResult<()>;
    fn feature_command_is_done(&self, name: &str) -> DeviceResult<bool>;

    fn feature_enum_get(&self, name: &str) -> DeviceResult<String>;
    fn feature_enum_set(&self, name: &str, value: &str) -> DeviceResult<()>;
    fn feature_enum_info_get(&self, name: &str) -> DeviceResult<EnumFeatureInfo>;
    fn feature_enum_as_int_get(&self, name: &str, option: &str) -> DeviceResult<i64>;
    fn feature_enum_as_string_get(&self, name: &str, value: i64) -> DeviceResult<String>;

    fn feature_raw_get(&self, name: &str) -> DeviceResult<Vec<u8>>;
    fn feature_raw_set(&self, name: &str, buffer: &[u8]) -> DeviceResult<()>;
    /// Maximum register length of the raw feature.
    fn feature_raw_info_get(&self, name: &str) -> DeviceResult<u32>;

    fn feature_access_mode_get(&self, name: &str) -> DeviceResult<AccessMode>;
    fn feature_info_query(&self, names: &[String]) -> DeviceResult<Vec<FeatureInfo>>;
    fn features_list_get(&self) -> DeviceResult<Vec<String>>;

    fn settings_save(&self, path: &Path) -> DeviceResult<()>;
    fn settings_load(&self, path: &Path) -> DeviceResult<()>;

    fn camera_info_get(&self) -> DeviceResult<CameraStatus>;

    fn start_streaming(&self, pool: FramePool, on_frame: FrameCallback) -> DeviceResult<()>;
    fn stop_streaming(&self) -> DeviceResult<()>;
}
