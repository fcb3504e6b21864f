//! Shared data types for frames, feature metadata and camera status.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A frame as published to subscribers.
///
/// The pixel data is an immutable copy taken before the acquisition buffer is
/// returned to the device, so subscribers never share memory with the
/// hardware buffer ring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    /// Monotonically increasing id assigned by the device per session.
    pub sequence_id: i64,
    pub timestamp: DateTime<Utc>,
    pub width: u32,
    pub height: u32,
    pub pixel_format: String,
    pub data: Bytes,
}

/// Bounds of an integer feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntFeatureInfo {
    pub min: i64,
    pub max: i64,
    pub inc: i64,
}

/// Bounds of a float feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatFeatureInfo {
    pub min: f64,
    pub max: f64,
    pub inc: f64,
    pub inc_available: bool,
}

/// Option lists of an enumeration feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumFeatureInfo {
    /// Every option the feature defines.
    pub possible_values: Vec<String>,
    /// The subset currently selectable.
    pub available_values: Vec<String>,
}

/// Readability/writability of a feature in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessMode {
    pub is_readable: bool,
    pub is_writeable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureDataType {
    Unknown,
    Int,
    Float,
    Enum,
    String,
    Bool,
    Command,
    Raw,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub flag_none: bool,
    pub flag_read: bool,
    pub flag_write: bool,
    pub flag_volatile: bool,
    pub flag_modify_write: bool,
}

/// Static metadata of a single feature, as returned by `feature_info_query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureInfo {
    pub name: String,
    pub category: String,
    pub display_name: String,
    pub sfnc_namespace: String,
    pub unit: String,
    pub data_type: FeatureDataType,
    pub flags: FeatureFlags,
    /// Suggested polling interval in milliseconds, 0 if not applicable.
    pub polling_time: i64,
}

/// Aggregated camera identity and live state, served by the status operation.
///
/// Network identity is only present for devices that report one; absent
/// fields are omitted from the serialized response rather than zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraStatus {
    pub display_name: String,
    pub model_name: String,
    pub device_firmware_version: String,
    pub device_id: String,
    pub device_user_id: String,
    pub device_serial_number: String,
    pub interface_id: String,
    pub transport_layer_id: String,
    pub streaming: bool,
    pub width: u32,
    pub height: u32,
    pub frame_rate: f64,
    pub pixel_format: String,
    pub trigger_mode: String,
    pub trigger_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
}
