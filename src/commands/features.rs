//! Feature access commands.
//!
//! Uniform pass-through adapters: one device call each, the payload or the
//! device error code forwarded as-is. These run in parallel with everything
//! else, including stream transitions; they never take a lock.

use tauri::command;

use crate::commands::{blocking, node};
use crate::device::CameraDevice;
use crate::errors::CameraError;
use crate::types::{AccessMode, EnumFeatureInfo, FeatureInfo, FloatFeatureInfo, IntFeatureInfo};

#[command]
pub async fn feature_int_get(feature_name: String) -> Result<i64, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_int_get(&feature_name)?)).await
}

#[command]
pub async fn feature_int_set(feature_name: String, value: i64) -> Result<(), CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_int_set(&feature_name, value)?)).await
}

#[command]
pub async fn feature_int_info_get(feature_name: String) -> Result<IntFeatureInfo, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_int_info_get(&feature_name)?)).await
}

#[command]
pub async fn feature_float_get(feature_name: String) -> Result<f64, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_float_get(&feature_name)?)).await
}

#[command]
pub async fn feature_float_set(feature_name: String, value: f64) -> Result<(), CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_float_set(&feature_name, value)?)).await
}

#[command]
pub async fn feature_float_info_get(
    feature_name: String,
) -> Result<FloatFeatureInfo, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_float_info_get(&feature_name)?)).await
}

#[command]
pub async fn feature_string_get(feature_name: String) -> Result<String, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_string_get(&feature_name)?)).await
}

#[command]
pub async fn feature_string_set(feature_name: String, value: String) -> Result<(), CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_string_set(&feature_name, &value)?)).await
}

/// Maximum length accepted by a string feature.
#[command]
pub async fn feature_string_info_get(feature_name: String) -> Result<u32, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_string_info_get(&feature_name)?)).await
}

#[command]
pub async fn feature_bool_get(feature_name: String) -> Result<bool, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_bool_get(&feature_name)?)).await
}

#[command]
pub async fn feature_bool_set(feature_name: String, value: bool) -> Result<(), CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_bool_set(&feature_name, value)?)).await
}

#[command]
pub async fn feature_command_run(feature_name: String) -> Result<(), CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_command_run(&feature_name)?)).await
}

#[command]
pub async fn feature_command_is_done(feature_name: String) -> Result<bool, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_command_is_done(&feature_name)?)).await
}

#[command]
pub async fn feature_enum_get(feature_name: String) -> Result<String, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_enum_get(&feature_name)?)).await
}

#[command]
pub async fn feature_enum_set(feature_name: String, value: String) -> Result<(), CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_enum_set(&feature_name, &value)?)).await
}

#[command]
pub async fn feature_enum_info_get(feature_name: String) -> Result<EnumFeatureInfo, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_enum_info_get(&feature_name)?)).await
}

/// Integer representation of an enum option.
#[command]
pub async fn feature_enum_as_int_get(
    feature_name: String,
    option: String,
) -> Result<i64, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_enum_as_int_get(&feature_name, &option)?)).await
}

/// Option name behind an enum integer value.
#[command]
pub async fn feature_enum_as_string_get(
    feature_name: String,
    value: i64,
) -> Result<String, CameraError> {
    let node = node()?;
    blocking(move || {
        Ok(node
            .device()
            .feature_enum_as_string_get(&feature_name, value)?)
    })
    .await
}

#[command]
pub async fn feature_raw_get(feature_name: String) -> Result<Vec<u8>, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_raw_get(&feature_name)?)).await
}

#[command]
pub async fn feature_raw_set(feature_name: String, buffer: Vec<u8>) -> Result<(), CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_raw_set(&feature_name, &buffer)?)).await
}

/// Maximum register length of a raw feature.
#[command]
pub async fn feature_raw_info_get(feature_name: String) -> Result<u32, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_raw_info_get(&feature_name)?)).await
}

#[command]
pub async fn feature_access_mode_get(feature_name: String) -> Result<AccessMode, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_access_mode_get(&feature_name)?)).await
}

/// Metadata for a list of features in one round trip.
#[command]
pub async fn feature_info_query(
    feature_names: Vec<String>,
) -> Result<Vec<FeatureInfo>, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().feature_info_query(&feature_names)?)).await
}

#[command]
pub async fn features_list_get() -> Result<Vec<String>, CameraError> {
    let node = node()?;
    blocking(move || Ok(node.device().features_list_get()?)).await
}
