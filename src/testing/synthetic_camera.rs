//! An in-memory machine-vision camera.
//!
//! Implements the full [`CameraDevice`] contract over a GenICam-style
//! feature table and a frame generator thread, with fault-injection knobs
//! for lifecycle tests. Error codes follow the vendor convention of negative
//! integers and are reported verbatim, exactly as a real binding would.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::device::{CameraDevice, DeliveredFrame, DeviceError, DeviceResult, FrameCallback};
use crate::stream::pool::FramePool;
use crate::types::{
    AccessMode, CameraStatus, EnumFeatureInfo, FeatureDataType, FeatureFlags, FeatureInfo,
    FloatFeatureInfo, IntFeatureInfo,
};

/// Error codes reported by the synthetic camera.
pub mod error_codes {
    /// Feature name not present in the feature table.
    pub const NOT_FOUND: i64 = -5;
    /// Feature exists but the operation does not match its access mode.
    pub const INVALID_ACCESS: i64 = -6;
    /// Value outside the feature's bounds or option list.
    pub const INVALID_VALUE: i64 = -7;
    /// Operation does not match the feature's data type.
    pub const WRONG_TYPE: i64 = -8;
    /// Device is busy (acquisition already running).
    pub const BUSY: i64 = -13;
    /// Settings file could not be read, written or parsed.
    pub const IO: i64 = -24;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
enum FeatureValue {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Enum(String),
    Command,
    Raw(Vec<u8>),
}

impl FeatureValue {
    fn data_type(&self) -> FeatureDataType {
        match self {
            FeatureValue::Int(_) => FeatureDataType::Int,
            FeatureValue::Float(_) => FeatureDataType::Float,
            FeatureValue::Str(_) => FeatureDataType::String,
            FeatureValue::Bool(_) => FeatureDataType::Bool,
            FeatureValue::Enum(_) => FeatureDataType::Enum,
            FeatureValue::Command => FeatureDataType::Command,
            FeatureValue::Raw(_) => FeatureDataType::Raw,
        }
    }
}

struct Feature {
    value: FeatureValue,
    category: String,
    display_name: String,
    unit: String,
    writeable: bool,
    polling_time: i64,
    int_bounds: Option<IntFeatureInfo>,
    float_bounds: Option<FloatFeatureInfo>,
    /// Maximum length for string and raw features.
    max_length: u32,
    enum_options: Vec<String>,
    enum_available: Vec<String>,
}

impl Feature {
    fn info(&self, name: &str) -> FeatureInfo {
        FeatureInfo {
            name: name.to_string(),
            category: self.category.clone(),
            display_name: self.display_name.clone(),
            sfnc_namespace: "Standard".to_string(),
            unit: self.unit.clone(),
            data_type: self.value.data_type(),
            flags: FeatureFlags {
                flag_none: false,
                flag_read: true,
                flag_write: self.writeable,
                flag_volatile: self.polling_time > 0,
                flag_modify_write: false,
            },
            polling_time: self.polling_time,
        }
    }
}

struct StreamWorker {
    stop_flag: Arc<AtomicBool>,
    handle: thread::JoinHandle<()>,
    buffer_count: usize,
}

/// Synthetic device with a realistic feature table and frame generator.
pub struct SyntheticCamera {
    device_id: String,
    features: Mutex<BTreeMap<String, Feature>>,
    streaming: AtomicBool,
    worker: Mutex<Option<StreamWorker>>,
    frame_interval: Duration,
    ip_address: Option<String>,
    mac_address: Option<String>,

    // Fault injection and probes for lifecycle tests.
    start_error: Mutex<Option<i64>>,
    sequence_skip: Arc<AtomicI64>,
    started_sessions: AtomicU64,
    stopped_sessions: AtomicU64,
    transitions_in_flight: AtomicUsize,
    max_transition_overlap: AtomicUsize,
    transition_delay: Duration,
}

impl SyntheticCamera {
    pub fn new(device_id: impl Into<String>) -> Arc<Self> {
        Self::builder(device_id).build()
    }

    /// Builder-style constructor for tests that need custom pacing or
    /// network identity.
    pub fn builder(device_id: impl Into<String>) -> SyntheticCameraBuilder {
        SyntheticCameraBuilder {
            device_id: device_id.into(),
            frame_interval: Duration::from_millis(5),
            ip_address: None,
            mac_address: None,
            transition_delay: Duration::ZERO,
        }
    }

    /// Make the next `start_streaming` call fail with `code`.
    pub fn inject_start_error(&self, code: i64) {
        *self.start_error.lock().expect("lock poisoned") = Some(code);
    }

    /// Skip `count` sequence ids before the next generated frame, producing
    /// a delivery gap.
    pub fn skip_frames(&self, count: i64) {
        self.sequence_skip.fetch_add(count, Ordering::Relaxed);
    }

    /// Number of acquisition sessions successfully started.
    pub fn started_sessions(&self) -> u64 {
        self.started_sessions.load(Ordering::Relaxed)
    }

    /// Number of acquisition sessions stopped.
    pub fn stopped_sessions(&self) -> u64 {
        self.stopped_sessions.load(Ordering::Relaxed)
    }

    /// Buffer count of the active session, if streaming.
    pub fn streaming_buffer_count(&self) -> Option<usize> {
        self.worker
            .lock()
            .expect("lock poisoned")
            .as_ref()
            .map(|w| w.buffer_count)
    }

    /// Highest number of stream transitions ever observed in flight at once.
    /// The lifecycle contract keeps this at 1.
    pub fn max_transition_overlap(&self) -> usize {
        self.max_transition_overlap.load(Ordering::Relaxed)
    }

    fn enter_transition(&self) -> TransitionGuard<'_> {
        let now = self.transitions_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_transition_overlap.fetch_max(now, Ordering::SeqCst);
        if !self.transition_delay.is_zero() {
            thread::sleep(self.transition_delay);
        }
        TransitionGuard { camera: self }
    }

    fn with_feature<T>(
        &self,
        name: &str,
        f: impl FnOnce(&Feature) -> DeviceResult<T>,
    ) -> DeviceResult<T> {
        let features = self.features.lock().expect("lock poisoned");
        let feature = features
            .get(name)
            .ok_or(DeviceError::new(error_codes::NOT_FOUND))?;
        f(feature)
    }

    fn with_feature_mut<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Feature) -> DeviceResult<T>,
    ) -> DeviceResult<T> {
        let mut features = self.features.lock().expect("lock poisoned");
        let feature = features
            .get_mut(name)
            .ok_or(DeviceError::new(error_codes::NOT_FOUND))?;
        if !feature.writeable {
            return Err(DeviceError::new(error_codes::INVALID_ACCESS));
        }
        f(feature)
    }

    fn int_feature(&self, name: &str) -> DeviceResult<i64> {
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Int(v) => Ok(*v),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn frame_geometry(&self) -> (u32, u32, String) {
        let width = self.int_feature("Width").unwrap_or(640) as u32;
        let height = self.int_feature("Height").unwrap_or(480) as u32;
        let format = self
            .with_feature("PixelFormat", |f| match &f.value {
                FeatureValue::Enum(v) => Ok(v.clone()),
                _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
            })
            .unwrap_or_else(|_| "Mono8".to_string());
        (width, height, format)
    }
}

struct TransitionGuard<'a> {
    camera: &'a SyntheticCamera,
}

impl Drop for TransitionGuard<'_> {
    fn drop(&mut self) {
        self.camera
            .transitions_in_flight
            .fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct SyntheticCameraBuilder {
    device_id: String,
    frame_interval: Duration,
    ip_address: Option<String>,
    mac_address: Option<String>,
    transition_delay: Duration,
}

impl SyntheticCameraBuilder {
    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn network_identity(mut self, ip: impl Into<String>, mac: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self.mac_address = Some(mac.into());
        self
    }

    /// Hold start/stop transitions open for `delay`, widening any window in
    /// which unserialized transitions could overlap.
    pub fn transition_delay(mut self, delay: Duration) -> Self {
        self.transition_delay = delay;
        self
    }

    pub fn build(self) -> Arc<SyntheticCamera> {
        Arc::new(SyntheticCamera {
            device_id: self.device_id,
            features: Mutex::new(seed_features()),
            streaming: AtomicBool::new(false),
            worker: Mutex::new(None),
            frame_interval: self.frame_interval,
            ip_address: self.ip_address,
            mac_address: self.mac_address,
            start_error: Mutex::new(None),
            sequence_skip: Arc::new(AtomicI64::new(0)),
            started_sessions: AtomicU64::new(0),
            stopped_sessions: AtomicU64::new(0),
            transitions_in_flight: AtomicUsize::new(0),
            max_transition_overlap: AtomicUsize::new(0),
            transition_delay: self.transition_delay,
        })
    }
}

impl CameraDevice for SyntheticCamera {
    fn device_id(&self) -> String {
        self.device_id.clone()
    }

    fn is_streaming(&self) -> bool {
        self.streaming.load(Ordering::Acquire)
    }

    fn feature_int_get(&self, name: &str) -> DeviceResult<i64> {
        self.int_feature(name)
    }

    fn feature_int_set(&self, name: &str, value: i64) -> DeviceResult<()> {
        self.with_feature_mut(name, |f| match (&mut f.value, f.int_bounds) {
            (FeatureValue::Int(v), bounds) => {
                if let Some(b) = bounds {
                    if value < b.min || value > b.max || (value - b.min) % b.inc != 0 {
                        return Err(DeviceError::new(error_codes::INVALID_VALUE));
                    }
                }
                *v = value;
                Ok(())
            }
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_int_info_get(&self, name: &str) -> DeviceResult<IntFeatureInfo> {
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Int(_) => f
                .int_bounds
                .ok_or(DeviceError::new(error_codes::INVALID_ACCESS)),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_float_get(&self, name: &str) -> DeviceResult<f64> {
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Float(v) => Ok(*v),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_float_set(&self, name: &str, value: f64) -> DeviceResult<()> {
        self.with_feature_mut(name, |f| match (&mut f.value, f.float_bounds) {
            (FeatureValue::Float(v), bounds) => {
                if let Some(b) = bounds {
                    if value < b.min || value > b.max {
                        return Err(DeviceError::new(error_codes::INVALID_VALUE));
                    }
                }
                *v = value;
                Ok(())
            }
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_float_info_get(&self, name: &str) -> DeviceResult<FloatFeatureInfo> {
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Float(_) => f
                .float_bounds
                .ok_or(DeviceError::new(error_codes::INVALID_ACCESS)),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_string_get(&self, name: &str) -> DeviceResult<String> {
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Str(v) => Ok(v.clone()),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_string_set(&self, name: &str, value: &str) -> DeviceResult<()> {
        self.with_feature_mut(name, |f| match &mut f.value {
            FeatureValue::Str(v) => {
                if value.len() as u32 > f.max_length {
                    return Err(DeviceError::new(error_codes::INVALID_VALUE));
                }
                *v = value.to_string();
                Ok(())
            }
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_string_info_get(&self, name: &str) -> DeviceResult<u32> {
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Str(_) => Ok(f.max_length),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_bool_get(&self, name: &str) -> DeviceResult<bool> {
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Bool(v) => Ok(*v),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_bool_set(&self, name: &str, value: bool) -> DeviceResult<()> {
        self.with_feature_mut(name, |f| match &mut f.value {
            FeatureValue::Bool(v) => {
                *v = value;
                Ok(())
            }
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_command_run(&self, name: &str) -> DeviceResult<()> {
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Command => Ok(()),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_command_is_done(&self, name: &str) -> DeviceResult<bool> {
        // Synthetic commands complete instantly.
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Command => Ok(true),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_enum_get(&self, name: &str) -> DeviceResult<String> {
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Enum(v) => Ok(v.clone()),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_enum_set(&self, name: &str, value: &str) -> DeviceResult<()> {
        self.with_feature_mut(name, |f| match &mut f.value {
            FeatureValue::Enum(v) => {
                if !f.enum_available.iter().any(|o| o == value) {
                    return Err(DeviceError::new(error_codes::INVALID_VALUE));
                }
                *v = value.to_string();
                Ok(())
            }
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_enum_info_get(&self, name: &str) -> DeviceResult<EnumFeatureInfo> {
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Enum(_) => Ok(EnumFeatureInfo {
                possible_values: f.enum_options.clone(),
                available_values: f.enum_available.clone(),
            }),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_enum_as_int_get(&self, name: &str, option: &str) -> DeviceResult<i64> {
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Enum(_) => f
                .enum_options
                .iter()
                .position(|o| o == option)
                .map(|i| i as i64)
                .ok_or(DeviceError::new(error_codes::INVALID_VALUE)),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_enum_as_string_get(&self, name: &str, value: i64) -> DeviceResult<String> {
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Enum(_) => f
                .enum_options
                .get(usize::try_from(value).map_err(|_| {
                    DeviceError::new(error_codes::INVALID_VALUE)
                })?)
                .cloned()
                .ok_or(DeviceError::new(error_codes::INVALID_VALUE)),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_raw_get(&self, name: &str) -> DeviceResult<Vec<u8>> {
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Raw(v) => Ok(v.clone()),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_raw_set(&self, name: &str, buffer: &[u8]) -> DeviceResult<()> {
        self.with_feature_mut(name, |f| match &mut f.value {
            FeatureValue::Raw(v) => {
                if buffer.len() as u32 > f.max_length {
                    return Err(DeviceError::new(error_codes::INVALID_VALUE));
                }
                *v = buffer.to_vec();
                Ok(())
            }
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_raw_info_get(&self, name: &str) -> DeviceResult<u32> {
        self.with_feature(name, |f| match &f.value {
            FeatureValue::Raw(_) => Ok(f.max_length),
            _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
        })
    }

    fn feature_access_mode_get(&self, name: &str) -> DeviceResult<AccessMode> {
        self.with_feature(name, |f| {
            Ok(AccessMode {
                is_readable: true,
                is_writeable: f.writeable,
            })
        })
    }

    fn feature_info_query(&self, names: &[String]) -> DeviceResult<Vec<FeatureInfo>> {
        let features = self.features.lock().expect("lock poisoned");
        names
            .iter()
            .map(|name| {
                features
                    .get(name)
                    .map(|f| f.info(name))
                    .ok_or(DeviceError::new(error_codes::NOT_FOUND))
            })
            .collect()
    }

    fn features_list_get(&self) -> DeviceResult<Vec<String>> {
        let features = self.features.lock().expect("lock poisoned");
        Ok(features.keys().cloned().collect())
    }

    fn settings_save(&self, path: &Path) -> DeviceResult<()> {
        let values: BTreeMap<String, FeatureValue> = {
            let features = self.features.lock().expect("lock poisoned");
            features
                .iter()
                .map(|(name, f)| (name.clone(), f.value.clone()))
                .collect()
        };

        let json = serde_json::to_string_pretty(&values)
            .map_err(|_| DeviceError::new(error_codes::IO))?;
        fs::write(path, json).map_err(|_| DeviceError::new(error_codes::IO))
    }

    fn settings_load(&self, path: &Path) -> DeviceResult<()> {
        let content = fs::read_to_string(path).map_err(|_| DeviceError::new(error_codes::IO))?;
        let values: BTreeMap<String, FeatureValue> =
            serde_json::from_str(&content).map_err(|_| DeviceError::new(error_codes::IO))?;

        let mut features = self.features.lock().expect("lock poisoned");
        for (name, value) in values {
            if let Some(feature) = features.get_mut(&name) {
                if feature.writeable && feature.value.data_type() == value.data_type() {
                    feature.value = value;
                }
            }
        }
        Ok(())
    }

    fn camera_info_get(&self) -> DeviceResult<CameraStatus> {
        let (width, height, pixel_format) = self.frame_geometry();
        let frame_rate = self
            .with_feature("AcquisitionFrameRate", |f| match &f.value {
                FeatureValue::Float(v) => Ok(*v),
                _ => Err(DeviceError::new(error_codes::WRONG_TYPE)),
            })
            .unwrap_or(0.0);
        let trigger_mode = self.feature_enum_get("TriggerMode").unwrap_or_default();
        let trigger_source = self.feature_enum_get("TriggerSource").unwrap_or_default();
        let device_user_id = self.feature_string_get("DeviceUserID").unwrap_or_default();

        Ok(CameraStatus {
            display_name: format!("Synthetic {}", self.device_id),
            model_name: "GC-1800S".to_string(),
            device_firmware_version: "1.4.2".to_string(),
            device_id: self.device_id.clone(),
            device_user_id,
            device_serial_number: self
                .feature_string_get("DeviceSerialNumber")
                .unwrap_or_default(),
            interface_id: "synthetic-interface-0".to_string(),
            transport_layer_id: "synthetic-tl".to_string(),
            streaming: self.is_streaming(),
            width,
            height,
            frame_rate,
            pixel_format,
            trigger_mode,
            trigger_source,
            ip_address: self.ip_address.clone(),
            mac_address: self.mac_address.clone(),
        })
    }

    fn start_streaming(&self, pool: FramePool, on_frame: FrameCallback) -> DeviceResult<()> {
        let _transition = self.enter_transition();

        if let Some(code) = self.start_error.lock().expect("lock poisoned").take() {
            return Err(DeviceError::new(code));
        }

        let mut worker = self.worker.lock().expect("lock poisoned");
        if worker.is_some() {
            return Err(DeviceError::new(error_codes::BUSY));
        }

        let stop_flag = Arc::new(AtomicBool::new(false));
        let thread_stop = stop_flag.clone();
        let interval = self.frame_interval;
        let (width, height, pixel_format) = self.frame_geometry();
        let skip = self.sequence_skip.clone();
        let buffer_count = pool.buffer_count();

        let handle = thread::Builder::new()
            .name("gencam-synthetic-acquisition".to_string())
            .spawn(move || {
                // Truncated test-pattern payload; callers exercise buffer
                // ownership and ordering, not imaging.
                let frame_size = ((width as usize) * (height as usize)).min(4096);
                let mut sequence: i64 = 0;
                while !thread_stop.load(Ordering::Relaxed) {
                    thread::sleep(interval);
                    sequence += 1 + skip.swap(0, Ordering::Relaxed);

                    // No idle buffer means the hardware drops this frame; the
                    // sequence id still advances, surfacing as a gap.
                    let Some(mut buffer) = pool.acquire() else {
                        continue;
                    };
                    let data = buffer.data_mut();
                    data.clear();
                    data.resize(frame_size, (sequence % 251) as u8);

                    on_frame(DeliveredFrame::new(
                        sequence,
                        Utc::now(),
                        width,
                        height,
                        pixel_format.clone(),
                        buffer,
                    ));
                }
            })
            .map_err(|_| DeviceError::new(error_codes::BUSY))?;

        *worker = Some(StreamWorker {
            stop_flag,
            handle,
            buffer_count,
        });
        self.streaming.store(true, Ordering::Release);
        self.started_sessions.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn stop_streaming(&self) -> DeviceResult<()> {
        let _transition = self.enter_transition();

        let worker = self.worker.lock().expect("lock poisoned").take();
        let Some(worker) = worker else {
            return Ok(());
        };

        worker.stop_flag.store(true, Ordering::Relaxed);
        let _ = worker.handle.join();
        self.streaming.store(false, Ordering::Release);
        self.stopped_sessions.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

fn int_feature(
    value: i64,
    category: &str,
    display_name: &str,
    unit: &str,
    bounds: IntFeatureInfo,
) -> Feature {
    Feature {
        value: FeatureValue::Int(value),
        category: category.to_string(),
        display_name: display_name.to_string(),
        unit: unit.to_string(),
        writeable: true,
        polling_time: 0,
        int_bounds: Some(bounds),
        float_bounds: None,
        max_length: 0,
        enum_options: Vec::new(),
        enum_available: Vec::new(),
    }
}

fn float_feature(
    value: f64,
    category: &str,
    display_name: &str,
    unit: &str,
    bounds: FloatFeatureInfo,
    writeable: bool,
    polling_time: i64,
) -> Feature {
    Feature {
        value: FeatureValue::Float(value),
        category: category.to_string(),
        display_name: display_name.to_string(),
        unit: unit.to_string(),
        writeable,
        polling_time,
        int_bounds: None,
        float_bounds: Some(bounds),
        max_length: 0,
        enum_options: Vec::new(),
        enum_available: Vec::new(),
    }
}

fn string_feature(value: &str, category: &str, display_name: &str, writeable: bool) -> Feature {
    Feature {
        value: FeatureValue::Str(value.to_string()),
        category: category.to_string(),
        display_name: display_name.to_string(),
        unit: String::new(),
        writeable,
        polling_time: 0,
        int_bounds: None,
        float_bounds: None,
        max_length: 64,
        enum_options: Vec::new(),
        enum_available: Vec::new(),
    }
}

fn enum_feature(
    value: &str,
    category: &str,
    display_name: &str,
    options: &[&str],
    available: &[&str],
) -> Feature {
    Feature {
        value: FeatureValue::Enum(value.to_string()),
        category: category.to_string(),
        display_name: display_name.to_string(),
        unit: String::new(),
        writeable: true,
        polling_time: 0,
        int_bounds: None,
        float_bounds: None,
        max_length: 0,
        enum_options: options.iter().map(|s| s.to_string()).collect(),
        enum_available: available.iter().map(|s| s.to_string()).collect(),
    }
}

fn seed_features() -> BTreeMap<String, Feature> {
    let mut features = BTreeMap::new();

    features.insert(
        "Width".to_string(),
        int_feature(
            1920,
            "ImageFormatControl",
            "Width",
            "px",
            IntFeatureInfo {
                min: 64,
                max: 4096,
                inc: 4,
            },
        ),
    );
    features.insert(
        "Height".to_string(),
        int_feature(
            1080,
            "ImageFormatControl",
            "Height",
            "px",
            IntFeatureInfo {
                min: 64,
                max: 3072,
                inc: 2,
            },
        ),
    );
    features.insert(
        "ExposureTime".to_string(),
        float_feature(
            5000.0,
            "AcquisitionControl",
            "Exposure Time",
            "us",
            FloatFeatureInfo {
                min: 10.0,
                max: 10_000_000.0,
                inc: 0.0,
                inc_available: false,
            },
            true,
            0,
        ),
    );
    features.insert(
        "Gain".to_string(),
        float_feature(
            0.0,
            "AnalogControl",
            "Gain",
            "dB",
            FloatFeatureInfo {
                min: 0.0,
                max: 48.0,
                inc: 0.0,
                inc_available: false,
            },
            true,
            0,
        ),
    );
    features.insert(
        "AcquisitionFrameRate".to_string(),
        float_feature(
            30.0,
            "AcquisitionControl",
            "Acquisition Frame Rate",
            "Hz",
            FloatFeatureInfo {
                min: 1.0,
                max: 1000.0,
                inc: 0.0,
                inc_available: false,
            },
            true,
            0,
        ),
    );
    features.insert(
        "DeviceTemperature".to_string(),
        float_feature(
            42.5,
            "DeviceControl",
            "Device Temperature",
            "C",
            FloatFeatureInfo {
                min: -40.0,
                max: 125.0,
                inc: 0.0,
                inc_available: false,
            },
            false,
            1000,
        ),
    );
    features.insert(
        "PixelFormat".to_string(),
        enum_feature(
            "Mono8",
            "ImageFormatControl",
            "Pixel Format",
            &["Mono8", "Mono12", "RGB8"],
            &["Mono8", "RGB8"],
        ),
    );
    features.insert(
        "TriggerMode".to_string(),
        enum_feature(
            "Off",
            "AcquisitionControl",
            "Trigger Mode",
            &["Off", "On"],
            &["Off", "On"],
        ),
    );
    features.insert(
        "TriggerSource".to_string(),
        enum_feature(
            "Software",
            "AcquisitionControl",
            "Trigger Source",
            &["Software", "Line0", "Line1"],
            &["Software", "Line0"],
        ),
    );
    features.insert(
        "DeviceVendorName".to_string(),
        string_feature("Synthetic Vision", "DeviceControl", "Device Vendor Name", false),
    );
    features.insert(
        "DeviceSerialNumber".to_string(),
        string_feature("SV-0042", "DeviceControl", "Device Serial Number", false),
    );
    features.insert(
        "DeviceUserID".to_string(),
        string_feature("", "DeviceControl", "Device User ID", true),
    );
    features.insert(
        "ReverseX".to_string(),
        Feature {
            value: FeatureValue::Bool(false),
            category: "ImageFormatControl".to_string(),
            display_name: "Reverse X".to_string(),
            unit: String::new(),
            writeable: true,
            polling_time: 0,
            int_bounds: None,
            float_bounds: None,
            max_length: 0,
            enum_options: Vec::new(),
            enum_available: Vec::new(),
        },
    );
    features.insert(
        "UserSetSave".to_string(),
        Feature {
            value: FeatureValue::Command,
            category: "UserSetControl".to_string(),
            display_name: "User Set Save".to_string(),
            unit: String::new(),
            writeable: true,
            polling_time: 0,
            int_bounds: None,
            float_bounds: None,
            max_length: 0,
            enum_options: Vec::new(),
            enum_available: Vec::new(),
        },
    );
    features.insert(
        "LUTValueAll".to_string(),
        Feature {
            value: FeatureValue::Raw(vec![0u8; 16]),
            category: "LUTControl".to_string(),
            display_name: "LUT Value All".to_string(),
            unit: String::new(),
            writeable: true,
            polling_time: 0,
            int_bounds: None,
            float_bounds: None,
            max_length: 256,
            enum_options: Vec::new(),
            enum_available: Vec::new(),
        },
    );

    features
}
