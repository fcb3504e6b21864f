//! Node configuration: camera identity, startup settings file and the
//! acquisition buffer count.

use crate::errors::CameraError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

pub const MIN_BUFFER_COUNT: usize = 3;
pub const MAX_BUFFER_COUNT: usize = 1000;
pub const DEFAULT_BUFFER_COUNT: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GencamConfig {
    /// Id of the camera to open. Immutable after startup.
    pub camera_id: String,
    /// Settings file loaded once at startup; a load failure is logged, not
    /// fatal.
    pub settings_file: Option<PathBuf>,
    /// Number of buffers used for streaming, 3..=1000. Mutable only while
    /// not streaming.
    pub buffer_count: usize,
}

impl Default for GencamConfig {
    fn default() -> Self {
        Self {
            camera_id: String::new(),
            settings_file: None,
            buffer_count: DEFAULT_BUFFER_COUNT,
        }
    }
}

impl GencamConfig {
    pub fn new(camera_id: impl Into<String>) -> Self {
        Self {
            camera_id: camera_id.into(),
            ..Self::default()
        }
    }

    pub fn with_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_file = Some(path.into());
        self
    }

    pub fn with_buffer_count(mut self, buffer_count: usize) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CameraError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            CameraError::InitializationError(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: GencamConfig = toml::from_str(&content).map_err(|e| {
            CameraError::InitializationError(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CameraError> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            CameraError::InitializationError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path.as_ref(), content).map_err(|e| {
            CameraError::InitializationError(format!(
                "Failed to write config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }

    pub fn validate(&self) -> Result<(), CameraError> {
        if !(MIN_BUFFER_COUNT..=MAX_BUFFER_COUNT).contains(&self.buffer_count) {
            return Err(CameraError::InvalidBufferCount(self.buffer_count));
        }
        Ok(())
    }
}

/// Live configuration store shared between the command layer and the stream
/// controller. The camera id is fixed at construction; only the buffer count
/// is mutable, and range checking happens here so an invalid value can never
/// be stored.
pub struct SharedConfig {
    inner: RwLock<GencamConfig>,
}

impl SharedConfig {
    pub fn new(config: GencamConfig) -> Result<Self, CameraError> {
        config.validate()?;
        Ok(Self {
            inner: RwLock::new(config),
        })
    }

    pub fn snapshot(&self) -> GencamConfig {
        self.inner.read().expect("lock poisoned").clone()
    }

    pub fn camera_id(&self) -> String {
        self.inner.read().expect("lock poisoned").camera_id.clone()
    }

    pub fn settings_file(&self) -> Option<PathBuf> {
        self.inner.read().expect("lock poisoned").settings_file.clone()
    }

    pub fn buffer_count(&self) -> usize {
        self.inner.read().expect("lock poisoned").buffer_count
    }

    /// Store a new buffer count for the next stream start.
    pub fn set_buffer_count(&self, buffer_count: usize) -> Result<(), CameraError> {
        if !(MIN_BUFFER_COUNT..=MAX_BUFFER_COUNT).contains(&buffer_count) {
            return Err(CameraError::InvalidBufferCount(buffer_count));
        }
        self.inner.write().expect("lock poisoned").buffer_count = buffer_count;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GencamConfig::default();
        assert_eq!(config.buffer_count, DEFAULT_BUFFER_COUNT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn buffer_count_outside_range_is_rejected() {
        for bad in [0, 1, 2, 1001, 50_000] {
            let config = GencamConfig::new("cam0").with_buffer_count(bad);
            assert_eq!(
                config.validate(),
                Err(CameraError::InvalidBufferCount(bad)),
                "buffer_count {} should be rejected",
                bad
            );
        }
        for good in [3, 7, 1000] {
            let config = GencamConfig::new("cam0").with_buffer_count(good);
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn shared_config_rejects_invalid_updates() {
        let shared = SharedConfig::new(GencamConfig::default()).unwrap();
        assert!(shared.set_buffer_count(2).is_err());
        assert_eq!(shared.buffer_count(), DEFAULT_BUFFER_COUNT);

        shared.set_buffer_count(16).unwrap();
        assert_eq!(shared.buffer_count(), 16);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gencam.toml");

        let config = GencamConfig::new("DEV_1AB22C0042")
            .with_settings_file("/etc/gencam/startup.xml")
            .with_buffer_count(12);
        config.save_to_file(&path).unwrap();

        let loaded = GencamConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn loading_missing_config_file_fails() {
        let result = GencamConfig::load_from_file("/nonexistent/gencam.toml");
        assert!(matches!(
            result,
            Err(CameraError::InitializationError(_))
        ));
    }
}
