//! Testing utilities for gencam
//!
//! Provides a fully in-memory synthetic camera implementing the device
//! boundary, so the streaming lifecycle and the command surface can be
//! exercised without hardware.

pub mod synthetic_camera;

pub use synthetic_camera::{error_codes, SyntheticCamera};
