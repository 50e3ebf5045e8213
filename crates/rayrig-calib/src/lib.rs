#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the calibration module.
pub mod error;

/// OpenCV FileStorage calibration file parsing.
pub mod filestorage;

/// World-to-camera to camera-to-world conversion.
pub mod pose;

/// Camera rig loading and normalization.
pub mod rig;

pub use crate::error::CalibError;
pub use crate::filestorage::{read_extrinsics, read_intrinsics, Extrinsics, Intrinsics};
pub use crate::pose::camera_to_world;
pub use crate::rig::{CameraCalibration, CameraRig, ImageSize, RigProfile, SceneNormalization};
