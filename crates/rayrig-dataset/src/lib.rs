#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Flat per-pixel ray record batches.
pub mod batch;

/// Dataset construction parameters.
pub mod config;

/// Dataset loading and ray assembly.
pub mod dataset;

/// Error types for the dataset module.
pub mod error;

/// Camera id extraction from capture file names.
pub mod filename;

/// Image decoding, premultiplication and resizing.
mod image;

pub use crate::batch::{RayBatch, RAY_RECORD_WIDTH};
pub use crate::config::DatasetConfig;
pub use crate::dataset::RayDataset;
pub use crate::error::DatasetError;
pub use crate::filename::camera_index;
