#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Camera pose representation.
pub mod pose;

/// Per-pixel ray generation.
pub mod ray;

pub use crate::pose::Pose;
pub use crate::ray::{ray_directions, rotate_vectors, transform_rays};
