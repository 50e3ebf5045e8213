use std::path::PathBuf;

use rayrig_calib::RigProfile;

/// Construction parameters for a capture dataset.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// The dataset root directory.
    pub root_dir: PathBuf,
    /// Logical partition name, used as a path component and loader label.
    pub split: String,
    /// Scene identifier; also selects the normalization constants.
    pub scene: String,
    /// Take identifier within the scene.
    pub take: String,
    /// Positive scale factor applied to resolution and intrinsics
    /// (1.0 = native resolution).
    pub downsample: f64,
    /// Hardware profile of the capture rig.
    pub rig: RigProfile,
}

impl DatasetConfig {
    /// Create a configuration for the given root, scene and take, with the
    /// "train" split, native resolution and the default rig profile.
    pub fn new(
        root_dir: impl Into<PathBuf>,
        scene: impl Into<String>,
        take: impl Into<String>,
    ) -> Self {
        Self {
            root_dir: root_dir.into(),
            split: "train".to_string(),
            scene: scene.into(),
            take: take.into(),
            downsample: 1.0,
            rig: RigProfile::default(),
        }
    }
}
