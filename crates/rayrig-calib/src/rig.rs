use std::path::Path;

use rayrig_geometry::Pose;

use crate::error::CalibError;
use crate::filestorage;
use crate::pose;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

/// Hardware profile of a capture rig.
///
/// The rig mixes sensors of two known native resolutions; a camera is
/// classified by comparing its focal length against `focal_threshold`.
/// The threshold is a calibrated constant of the rig hardware, not a
/// general intrinsic-to-resolution inference.
#[derive(Debug, Clone, PartialEq)]
pub struct RigProfile {
    /// Number of cameras in the rig, 1-indexed on disk.
    pub camera_count: usize,
    /// Focal length below which a camera uses the low native resolution.
    pub focal_threshold: f64,
    /// Native resolution of the low-resolution sensors.
    pub low_res: ImageSize,
    /// Native resolution of the high-resolution sensors.
    pub high_res: ImageSize,
}

impl Default for RigProfile {
    fn default() -> Self {
        Self {
            camera_count: 92,
            focal_threshold: 4000.0,
            low_res: ImageSize {
                width: 2592,
                height: 2048,
            },
            high_res: ImageSize {
                width: 4096,
                height: 3072,
            },
        }
    }
}

impl RigProfile {
    /// Classify a camera by its focal length and return its native resolution.
    pub fn native_resolution(&self, fx: f64) -> ImageSize {
        if fx < self.focal_threshold {
            self.low_res
        } else {
            self.high_res
        }
    }
}

/// Normalization constants that re-center a capture volume into the
/// unit-scale convention expected by the downstream renderer.
///
/// The constants are acquisition-specific and must be preserved exactly for
/// compatibility with existing trained checkpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNormalization {
    /// Divisor applied to the pose translation.
    pub translation_divisor: f64,
    /// Offset added to the z component of the translation after scaling.
    pub z_offset: f64,
}

impl SceneNormalization {
    /// The baseline normalization used by most scenes.
    pub const BASELINE: SceneNormalization = SceneNormalization {
        translation_divisor: 2.0,
        z_offset: 0.45,
    };

    /// Look up the normalization constants for a scene identifier.
    pub fn for_scene(scene: &str) -> SceneNormalization {
        match scene {
            "M3_02" => SceneNormalization {
                translation_divisor: 3.3,
                z_offset: 0.45,
            },
            _ => SceneNormalization::BASELINE,
        }
    }

    /// Apply the normalization to a camera-to-world pose.
    pub fn apply(&self, mut pose: Pose) -> Pose {
        for val in &mut pose.translation {
            *val /= self.translation_divisor;
        }
        pose.translation[2] += self.z_offset;
        pose
    }
}

/// The calibration of a single rig camera.
///
/// Computed once when the rig is loaded, immutable thereafter.
#[derive(Debug, Clone)]
pub struct CameraCalibration {
    /// The 3x3 intrinsic matrix, scaled to the canonical resolution.
    pub k: [[f64; 3]; 3],
    /// The distortion coefficients, carried as parsed.
    pub distortion: Vec<f64>,
    /// The canonical image resolution after downsampling.
    pub resolution: ImageSize,
    /// The normalized camera-to-world pose.
    pub pose: Pose,
}

/// An ordered set of camera calibrations, indexed by 0-based camera id.
#[derive(Debug, Clone)]
pub struct CameraRig {
    cameras: Vec<CameraCalibration>,
}

impl CameraRig {
    /// Load the calibration of every rig camera for a scene.
    ///
    /// Reads `<root>/camera_parameters/<scene>/<id>/intrinsic.xml` and
    /// `extrinsics.xml` for each 1-indexed camera id, scales intrinsics and
    /// resolution by `downsample`, and normalizes poses with the scene's
    /// [`SceneNormalization`].
    ///
    /// # Arguments
    ///
    /// * `root_dir` - The dataset root directory.
    /// * `scene` - The scene identifier; selects the calibration
    ///   subdirectory and the normalization constants.
    /// * `downsample` - Positive scale factor applied to resolution and
    ///   intrinsics.
    /// * `profile` - The hardware profile of the rig.
    ///
    /// # Errors
    ///
    /// Fails with a [`CalibError`] if any calibration file is missing or
    /// malformed.
    pub fn load(
        root_dir: impl AsRef<Path>,
        scene: &str,
        downsample: f64,
        profile: &RigProfile,
    ) -> Result<Self, CalibError> {
        let normalization = SceneNormalization::for_scene(scene);
        let scene_dir = root_dir.as_ref().join("camera_parameters").join(scene);

        let mut cameras = Vec::with_capacity(profile.camera_count);
        for cam in 0..profile.camera_count {
            let cam_dir = scene_dir.join((cam + 1).to_string());

            let intrinsics = filestorage::read_intrinsics(cam_dir.join("intrinsic.xml"))?;
            let mut k = intrinsics.k;

            let native = profile.native_resolution(k[0][0]);
            let resolution = ImageSize {
                width: (native.width as f64 * downsample) as usize,
                height: (native.height as f64 * downsample) as usize,
            };

            // the principal point and focal length scale with the image
            // resolution; the homogeneous row does not
            for row in k.iter_mut().take(2) {
                for val in row.iter_mut() {
                    *val *= downsample;
                }
            }

            let extrinsics = filestorage::read_extrinsics(cam_dir.join("extrinsics.xml"))?;
            let camera_pose = normalization.apply(pose::camera_to_world(&extrinsics));

            log::debug!(
                "camera {}: {}x{}",
                cam + 1,
                resolution.width,
                resolution.height
            );

            cameras.push(CameraCalibration {
                k,
                distortion: intrinsics.distortion,
                resolution,
                pose: camera_pose,
            });
        }

        Ok(Self { cameras })
    }

    /// Number of cameras in the rig.
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Whether the rig holds no cameras.
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Look up a camera calibration by its 0-based index.
    pub fn camera(&self, index: usize) -> Option<&CameraCalibration> {
        self.cameras.get(index)
    }

    /// Iterate over the camera calibrations in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, CameraCalibration> {
        self.cameras.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::path::Path;

    fn matrix_xml(node: &str, rows: usize, cols: usize, data: &str) -> String {
        format!(
            "<{node} type_id=\"opencv-matrix\">\n  <rows>{rows}</rows>\n  <cols>{cols}</cols>\n  <dt>d</dt>\n  <data>{data}</data>\n</{node}>\n"
        )
    }

    fn write_camera(scene_dir: &Path, cam_id: usize, fx: f64) {
        let cam_dir = scene_dir.join(cam_id.to_string());
        std::fs::create_dir_all(&cam_dir).unwrap();

        let intrinsic = format!(
            "<?xml version=\"1.0\"?>\n<opencv_storage>\n{}{}</opencv_storage>\n",
            matrix_xml(
                "M",
                3,
                3,
                &format!("{fx} 0. 100. 0. {fx} 50. 0. 0. 1.")
            ),
            matrix_xml("D", 5, 1, "0. 0. 0. 0. 0.")
        );
        std::fs::write(cam_dir.join("intrinsic.xml"), intrinsic).unwrap();

        let extrinsic = format!(
            "<?xml version=\"1.0\"?>\n<opencv_storage>\n{}{}</opencv_storage>\n",
            matrix_xml("R", 3, 3, "1. 0. 0. 0. 1. 0. 0. 0. 1."),
            matrix_xml("T", 3, 1, "0. 0. 0.")
        );
        std::fs::write(cam_dir.join("extrinsics.xml"), extrinsic).unwrap();
    }

    #[test]
    fn test_native_resolution_classification() {
        let profile = RigProfile::default();

        assert_eq!(
            profile.native_resolution(5000.0),
            ImageSize {
                width: 4096,
                height: 3072
            }
        );
        assert_eq!(
            profile.native_resolution(3000.0),
            ImageSize {
                width: 2592,
                height: 2048
            }
        );
    }

    #[test]
    fn test_scene_normalization_constants() {
        assert_eq!(
            SceneNormalization::for_scene("M3_02").translation_divisor,
            3.3
        );
        assert_eq!(SceneNormalization::for_scene("F1_06").translation_divisor, 2.0);
        assert_eq!(SceneNormalization::for_scene("F1_06").z_offset, 0.45);
    }

    #[test]
    fn test_normalization_zero_translation() {
        // division has no effect on a camera at the origin; only the z
        // offset remains
        for scene in ["M3_02", "F1_06"] {
            let pose = SceneNormalization::for_scene(scene).apply(Pose::identity());
            assert_eq!(pose.translation, [0.0, 0.0, 0.45]);
        }
    }

    #[test]
    fn test_load_rig() -> Result<(), CalibError> {
        let dir = tempfile::tempdir()?;
        let scene_dir = dir.path().join("camera_parameters").join("F1_06");
        write_camera(&scene_dir, 1, 5000.0);
        write_camera(&scene_dir, 2, 3000.0);

        let profile = RigProfile {
            camera_count: 2,
            ..RigProfile::default()
        };
        let rig = CameraRig::load(dir.path(), "F1_06", 0.5, &profile)?;

        assert_eq!(rig.len(), 2);

        let high = rig.camera(0).unwrap();
        assert_eq!(
            high.resolution,
            ImageSize {
                width: 2048,
                height: 1536
            }
        );
        assert_relative_eq!(high.k[0][0], 2500.0);
        assert_relative_eq!(high.k[0][2], 50.0);
        // homogeneous row untouched by the downsample factor
        assert_eq!(high.k[2], [0.0, 0.0, 1.0]);
        assert_eq!(high.distortion.len(), 5);

        let low = rig.camera(1).unwrap();
        assert_eq!(
            low.resolution,
            ImageSize {
                width: 1296,
                height: 1024
            }
        );

        for camera in rig.iter() {
            assert_relative_eq!(camera.pose.translation[2], 0.45);
        }
        Ok(())
    }

    #[test]
    fn test_load_rig_missing_camera() {
        let dir = tempfile::tempdir().unwrap();
        let scene_dir = dir.path().join("camera_parameters").join("F1_06");
        write_camera(&scene_dir, 1, 5000.0);

        let profile = RigProfile {
            camera_count: 2,
            ..RigProfile::default()
        };
        let result = CameraRig::load(dir.path(), "F1_06", 1.0, &profile);

        assert!(matches!(result, Err(CalibError::FileDoesNotExist(_))));
    }
}
