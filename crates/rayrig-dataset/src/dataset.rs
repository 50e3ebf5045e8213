use std::path::PathBuf;

use rayrig_calib::CameraRig;
use rayrig_geometry::{ray_directions, transform_rays};

use crate::batch::RayBatch;
use crate::config::DatasetConfig;
use crate::error::DatasetError;
use crate::filename::camera_index;
use crate::image::load_rgba_premultiplied;

/// A multi-camera capture dataset flattened into per-pixel ray records.
///
/// Construction loads the full rig calibration first, then iterates the
/// selected image files in sorted path order, pairing every pixel with its
/// world-space ray. All state is built once and immutable afterwards.
#[derive(Debug, Clone)]
pub struct RayDataset {
    /// The construction parameters.
    pub config: DatasetConfig,
    /// The per-camera calibrations of the rig.
    pub rig: CameraRig,
    /// The flat ray training records.
    pub rays: RayBatch,
}

impl RayDataset {
    /// Load a capture dataset.
    ///
    /// # Arguments
    ///
    /// * `config` - The construction parameters.
    ///
    /// # Errors
    ///
    /// Fails with a [`DatasetError`] on any missing or malformed calibration
    /// file, a non-conforming image file name, or an unreadable image. An
    /// image directory with zero files is not an error and yields an empty
    /// batch.
    pub fn new(config: DatasetConfig) -> Result<Self, DatasetError> {
        let rig = CameraRig::load(
            &config.root_dir,
            &config.scene,
            config.downsample,
            &config.rig,
        )?;

        let image_paths = list_images(&config)?;
        log::info!("Loading {} {} images ...", image_paths.len(), config.split);

        let mut records = Vec::new();
        for path in &image_paths {
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let index = camera_index(&filename)?;
            let camera = rig
                .camera(index)
                .ok_or_else(|| DatasetError::CameraOutOfRange {
                    camera_id: index + 1,
                    filename: filename.clone(),
                    rig_size: rig.len(),
                })?;

            let directions =
                ray_directions(camera.resolution.height, camera.resolution.width, &camera.k);
            let (origins, world_directions) = transform_rays(&directions, &camera.pose);

            let pixels = load_rgba_premultiplied(path, camera.resolution)?;

            records.reserve(origins.len());
            for ((origin, direction), color) in origins
                .iter()
                .zip(&world_directions)
                .zip(pixels.chunks_exact(4))
            {
                records.push([
                    origin[0] as f32,
                    origin[1] as f32,
                    origin[2] as f32,
                    direction[0] as f32,
                    direction[1] as f32,
                    direction[2] as f32,
                    color[0],
                    color[1],
                    color[2],
                    color[3],
                ]);
            }
        }

        Ok(Self {
            config,
            rig,
            rays: RayBatch::from_records(records),
        })
    }
}

/// Enumerate the image files of a split/scene/take in sorted path order.
///
/// The sort order defines the final ray ordering, so it must be
/// deterministic across runs. A missing directory yields an empty list,
/// matching the semantics of an empty split.
fn list_images(config: &DatasetConfig) -> Result<Vec<PathBuf>, DatasetError> {
    let dir = config
        .root_dir
        .join(&config.split)
        .join(&config.scene)
        .join(&config.take);

    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    Ok(paths)
}
