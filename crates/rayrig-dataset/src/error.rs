use rayrig_calib::CalibError;

/// An error type for the dataset module.
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    /// Error while loading the rig calibration.
    #[error(transparent)]
    Calibration(#[from] CalibError),

    /// Error to manipulate a file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// The image file name is too short to carry a camera id.
    #[error("Image file name is too short to carry a camera id: {0}")]
    FilenameTooShort(String),

    /// The image file name does not encode a numeric camera id.
    #[error("Image file name does not encode a numeric camera id: {0}")]
    FilenameNotNumeric(String),

    /// The camera number in the file name is zero, but ids are 1-based.
    #[error("Camera number in file name {0} must be 1-based")]
    CameraNumberZero(String),

    /// The camera id in the file name is outside the rig.
    #[error("Camera id {camera_id} in file name {filename} is outside the rig of size {rig_size}")]
    CameraOutOfRange {
        /// The 1-based camera id found in the file name.
        camera_id: usize,
        /// The offending file name.
        filename: String,
        /// The number of cameras in the rig.
        rig_size: usize,
    },

    /// Error to decode the image.
    #[error("Failed to decode the image {path}. {source}")]
    ImageDecodeError {
        /// The path of the offending image.
        path: std::path::PathBuf,
        /// The underlying decode error.
        source: image::ImageError,
    },

    /// Error to prepare an image buffer for resizing.
    #[error("Failed to prepare the image buffer for resizing. {0}")]
    ImageBufferError(#[from] fast_image_resize::ImageBufferError),

    /// Error to resize the image.
    #[error("Failed to resize the image. {0}")]
    ImageResizeError(#[from] fast_image_resize::ResizeError),
}
