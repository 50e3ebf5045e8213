use crate::error::DatasetError;

/// Byte range of the camera number inside a capture file name.
///
/// The capture tool writes a 1-based, zero-padded 2-digit camera number at
/// characters 9-10 of every image file name. This is a strict positional
/// contract on the naming convention, not general parsing.
const CAMERA_ID_RANGE: std::ops::Range<usize> = 9..11;

/// Extract the 0-based camera index encoded in a capture file name.
///
/// # Arguments
///
/// * `filename` - The image file name (without directories).
///
/// # Returns
///
/// The 0-based index of the camera that captured the image.
///
/// # Errors
///
/// Fails if the file name is shorter than the expected prefix, the camera
/// number is not numeric, or it is zero.
///
/// Example:
///
/// ```
/// use rayrig_dataset::camera_index;
///
/// let index = camera_index("take0000_07_000000.png").unwrap();
/// assert_eq!(index, 6);
/// ```
pub fn camera_index(filename: &str) -> Result<usize, DatasetError> {
    let digits = filename
        .get(CAMERA_ID_RANGE)
        .ok_or_else(|| DatasetError::FilenameTooShort(filename.to_string()))?;

    let camera_number = digits
        .parse::<usize>()
        .map_err(|_| DatasetError::FilenameNotNumeric(filename.to_string()))?;

    camera_number
        .checked_sub(1)
        .ok_or_else(|| DatasetError::CameraNumberZero(filename.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_index() -> Result<(), DatasetError> {
        assert_eq!(camera_index("take0000_07_000000.png")?, 6);
        assert_eq!(camera_index("take0000_92_000000.png")?, 91);
        Ok(())
    }

    #[test]
    fn test_filename_too_short() {
        let result = camera_index("short.png");
        assert!(matches!(result, Err(DatasetError::FilenameTooShort(_))));
    }

    #[test]
    fn test_filename_not_numeric() {
        let result = camera_index("frame_000_xx.png");
        assert!(matches!(result, Err(DatasetError::FilenameNotNumeric(_))));
    }

    #[test]
    fn test_camera_number_zero() {
        let result = camera_index("take0000_00_000000.png");
        assert!(matches!(result, Err(DatasetError::CameraNumberZero(_))));
    }
}
