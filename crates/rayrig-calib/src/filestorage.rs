use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::CalibError;

/// A matrix node of an OpenCV FileStorage document.
///
/// Nodes declare their shape in `rows`/`cols` and carry the values as a
/// whitespace-separated `data` payload, e.g.
///
/// ```xml
/// <M type_id="opencv-matrix">
///   <rows>3</rows>
///   <cols>3</cols>
///   <dt>d</dt>
///   <data>1. 0. 0. 0. 1. 0. 0. 0. 1.</data>
/// </M>
/// ```
#[derive(Debug, Deserialize)]
struct MatrixNode {
    rows: usize,
    cols: usize,
    data: String,
}

impl MatrixNode {
    fn values(&self, node: &'static str) -> Result<Vec<f64>, CalibError> {
        let values = self
            .data
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| CalibError::InvalidDataValue {
                    node,
                    value: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if values.len() != self.rows * self.cols {
            return Err(CalibError::InvalidDataLength {
                node,
                expected: self.rows * self.cols,
                found: values.len(),
            });
        }

        Ok(values)
    }

    fn as_mat3(&self, node: &'static str) -> Result<[[f64; 3]; 3], CalibError> {
        if self.rows != 3 || self.cols != 3 {
            return Err(CalibError::InvalidMatrixShape {
                node,
                rows: self.rows,
                cols: self.cols,
                expected: "3x3",
            });
        }
        let v = self.values(node)?;
        Ok([[v[0], v[1], v[2]], [v[3], v[4], v[5]], [v[6], v[7], v[8]]])
    }

    fn as_vec3(&self, node: &'static str) -> Result<[f64; 3], CalibError> {
        if self.rows * self.cols != 3 {
            return Err(CalibError::InvalidMatrixShape {
                node,
                rows: self.rows,
                cols: self.cols,
                expected: "3x1",
            });
        }
        let v = self.values(node)?;
        Ok([v[0], v[1], v[2]])
    }
}

#[derive(Debug, Deserialize)]
struct IntrinsicDoc {
    #[serde(rename = "M")]
    camera_matrix: MatrixNode,
    #[serde(rename = "D")]
    distortion: MatrixNode,
}

#[derive(Debug, Deserialize)]
struct ExtrinsicDoc {
    #[serde(rename = "R")]
    rotation: MatrixNode,
    #[serde(rename = "T")]
    translation: MatrixNode,
}

/// The intrinsic parameters of a rig camera as found on disk.
#[derive(Debug, Clone)]
pub struct Intrinsics {
    /// The 3x3 intrinsic matrix (focal lengths and principal point).
    pub k: [[f64; 3]; 3],
    /// The distortion coefficients, in the order written by the calibration tool.
    pub distortion: Vec<f64>,
}

/// The extrinsic parameters of a rig camera: the world-to-camera transform.
#[derive(Debug, Clone)]
pub struct Extrinsics {
    /// The rotation matrix of the camera 3x3.
    pub rotation: [[f64; 3]; 3],
    /// The translation vector of the camera 3x1, in meters.
    pub translation: [f64; 3],
}

fn read_document<T: DeserializeOwned>(file_path: &Path) -> Result<T, CalibError> {
    if !file_path.exists() {
        return Err(CalibError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let text = std::fs::read_to_string(file_path)?;
    serde_xml_rs::from_str(&text).map_err(|source| CalibError::XmlParseError {
        path: file_path.to_path_buf(),
        source,
    })
}

/// Read an intrinsic calibration file with named nodes `M` (3x3) and `D`.
///
/// # Arguments
///
/// * `file_path` - The path to the `intrinsic.xml` file.
///
/// # Returns
///
/// The intrinsic matrix and distortion coefficients.
pub fn read_intrinsics(file_path: impl AsRef<Path>) -> Result<Intrinsics, CalibError> {
    let doc: IntrinsicDoc = read_document(file_path.as_ref())?;

    Ok(Intrinsics {
        k: doc.camera_matrix.as_mat3("M")?,
        distortion: doc.distortion.values("D")?,
    })
}

/// Read an extrinsic calibration file with named nodes `R` (3x3) and `T` (3x1).
///
/// # Arguments
///
/// * `file_path` - The path to the `extrinsics.xml` file.
///
/// # Returns
///
/// The world-to-camera rotation and translation.
pub fn read_extrinsics(file_path: impl AsRef<Path>) -> Result<Extrinsics, CalibError> {
    let doc: ExtrinsicDoc = read_document(file_path.as_ref())?;

    Ok(Extrinsics {
        rotation: doc.rotation.as_mat3("R")?,
        translation: doc.translation.as_vec3("T")?,
    })
}
