/// An error type for the calibration module.
#[derive(thiserror::Error, Debug)]
pub enum CalibError {
    /// Error when the calibration file does not exist.
    #[error("Calibration file does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to read the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to parse the FileStorage document.
    #[error("Failed to parse calibration file {path}. {source}")]
    XmlParseError {
        /// The path of the offending file.
        path: std::path::PathBuf,
        /// The underlying deserialization error.
        source: serde_xml_rs::Error,
    },

    /// A matrix node does not have the expected shape.
    #[error("Matrix node {node} has shape {rows}x{cols}, expected {expected}")]
    InvalidMatrixShape {
        /// The name of the matrix node.
        node: &'static str,
        /// The number of rows declared by the node.
        rows: usize,
        /// The number of columns declared by the node.
        cols: usize,
        /// The expected shape.
        expected: &'static str,
    },

    /// A matrix data payload does not match its declared shape.
    #[error("Matrix node {node} declares {expected} values but contains {found}")]
    InvalidDataLength {
        /// The name of the matrix node.
        node: &'static str,
        /// The number of values declared by the shape.
        expected: usize,
        /// The number of values found in the payload.
        found: usize,
    },

    /// A value in a matrix data payload is not numeric.
    #[error("Matrix node {node} contains a non-numeric value: {value}")]
    InvalidDataValue {
        /// The name of the matrix node.
        node: &'static str,
        /// The offending token.
        value: String,
    },
}
