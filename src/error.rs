//! Error types for TXT to DXF conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Input contains no usable rows (need at least 5 fields per row)")]
    EmptyInput,

    #[error("Invalid mapping choice '{choice}': expected \"1\" or \"2\"")]
    InvalidMappingChoice { choice: String },

    #[error("Invalid column mapping: indices {indices:?} are not a bijection onto 0..=4")]
    InvalidMapping { indices: [usize; 5] },

    #[error("Record {index}: {message}")]
    RecordEmission { index: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
