//! txt2dxf - Core library for converting delimited survey point files
//! into layered DXF drawings.
//!
//! The pipeline infers the encoding and delimiter of an untrusted text
//! file, tokenizes it into point rows, applies a column-order mapping,
//! and emits point geometry plus annotation text on fixed layers.
//!
//! # Example
//!
//! ```no_run
//! use txt2dxf::{convert_txt_to_dxf, ColumnMapping};
//! use std::path::Path;
//!
//! let (dxf, report) =
//!     convert_txt_to_dxf(Path::new("points.txt"), &ColumnMapping::standard()).unwrap();
//! println!("{} records, {} fallbacks", report.total(), report.fallbacks());
//! std::fs::write("points.dxf", dxf).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod report;
pub mod session;

// Re-exports for convenience
pub use error::{ConvertError, Result};
pub use generator::generate_dxf;
pub use model::{map_rows, CanonicalRecord, ColumnMapping, RawRow};
pub use parser::Delimiter;
pub use report::{ConversionReport, RecordOutcome};
pub use session::{Session, SessionEvent, SessionReply, SessionState};

use std::path::Path;
use tracing::info;

/// Sniffed and tokenized input, held between the file and mapping steps.
#[derive(Debug)]
pub struct ParsedInput {
    /// Name of the detected (or substituted) character encoding.
    pub encoding: &'static str,
    /// Detected field delimiter.
    pub delimiter: Delimiter,
    /// Qualifying rows in file order.
    pub rows: Vec<RawRow>,
}

impl ParsedInput {
    /// Width of the widest row, reported in the mapping prompt.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }
}

/// Sniff and tokenize a raw input file.
///
/// Encoding is guessed from the first 10 000 bytes, the delimiter from
/// the first non-blank decoded line. Fails with
/// [`ConvertError::EmptyInput`] when no row carries at least five fields.
pub fn parse_input(bytes: &[u8]) -> Result<ParsedInput> {
    let encoding = parser::detect_encoding(bytes);
    let content = parser::decode(bytes, encoding);

    let first_line = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");
    let delimiter = parser::detect_delimiter(first_line);
    info!("detected encoding {}, delimiter {}", encoding.name(), delimiter);

    let rows = parser::read_rows(&content, delimiter)?;
    Ok(ParsedInput {
        encoding: encoding.name(),
        delimiter,
        rows,
    })
}

/// Map tokenized rows under the chosen column mapping and build the DXF
/// document, returning the serialized bytes and the per-record report.
pub fn generate_drawing(
    rows: &[RawRow],
    mapping: &ColumnMapping,
) -> Result<(Vec<u8>, ConversionReport)> {
    let records = map_rows(rows, mapping)?;
    Ok(generate_dxf(&records))
}

/// Convert a delimited text file on disk to DXF bytes.
///
/// This is the full pipeline: sniff, tokenize, map, build, serialize.
pub fn convert_txt_to_dxf(
    input_path: &Path,
    mapping: &ColumnMapping,
) -> Result<(Vec<u8>, ConversionReport)> {
    if !input_path.exists() {
        return Err(ConvertError::FileNotFound {
            path: input_path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(input_path)?;
    let parsed = parse_input(&bytes)?;
    info!("tokenized {} row(s)", parsed.rows.len());
    generate_drawing(&parsed.rows, mapping)
}
