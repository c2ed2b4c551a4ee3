//! Data model types for TXT to DXF conversion.

mod drawing;
mod mapping;
mod record;

pub use drawing::{Drawing, Entity, Layer, TextStyle};
pub use mapping::ColumnMapping;
pub use record::{map_row, map_rows, CanonicalRecord, RawRow};
