//! DXF document generation.

mod drawing;
mod dxf;

pub use drawing::{build_drawing, generate_dxf, init_drawing};
pub use dxf::{serialize_drawing, DxfWriter};
