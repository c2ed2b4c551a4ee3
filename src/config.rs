//! Fixed constants and placement rules for the converter.

/// Number of bytes sampled from the start of the file for encoding detection.
pub const SNIFF_LEN: usize = 10_000;

/// Minimum non-empty fields a row must carry to qualify as a point record.
pub const MIN_FIELDS: usize = 5;

/// Height of every annotation text entity.
pub const TEXT_HEIGHT: f64 = 0.5;

/// Name of the registered annotation text style.
pub const TEXT_STYLE_NAME: &str = "Simplex";

/// Font file backing the annotation style.
pub const TEXT_STYLE_FONT: &str = "simplex.shx";

/// Layer carrying the point geometry.
pub const LAYER_POINTS: &str = "Points";
/// Layer carrying the code annotations.
pub const LAYER_CODES: &str = "Codes";
/// Layer carrying the point-id annotations.
pub const LAYER_NUMBERS: &str = "Numbers";
/// Layer carrying the elevation annotations.
pub const LAYER_ELEVATIONS: &str = "Elevations";
/// Layer carrying comments and coordinate-parse fallbacks.
pub const LAYER_COMMENTS: &str = "Comments";

/// Layer names with their identifying AutoCAD color indices, in
/// registration order.
pub const LAYER_COLORS: [(&str, i32); 5] = [
    (LAYER_POINTS, 7),
    (LAYER_CODES, 200),
    (LAYER_NUMBERS, 10),
    (LAYER_ELEVATIONS, 34),
    (LAYER_COMMENTS, 250),
];

/// Offset of the point-id annotation relative to the point.
pub const NUMBER_OFFSET: (f64, f64) = (0.5, 1.5);
/// Offset of the code annotation relative to the point.
pub const CODE_OFFSET: (f64, f64) = (0.5, -1.5);
/// Offset of the elevation annotation relative to the point.
pub const ELEVATION_OFFSET: (f64, f64) = (0.5, 0.0);
/// Offset of the comment annotation relative to the point.
pub const COMMENT_OFFSET: (f64, f64) = (0.5, -3.0);

/// Default output filename handed to the session sink.
pub const OUTPUT_NAME: &str = "output.dxf";
