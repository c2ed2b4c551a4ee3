//! Drawing builder: turns canonical records into a drawing document.
//!
//! Placement rules are fixed (see `config`). A record whose coordinates
//! do not parse produces a single comment-only annotation at the origin;
//! any other per-record failure is logged with the record index and the
//! run continues.

use tracing::{debug, error};

use crate::config::{
    CODE_OFFSET, COMMENT_OFFSET, ELEVATION_OFFSET, LAYER_COLORS, LAYER_CODES, LAYER_COMMENTS,
    LAYER_ELEVATIONS, LAYER_NUMBERS, LAYER_POINTS, NUMBER_OFFSET, TEXT_HEIGHT, TEXT_STYLE_FONT,
    TEXT_STYLE_NAME,
};
use crate::error::{ConvertError, Result};
use crate::generator::dxf::serialize_drawing;
use crate::model::{CanonicalRecord, Drawing, Entity};
use crate::report::{ConversionReport, RecordOutcome};

/// Create a drawing with the five annotation layers and the text style
/// registered.
pub fn init_drawing() -> Drawing {
    let mut drawing = Drawing::new();
    for (name, color) in LAYER_COLORS {
        drawing.upsert_layer(name, color);
    }
    drawing.ensure_style(TEXT_STYLE_NAME, TEXT_STYLE_FONT);
    drawing
}

fn add_text(drawing: &mut Drawing, layer: &'static str, x: f64, y: f64, value: String) {
    drawing.add_entity(Entity::Text {
        layer,
        style: TEXT_STYLE_NAME,
        height: TEXT_HEIGHT,
        x,
        y,
        value,
    });
}

/// Emit one record into the drawing.
///
/// Entities already added are not rolled back on failure; the caller
/// records the outcome and moves on.
fn emit_record(drawing: &mut Drawing, index: usize, record: &CanonicalRecord) -> Result<RecordOutcome> {
    let coords = (
        record.x.parse::<f64>(),
        record.y.parse::<f64>(),
        record.z.parse::<f64>(),
    );

    let (x, y, z) = match coords {
        (Ok(x), Ok(y), Ok(z)) => (x, y, z),
        _ => {
            // Fallback: the whole record becomes one comment at the origin.
            add_text(drawing, LAYER_COMMENTS, 0.0, 0.0, record.joined());
            return Ok(RecordOutcome::FallbackEmitted);
        }
    };

    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return Err(ConvertError::RecordEmission {
            index,
            message: format!("non-finite coordinates ({}, {}, {})", x, y, z),
        });
    }

    drawing.add_entity(Entity::Point {
        layer: LAYER_POINTS,
        x,
        y,
        z,
    });

    add_text(
        drawing,
        LAYER_NUMBERS,
        x + NUMBER_OFFSET.0,
        y + NUMBER_OFFSET.1,
        record.point.clone(),
    );
    add_text(
        drawing,
        LAYER_CODES,
        x + CODE_OFFSET.0,
        y + CODE_OFFSET.1,
        record.code.clone(),
    );
    // The elevation annotation shows the source field as written, not a
    // reformatted float.
    add_text(
        drawing,
        LAYER_ELEVATIONS,
        x + ELEVATION_OFFSET.0,
        y + ELEVATION_OFFSET.1,
        record.z.clone(),
    );

    let comment = record.comment.trim();
    if !comment.is_empty() {
        add_text(
            drawing,
            LAYER_COMMENTS,
            x + COMMENT_OFFSET.0,
            y + COMMENT_OFFSET.1,
            comment.to_string(),
        );
    }

    Ok(RecordOutcome::Success)
}

/// Build the drawing document from the record set.
pub fn build_drawing(records: &[CanonicalRecord]) -> (Drawing, ConversionReport) {
    let mut drawing = init_drawing();
    let mut report = ConversionReport::new();

    for (index, record) in records.iter().enumerate() {
        match emit_record(&mut drawing, index, record) {
            Ok(outcome) => {
                debug!("record {}: {:?}", index, outcome);
                report.record(outcome);
            }
            Err(e) => {
                error!("record {}: {}", index, e);
                report.record(RecordOutcome::Skipped {
                    message: e.to_string(),
                });
            }
        }
    }

    (drawing, report)
}

/// Build and serialize in one step, returning the document bytes.
pub fn generate_dxf(records: &[CanonicalRecord]) -> (Vec<u8>, ConversionReport) {
    let (drawing, report) = build_drawing(records);
    (serialize_drawing(&drawing).into_bytes(), report)
}
