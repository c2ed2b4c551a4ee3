//! ASCII DXF serialization of the drawing document.
//!
//! Writes a minimal AC1009 (R12) file: header, LTYPE/LAYER/STYLE tables,
//! and POINT/TEXT entities. No handles or timestamps are emitted, so the
//! same document always serializes to the same bytes.

use std::fmt::Write;

use crate::model::{Drawing, Entity};

/// DXF writer producing AutoCAD-compatible group-code output.
pub struct DxfWriter {
    output: String,
}

impl DxfWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Get the generated DXF content.
    pub fn into_string(self) -> String {
        self.output
    }

    /// Write a DXF group code and value.
    ///
    /// Group codes are right-aligned: single-digit codes get two leading
    /// spaces, double-digit codes one, triple-digit codes none.
    fn write_group(&mut self, code: i32, value: &str) {
        if code < 10 {
            writeln!(self.output, "  {}", code).unwrap();
        } else if code < 100 {
            writeln!(self.output, " {}", code).unwrap();
        } else {
            writeln!(self.output, "{}", code).unwrap();
        }
        writeln!(self.output, "{}", value).unwrap();
    }

    /// Write a DXF group code with an integer value (right-aligned in 6 chars).
    fn write_group_int(&mut self, code: i32, value: i32) {
        if code < 10 {
            writeln!(self.output, "  {}", code).unwrap();
        } else if code < 100 {
            writeln!(self.output, " {}", code).unwrap();
        } else {
            writeln!(self.output, "{}", code).unwrap();
        }
        writeln!(self.output, "{:>6}", value).unwrap();
    }

    /// Format a coordinate with 3 decimal places.
    /// Uses "round half away from zero" rounding.
    fn format_coord(value: f64) -> String {
        let scaled = value * 1000.0;
        let rounded = if scaled >= 0.0 {
            (scaled + 0.5).floor()
        } else {
            (scaled - 0.5).ceil()
        };
        format!("{:.3}", rounded / 1000.0)
    }

    /// Write the DXF header section.
    fn write_header(&mut self) {
        self.write_group(0, "SECTION");
        self.write_group(2, "HEADER");

        self.write_group(9, "$ACADVER");
        self.write_group(1, "AC1009");

        self.write_group(0, "ENDSEC");
    }

    /// Write the tables section: line types, layers, and text styles.
    fn write_tables(&mut self, drawing: &Drawing) {
        self.write_group(0, "SECTION");
        self.write_group(2, "TABLES");

        // Line type table
        self.write_group(0, "TABLE");
        self.write_group(2, "LTYPE");
        self.write_group_int(70, 1);

        self.write_group(0, "LTYPE");
        self.write_group(2, "CONTINUOUS");
        self.write_group_int(70, 64);
        self.write_group(3, "Solid line");
        self.write_group_int(72, 65);
        self.write_group_int(73, 0);
        self.write_group(40, "0.0");

        self.write_group(0, "ENDTAB");

        // Layer table
        self.write_group(0, "TABLE");
        self.write_group(2, "LAYER");
        self.write_group_int(70, drawing.layers.len() as i32);

        for layer in &drawing.layers {
            self.write_group(0, "LAYER");
            self.write_group(2, &layer.name);
            self.write_group_int(70, 64);
            self.write_group(62, &layer.color.to_string());
            self.write_group(6, "CONTINUOUS");
        }

        self.write_group(0, "ENDTAB");

        // Style table
        self.write_group(0, "TABLE");
        self.write_group(2, "STYLE");
        self.write_group_int(70, drawing.styles.len() as i32);

        for style in &drawing.styles {
            self.write_group(0, "STYLE");
            self.write_group(2, &style.name);
            self.write_group_int(70, 0);
            self.write_group(40, "0.0");
            self.write_group(41, "1.0");
            self.write_group(50, "0.0");
            self.write_group_int(71, 0);
            self.write_group(42, "0.0");
            self.write_group(3, &style.font);
            self.write_group(4, "");
        }

        self.write_group(0, "ENDTAB");
        self.write_group(0, "ENDSEC");
    }

    /// Write the entities section.
    fn write_entities(&mut self, drawing: &Drawing) {
        self.write_group(0, "SECTION");
        self.write_group(2, "ENTITIES");

        for entity in &drawing.entities {
            match entity {
                Entity::Point { layer, x, y, z } => self.write_point(layer, *x, *y, *z),
                Entity::Text {
                    layer,
                    style,
                    height,
                    x,
                    y,
                    value,
                } => self.write_text(layer, style, *height, *x, *y, value),
            }
        }

        self.write_group(0, "ENDSEC");
    }

    /// Write a POINT entity.
    fn write_point(&mut self, layer: &str, x: f64, y: f64, z: f64) {
        self.write_group(0, "POINT");
        self.write_group(8, layer);
        self.write_group(10, &Self::format_coord(x));
        self.write_group(20, &Self::format_coord(y));
        self.write_group(30, &Self::format_coord(z));
    }

    /// Write a TEXT entity.
    fn write_text(&mut self, layer: &str, style: &str, height: f64, x: f64, y: f64, text: &str) {
        self.write_group(0, "TEXT");
        self.write_group(8, layer);
        self.write_group(10, &Self::format_coord(x));
        self.write_group(20, &Self::format_coord(y));
        self.write_group(30, "0.000");
        self.write_group(40, &Self::format_coord(height));
        self.write_group(1, text);
        self.write_group(7, style);
    }
}

impl Default for DxfWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a drawing document to DXF text.
pub fn serialize_drawing(drawing: &Drawing) -> String {
    let mut writer = DxfWriter::new();
    writer.write_header();
    writer.write_tables(drawing);
    writer.write_entities(drawing);
    writer.write_group(0, "EOF");
    writer.into_string()
}
