//! Integration tests for TXT to DXF conversion.
//!
//! These tests validate the structural correctness of generated DXF
//! files by parsing the group-code stream back into entities and tables,
//! rather than comparing bytes against a fixture. The full pipeline is
//! exercised through both the byte-level API and the file-path API.

use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;

use txt2dxf::{
    convert_txt_to_dxf, generate_drawing, parse_input, ColumnMapping, ConvertError, Delimiter,
};

// ==================== DXF Structure Parsing ====================

/// One (group code, value) pair.
type Group = (i32, String);

/// A parsed DXF entity or table record: its type plus its groups.
#[derive(Debug)]
struct DxfRecord {
    kind: String,
    groups: Vec<Group>,
}

impl DxfRecord {
    fn value(&self, code: i32) -> Option<&str> {
        self.groups
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, v)| v.as_str())
    }

    fn coord(&self, code: i32) -> f64 {
        self.value(code).unwrap().parse().unwrap()
    }

    fn layer(&self) -> &str {
        self.value(8).unwrap_or("")
    }
}

/// Parsed DXF file: table records and entities by type.
#[derive(Debug)]
struct DxfStructure {
    records: Vec<DxfRecord>,
}

impl DxfStructure {
    fn parse(content: &str) -> Self {
        let lines: Vec<&str> = content.lines().collect();
        let mut records: Vec<DxfRecord> = Vec::new();
        let mut current: Option<DxfRecord> = None;

        let mut i = 0;
        while i + 1 < lines.len() {
            let code: i32 = lines[i].trim().parse().expect("group code");
            let value = lines[i + 1].to_string();
            i += 2;

            if code == 0 {
                if let Some(record) = current.take() {
                    records.push(record);
                }
                current = Some(DxfRecord {
                    kind: value,
                    groups: Vec::new(),
                });
            } else if let Some(record) = current.as_mut() {
                record.groups.push((code, value));
            }
        }
        if let Some(record) = current.take() {
            records.push(record);
        }

        DxfStructure { records }
    }

    fn of_kind(&self, kind: &str) -> Vec<&DxfRecord> {
        self.records.iter().filter(|r| r.kind == kind).collect()
    }

    fn layers(&self) -> Vec<(&str, i32)> {
        self.of_kind("LAYER")
            .iter()
            .map(|r| {
                (
                    r.value(2).unwrap(),
                    r.value(62).unwrap().trim().parse().unwrap(),
                )
            })
            .collect()
    }

    fn texts_on(&self, layer: &str) -> Vec<&DxfRecord> {
        self.of_kind("TEXT")
            .into_iter()
            .filter(|r| r.layer() == layer)
            .collect()
    }
}

fn convert_str(input: &str, mapping: &ColumnMapping) -> DxfStructure {
    let parsed = parse_input(input.as_bytes()).expect("parse input");
    let (bytes, _) = generate_drawing(&parsed.rows, mapping).expect("generate");
    DxfStructure::parse(&String::from_utf8(bytes).unwrap())
}

// ==================== Document structure ====================

#[test]
fn test_layers_registered_in_order_with_colors() {
    let dxf = convert_str("P1 1.0 2.0 3.0 C1\n", &ColumnMapping::standard());
    assert_eq!(
        dxf.layers(),
        vec![
            ("Points", 7),
            ("Codes", 200),
            ("Numbers", 10),
            ("Elevations", 34),
            ("Comments", 250),
        ]
    );
}

#[test]
fn test_single_style_record() {
    let dxf = convert_str("P1 1.0 2.0 3.0 C1\n", &ColumnMapping::standard());
    let styles = dxf.of_kind("STYLE");
    assert_eq!(styles.len(), 1);
    assert_eq!(styles[0].value(2), Some("Simplex"));
    assert_eq!(styles[0].value(3), Some("simplex.shx"));
}

// ==================== Normal emission path ====================

#[test]
fn test_normal_record_entities_and_placement() {
    let dxf = convert_str("P1 1.0 2.0 3.0 C1 note\n", &ColumnMapping::standard());

    let points = dxf.of_kind("POINT");
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].layer(), "Points");
    assert_eq!(points[0].coord(10), 1.0);
    assert_eq!(points[0].coord(20), 2.0);
    assert_eq!(points[0].coord(30), 3.0);

    let numbers = dxf.texts_on("Numbers");
    assert_eq!(numbers.len(), 1);
    assert_eq!(numbers[0].value(1), Some("P1"));
    assert_eq!(numbers[0].coord(10), 1.5);
    assert_eq!(numbers[0].coord(20), 3.5);

    let codes = dxf.texts_on("Codes");
    assert_eq!(codes[0].value(1), Some("C1"));
    assert_eq!(codes[0].coord(10), 1.5);
    assert_eq!(codes[0].coord(20), 0.5);

    let elevations = dxf.texts_on("Elevations");
    assert_eq!(elevations[0].value(1), Some("3.0"));
    assert_eq!(elevations[0].coord(10), 1.5);
    assert_eq!(elevations[0].coord(20), 2.0);

    let comments = dxf.texts_on("Comments");
    assert_eq!(comments[0].value(1), Some("note"));
    assert_eq!(comments[0].coord(10), 1.5);
    assert_eq!(comments[0].coord(20), -1.0);

    // All annotation text uses the registered style and height.
    for text in dxf.of_kind("TEXT") {
        assert_eq!(text.value(7), Some("Simplex"));
        assert_eq!(text.value(40), Some("0.500"));
    }
}

#[test]
fn test_record_without_comment_emits_three_texts() {
    let dxf = convert_str("P1 1.0 2.0 3.0 C1\n", &ColumnMapping::standard());
    assert_eq!(dxf.of_kind("TEXT").len(), 3);
    assert!(dxf.texts_on("Comments").is_empty());
}

#[test]
fn test_swapped_mapping_swaps_coordinates() {
    let dxf = convert_str("P1 10 20 5 A\n", &ColumnMapping::swapped_xy());
    let points = dxf.of_kind("POINT");
    assert_eq!(points[0].coord(10), 20.0);
    assert_eq!(points[0].coord(20), 10.0);
    assert_eq!(points[0].coord(30), 5.0);
}

// ==================== Fallback path ====================

#[test]
fn test_unparseable_coordinate_fallback() {
    let dxf = convert_str("P1 abc 2 3 C\nP2 4 5 6 D\n", &ColumnMapping::standard());

    // One point for the good record, none for the bad one.
    assert_eq!(dxf.of_kind("POINT").len(), 1);

    let comments = dxf.texts_on("Comments");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].value(1), Some("P1 abc 2 3 C "));
    assert_eq!(comments[0].coord(10), 0.0);
    assert_eq!(comments[0].coord(20), 0.0);
}

// ==================== Delimiter handling ====================

#[test]
fn test_comma_space_delimited_file() {
    let parsed = parse_input(b"P1, 1.0, 2.0, 3.0, C1\n").unwrap();
    assert_eq!(parsed.delimiter, Delimiter::CommaSpace);
    assert_eq!(parsed.rows[0].tokens, vec!["P1", "1.0", "2.0", "3.0", "C1"]);
}

#[test]
fn test_tab_delimited_file_with_embedded_spaces() {
    let parsed = parse_input(b"P1\t1.0\t2.0\t3.0\tsteel pole\n").unwrap();
    assert_eq!(parsed.delimiter, Delimiter::Tab);
    assert_eq!(parsed.rows[0].tokens[4], "steel pole");
}

#[test]
fn test_whitespace_aligned_file_uses_space() {
    let parsed = parse_input(b"P1   1.0  2.0   3.0  C1\n").unwrap();
    assert_eq!(parsed.delimiter, Delimiter::Space);
    assert_eq!(parsed.rows[0].tokens.len(), 5);
}

// ==================== Full pipeline via files ====================

#[test]
fn test_convert_file_roundtrip_and_idempotence() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("points.txt");
    let mut file = std::fs::File::create(&input_path).unwrap();
    writeln!(file, "1\t100.0\t200.0\t5.0\tA\tpole").unwrap();
    writeln!(file, "2\t101.0\t201.0\t5.5\tB").unwrap();
    writeln!(file, "3\tbad\t202.0\t6.0\tC").unwrap();
    drop(file);

    let mapping = ColumnMapping::standard();
    let (first, report) = convert_txt_to_dxf(&input_path, &mapping).unwrap();
    let (second, _) = convert_txt_to_dxf(&input_path, &mapping).unwrap();

    // Byte-identical output for byte-identical input.
    assert_eq!(first, second);

    assert_eq!(report.total(), 3);
    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.fallbacks(), 1);

    let dxf = DxfStructure::parse(&String::from_utf8(first).unwrap());
    assert_eq!(dxf.of_kind("POINT").len(), 2);
}

#[test]
fn test_convert_degenerate_file_is_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("degenerate.txt");
    std::fs::write(&input_path, "just\nsome short\nlines\n").unwrap();

    let result = convert_txt_to_dxf(&input_path, &ColumnMapping::standard());
    assert!(matches!(result, Err(ConvertError::EmptyInput)));
}

#[test]
fn test_convert_missing_file() {
    let result = convert_txt_to_dxf(Path::new("no/such/file.txt"), &ColumnMapping::standard());
    assert!(matches!(result, Err(ConvertError::FileNotFound { .. })));
}

// ==================== Encoding ====================

#[test]
fn test_windows_1251_input_decodes() {
    // Three rows with Russian codes/comments, encoded as windows-1251.
    let content = "1\t100.0\t200.0\t5.0\tопора линии электропередачи\n\
                   2\t101.0\t201.0\t5.5\tколодец смотровой бетонный\n\
                   3\t102.0\t202.0\t6.0\tдерево лиственное отдельное\n";
    let (bytes, _, _) = encoding_rs::WINDOWS_1251.encode(content);

    let parsed = parse_input(&bytes).unwrap();
    assert_eq!(parsed.encoding, "windows-1251");
    assert_eq!(parsed.rows[0].tokens[4], "опора линии электропередачи");
}
