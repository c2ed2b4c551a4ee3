//! Row and record types, and the mapping step between them.

use serde::{Deserialize, Serialize};

use crate::config::MIN_FIELDS;
use crate::error::Result;
use crate::model::mapping::ColumnMapping;

/// One cleaned input row: trimmed, non-empty tokens in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub tokens: Vec<String>,
}

impl RawRow {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// The canonical six-field record all downstream logic operates on.
///
/// Coordinate fields keep their source string form; numeric coercion is
/// deferred to the drawing builder so a malformed value can still reach
/// the fallback annotation intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub point: String,
    pub x: String,
    pub y: String,
    pub z: String,
    pub code: String,
    pub comment: String,
}

impl CanonicalRecord {
    /// All six fields joined with single spaces, in schema order.
    /// Used verbatim as the fallback annotation text.
    pub fn joined(&self) -> String {
        [
            self.point.as_str(),
            self.x.as_str(),
            self.y.as_str(),
            self.z.as_str(),
            self.code.as_str(),
            self.comment.as_str(),
        ]
        .join(" ")
    }
}

/// Apply a column mapping to one row.
///
/// Returns `None` for rows that fail the minimum-field re-check. Tokens
/// strictly past the highest mapped index are joined into the comment.
pub fn map_row(row: &RawRow, mapping: &ColumnMapping) -> Option<CanonicalRecord> {
    if row.len() < MIN_FIELDS {
        return None;
    }
    let comment_start = mapping.max_index() + 1;
    let comment = if row.len() > comment_start {
        row.tokens[comment_start..].join(" ")
    } else {
        String::new()
    };
    Some(CanonicalRecord {
        point: row.tokens[mapping.point].clone(),
        x: row.tokens[mapping.x].clone(),
        y: row.tokens[mapping.y].clone(),
        z: row.tokens[mapping.z].clone(),
        code: row.tokens[mapping.code].clone(),
        comment,
    })
}

/// Map all rows under a validated mapping, in order.
pub fn map_rows(rows: &[RawRow], mapping: &ColumnMapping) -> Result<Vec<CanonicalRecord>> {
    mapping.validate()?;
    Ok(rows.iter().filter_map(|row| map_row(row, mapping)).collect())
}
