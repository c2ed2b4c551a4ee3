//! Column-order mappings from logical field names to token indices.

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Mapping from the five logical fields to zero-based token indices.
///
/// Only two named variants exist: [`ColumnMapping::standard`] and
/// [`ColumnMapping::swapped_xy`]. Any mapping whose index set is not a
/// bijection onto {0, 1, 2, 3, 4} is rejected by [`ColumnMapping::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub point: usize,
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub code: usize,
}

impl ColumnMapping {
    /// Standard column order: Point, X, Y, Z, Code.
    pub const fn standard() -> Self {
        Self {
            point: 0,
            x: 1,
            y: 2,
            z: 3,
            code: 4,
        }
    }

    /// X and Y swapped: Point, Y, X, Z, Code.
    pub const fn swapped_xy() -> Self {
        Self {
            point: 0,
            x: 2,
            y: 1,
            z: 3,
            code: 4,
        }
    }

    /// Resolve the external selection token ("1" or "2") to a variant.
    pub fn from_choice(choice: &str) -> Result<Self> {
        match choice.trim() {
            "1" => Ok(Self::standard()),
            "2" => Ok(Self::swapped_xy()),
            other => Err(ConvertError::InvalidMappingChoice {
                choice: other.to_string(),
            }),
        }
    }

    /// The five indices in field order (Point, X, Y, Z, Code).
    pub fn indices(&self) -> [usize; 5] {
        [self.point, self.x, self.y, self.z, self.code]
    }

    /// Highest mapped token index; tokens past it become the comment.
    pub fn max_index(&self) -> usize {
        self.indices().into_iter().max().unwrap_or(0)
    }

    /// Reject any mapping that is not a bijection onto {0, 1, 2, 3, 4}.
    pub fn validate(&self) -> Result<()> {
        let indices = self.indices();
        let mut seen = [false; 5];
        for &idx in &indices {
            if idx >= 5 || seen[idx] {
                return Err(ConvertError::InvalidMapping { indices });
            }
            seen[idx] = true;
        }
        Ok(())
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::standard()
    }
}
