//! Error types for grid construction and tile expansion
//!
//! Out-of-range element access is a caller bug and panics instead of
//! producing one of these. Errors here only come from boundary operations
//! that accept externally built buffers or tile catalogues.

use std::fmt;

/// Main error type for fallible grid operations
#[derive(Debug)]
pub enum GridError {
    /// Buffer length does not match the requested dimensions
    ShapeMismatch {
        /// Requested number of rows
        height: usize,
        /// Requested number of columns
        width: usize,
        /// Length of the buffer that was supplied
        len: usize,
    },

    /// `height * width` does not fit in `usize`
    DimensionOverflow {
        /// Requested number of rows
        height: usize,
        /// Requested number of columns
        width: usize,
    },

    /// A cell references a tile id with no canonical tile
    UnknownTile {
        /// Debug rendering of the missing id
        id: String,
    },

    /// Canonical tiles are not square or do not share one size
    TileShapeMismatch {
        /// Debug rendering of the offending id
        id: String,
        /// Expected (rows, cols)
        expected: (usize, usize),
        /// Actual (rows, cols)
        found: (usize, usize),
    },

    /// Conversion to or from an `ndarray` layout failed
    Layout {
        /// Underlying shape error
        source: ndarray::ShapeError,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { height, width, len } => {
                write!(
                    f,
                    "Buffer of length {len} cannot back a {height}x{width} grid"
                )
            }
            Self::DimensionOverflow { height, width } => {
                write!(f, "Grid dimensions {height}x{width} overflow usize")
            }
            Self::UnknownTile { id } => {
                write!(f, "No canonical tile registered for id {id}")
            }
            Self::TileShapeMismatch {
                id,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Canonical tile {id} is {}x{}, expected {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
            Self::Layout { source } => {
                write!(f, "Array layout error: {source}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout { source } => Some(source),
            _ => None,
        }
    }
}

impl From<ndarray::ShapeError> for GridError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::Layout { source: err }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an unknown tile error from any debuggable id
pub fn unknown_tile(id: &impl fmt::Debug) -> GridError {
    GridError::UnknownTile {
        id: format!("{id:?}"),
    }
}

/// Compute `height * width`, failing on overflow
///
/// # Errors
///
/// Returns [`GridError::DimensionOverflow`] when the product does not fit in `usize`
pub const fn checked_area(height: usize, width: usize) -> Result<usize> {
    match height.checked_mul(width) {
        Some(area) => Ok(area),
        None => Err(GridError::DimensionOverflow { height, width }),
    }
}
