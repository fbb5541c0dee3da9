//! Error types for Gadget TUI operations.

use thiserror::Error;

use crate::geometry::Size;

/// Core error type for Gadget TUI operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A flat buffer did not hold exactly one value per cell.
    #[error("invalid dimensions: a {}x{} grid needs {} values, got {len}", .size.width, .size.height, .size.area())]
    InvalidDimensions {
        /// The requested grid size.
        size: Size,
        /// The number of values supplied.
        len: usize,
    },

    /// A coordinate fell outside a grid.
    #[error("({x}, {y}) is out of bounds for a {}x{} grid", .size.width, .size.height)]
    OutOfBounds {
        /// The column.
        x: u16,
        /// The row.
        y: u16,
        /// The grid size.
        size: Size,
    },

    /// A geometry value was rejected.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A band list did not describe a valid region.
    #[error(transparent)]
    Region(#[from] RegionError),

    /// A color string could not be parsed.
    #[error(transparent)]
    Color(#[from] ColorParseError),
}

/// Result type alias using the core Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for color parsing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Hex string had an invalid length.
    #[error("invalid hex length: {0} (expected 3, 4, 6, or 8)")]
    InvalidLength(usize),

    /// Invalid hexadecimal character.
    #[error("invalid hex character")]
    InvalidHexChar,
}

/// Error type for geometry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A rectangle had an edge past its opposite edge.
    #[error("invalid rectangle edges: top={top}, bottom={bottom}, left={left}, right={right}")]
    InvalidEdges {
        /// The top edge.
        top: i32,
        /// The bottom edge.
        bottom: i32,
        /// The left edge.
        left: i32,
        /// The right edge.
        right: i32,
    },
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;

/// Error type for building a region from raw bands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// A band covered no rows.
    #[error("band {index} is empty: y1={y1}, y2={y2}")]
    EmptyBand {
        /// Position of the band in the input.
        index: usize,
        /// Top of the band.
        y1: i32,
        /// Bottom of the band.
        y2: i32,
    },

    /// A band had an odd number of walls.
    #[error("band {index} has an odd number of walls ({len})")]
    OddWalls {
        /// Position of the band in the input.
        index: usize,
        /// Number of walls.
        len: usize,
    },

    /// A band's walls were not strictly increasing.
    #[error("band {index} has unsorted or duplicate walls")]
    UnsortedWalls {
        /// Position of the band in the input.
        index: usize,
    },

    /// A band started above the end of the previous band.
    #[error("band {index} overlaps or precedes the band before it")]
    Overlap {
        /// Position of the band in the input.
        index: usize,
    },
}

/// Result type alias for region construction.
pub type RegionResult<T> = std::result::Result<T, RegionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            size: Size::new(4, 2),
            len: 7,
        };
        assert_eq!(err.to_string(), "invalid dimensions: a 4x2 grid needs 8 values, got 7");

        let err = Error::OutOfBounds {
            x: 4,
            y: 0,
            size: Size::new(4, 2),
        };
        assert_eq!(err.to_string(), "(4, 0) is out of bounds for a 4x2 grid");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_region_error_converts_transparently() {
        let err: Error = RegionError::OddWalls { index: 2, len: 3 }.into();
        assert_eq!(err.to_string(), "band 2 has an odd number of walls (3)");
    }

    #[test]
    fn test_color_parse_error_display() {
        assert_eq!(
            ColorParseError::InvalidLength(5).to_string(),
            "invalid hex length: 5 (expected 3, 4, 6, or 8)"
        );
    }
}
