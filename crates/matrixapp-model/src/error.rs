use std::error::Error;
use std::fmt;

/// Failure kinds reported by [`crate::math::Matrix`] construction and operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Zero row or column count requested.
    InvalidDimensions { rows: usize, cols: usize },
    /// Absent or empty source grid.
    InvalidInput,
    /// Row `row` has `found` elements where the first row has `expected`.
    JaggedInput {
        row: usize,
        expected: usize,
        found: usize,
    },
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    NotSquare { rows: usize, cols: usize },
    /// Pivot in column `pivot_index` fell below the singularity tolerance.
    SingularMatrix { pivot_index: usize },
    /// Declared shape of a serialized matrix disagrees with its data.
    ShapeMismatch {
        declared: (usize, usize),
        found: (usize, usize),
    },
    /// Inner dimensions of a product disagree.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::InvalidDimensions { rows, cols } => write!(
                f,
                "Matrix dimensions must be positive, got {}x{}",
                rows, cols
            ),
            MatrixError::InvalidInput => {
                write!(f, "Matrix input data must not be absent or empty")
            }
            MatrixError::JaggedInput {
                row,
                expected,
                found,
            } => write!(
                f,
                "All matrix rows must have the same length: row {} has {} elements, expected {}",
                row, found, expected
            ),
            MatrixError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Index ({}, {}) is out of range for a {}x{} matrix",
                row, col, rows, cols
            ),
            MatrixError::NotSquare { rows, cols } => write!(
                f,
                "Matrix must be square for this operation, got {}x{}",
                rows, cols
            ),
            MatrixError::SingularMatrix { pivot_index } => write!(
                f,
                "Matrix is singular (zero pivot in column {}), no inverse exists",
                pivot_index
            ),
            MatrixError::ShapeMismatch { declared, found } => write!(
                f,
                "Declared shape {}x{} does not match the {}x{} data grid",
                declared.0, declared.1, found.0, found.1
            ),
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "Cannot multiply a {}x{} matrix by a {}x{} matrix",
                left.0, left.1, right.0, right.1
            ),
        }
    }
}

impl Error for MatrixError {}

pub type Result<T> = std::result::Result<T, MatrixError>;
