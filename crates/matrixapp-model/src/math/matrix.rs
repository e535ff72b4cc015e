use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};

/// Dense row-major matrix of `f64` values.
///
/// The shape is fixed at construction. Every accessor that hands out the grid
/// returns an owned copy, so callers can never alias the internal storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr", into = "MatrixRepr")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Zero-filled matrix of the given shape.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        Ok(Self::zeroed(rows, cols))
    }

    /// Copy a rectangular grid into a new matrix.
    ///
    /// Fails with [`MatrixError::InvalidInput`] for an empty grid or an empty
    /// first row, and with [`MatrixError::JaggedInput`] when any row length
    /// differs from the first.
    pub fn from_rows<R: AsRef<[f64]>>(grid: &[R]) -> Result<Self> {
        let first = grid.first().ok_or(MatrixError::InvalidInput)?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(MatrixError::InvalidInput);
        }

        let mut data = Vec::with_capacity(grid.len() * cols);
        for (row, values) in grid.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(MatrixError::JaggedInput {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Ok(Self {
            data,
            rows: grid.len(),
            cols,
        })
    }

    /// Like [`Matrix::from_rows`], treating a missing grid as invalid input.
    pub fn from_optional_rows<R: AsRef<[f64]>>(grid: Option<&[R]>) -> Result<Self> {
        match grid {
            Some(grid) => Self::from_rows(grid),
            None => Err(MatrixError::InvalidInput),
        }
    }

    pub fn identity(n: usize) -> Result<Self> {
        let mut result = Self::new(n, n)?;
        for i in 0..n {
            let offset = result.offset(i, i);
            result.data[offset] = 1.0;
        }
        Ok(result)
    }

    pub(crate) fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_bounds(row, col)?;
        Ok(self.data[self.offset(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_bounds(row, col)?;
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    /// Borrowed view of one row.
    ///
    /// Panics if `row` is out of range.
    pub fn row_slice(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Row-major backing storage.
    pub(crate) fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Independent copy of the grid, one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data
            .chunks_exact(self.cols)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Alias of [`Matrix::to_rows`].
    pub fn data(&self) -> Vec<Vec<f64>> {
        self.to_rows()
    }

    pub fn transpose(&self) -> Matrix {
        let mut result = Matrix::zeroed(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                let target = result.offset(j, i);
                result.data[target] = self.data[self.offset(i, j)];
            }
        }
        result
    }

    /// Matrix product `self · other`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut result = Matrix::zeroed(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let sum = (0..self.cols)
                    .map(|k| self[(i, k)] * other[(k, j)])
                    .sum::<f64>();
                let target = result.offset(i, j);
                result.data[target] = sum;
            }
        }
        Ok(result)
    }

    /// True when both matrices share a shape and every pair of elements
    /// differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        &self.data[self.offset(index.0, index.1)]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(value: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(&value)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks_exact(self.cols) {
            write!(f, "[")?;
            for (idx, value) in row.iter().enumerate() {
                write!(f, "{:?}", value)?;
                if idx + 1 != row.len() {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// Serialized form: `{ "rows": r, "cols": c, "data": [[..], ..] }`.
#[derive(Serialize, Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = MatrixError;

    fn try_from(repr: MatrixRepr) -> Result<Self> {
        let matrix = Matrix::from_rows(&repr.data)?;
        if matrix.shape() != (repr.rows, repr.cols) {
            return Err(MatrixError::ShapeMismatch {
                declared: (repr.rows, repr.cols),
                found: matrix.shape(),
            });
        }
        Ok(matrix)
    }
}

impl From<Matrix> for MatrixRepr {
    fn from(matrix: Matrix) -> Self {
        MatrixRepr {
            rows: matrix.rows,
            cols: matrix.cols,
            data: matrix.to_rows(),
        }
    }
}
