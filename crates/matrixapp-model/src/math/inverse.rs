use log::debug;

use crate::error::{MatrixError, Result};
use crate::math::{Matrix, SINGULARITY_TOLERANCE};

impl Matrix {
    /// Inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// Works on the augmented matrix `[A | I]`. For each column the row with
    /// the largest absolute entry at or below the diagonal is swapped into
    /// place, the pivot row is scaled to a unit pivot, and the column is
    /// cleared from every other row. Once the left half is reduced to the
    /// identity the right half holds the inverse.
    ///
    /// # Errors
    ///
    /// * [`MatrixError::NotSquare`] if `rows != cols`.
    /// * [`MatrixError::SingularMatrix`] if a pivot's magnitude is below
    ///   [`SINGULARITY_TOLERANCE`] after the swap.
    pub fn inverse(&self) -> Result<Matrix> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }

        let n = self.rows();
        let width = 2 * n;
        let mut augmented: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                let mut row = Vec::with_capacity(width);
                row.extend_from_slice(self.row_slice(i));
                row.resize(width, 0.0);
                row[n + i] = 1.0;
                row
            })
            .collect();

        for i in 0..n {
            let mut max_row = i;
            for k in (i + 1)..n {
                if augmented[k][i].abs() > augmented[max_row][i].abs() {
                    max_row = k;
                }
            }
            if max_row != i {
                debug!(
                    "[MatrixApp::Inverse] Swapping row {} with pivot row {}",
                    i, max_row
                );
                augmented.swap(i, max_row);
            }

            let pivot = augmented[i][i];
            if pivot.abs() < SINGULARITY_TOLERANCE {
                debug!(
                    "[MatrixApp::Inverse] Pivot {:e} in column {} is below tolerance",
                    pivot, i
                );
                return Err(MatrixError::SingularMatrix { pivot_index: i });
            }

            for value in &mut augmented[i][i..] {
                *value /= pivot;
            }

            let pivot_row = augmented[i].clone();
            for (k, row) in augmented.iter_mut().enumerate() {
                if k == i {
                    continue;
                }
                let factor = row[i];
                for (target, source) in row[i..].iter_mut().zip(&pivot_row[i..]) {
                    *target -= factor * source;
                }
            }
        }

        let mut result = Matrix::zeroed(n, n);
        for (i, row) in augmented.iter().enumerate() {
            for (j, &value) in row[n..].iter().enumerate() {
                result.set(i, j, value)?;
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivot_swap_handles_zero_leading_entry() {
        let m = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]]).unwrap();
        let inv = m.inverse().unwrap();
        assert_eq!(inv.to_rows(), vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
    }

    #[test]
    fn test_singular_reports_failing_column() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]]).unwrap();
        assert_eq!(
            m.inverse(),
            Err(MatrixError::SingularMatrix { pivot_index: 2 })
        );
    }

    #[test]
    fn test_pivot_below_tolerance_is_singular() {
        let m = Matrix::from_rows(&[[1e-11]]).unwrap();
        assert_eq!(
            m.inverse(),
            Err(MatrixError::SingularMatrix { pivot_index: 0 })
        );
    }

    #[test]
    fn test_source_left_untouched() {
        let m = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
        let before = m.clone();
        let _ = m.inverse().unwrap();
        assert_eq!(m, before);
    }
}
