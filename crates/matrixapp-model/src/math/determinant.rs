use log::warn;

use crate::error::{MatrixError, Result};
use crate::math::{Matrix, MAX_DIMENSION};

impl Matrix {
    /// Determinant by recursive cofactor expansion along the first row.
    ///
    /// No pivoting is applied, so results for ill-conditioned input carry the
    /// full rounding error of the expansion. Cost grows factorially with the
    /// dimension; see [`MAX_DIMENSION`].
    pub fn determinant(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }

        let n = self.rows();
        if n > MAX_DIMENSION {
            warn!(
                "[MatrixApp::Determinant] Cofactor expansion on a {}x{} matrix exceeds the supported size of {}",
                n, n, MAX_DIMENSION
            );
        }

        Ok(cofactor_expansion(self.as_slice(), n))
    }
}

fn cofactor_expansion(data: &[f64], n: usize) -> f64 {
    match n {
        1 => data[0],
        2 => data[0] * data[3] - data[1] * data[2],
        _ => (0..n)
            .map(|j| {
                let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                sign * data[j] * cofactor_expansion(&minor(data, n, 0, j), n - 1)
            })
            .sum::<f64>(),
    }
}

/// The `(n-1)x(n-1)` submatrix with `skip_row` and `skip_col` removed.
fn minor(data: &[f64], n: usize, skip_row: usize, skip_col: usize) -> Vec<f64> {
    let mut sub = Vec::with_capacity((n - 1) * (n - 1));
    for row in (0..n).filter(|&r| r != skip_row) {
        for col in (0..n).filter(|&c| c != skip_col) {
            sub.push(data[row * n + col]);
        }
    }
    sub
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_drops_row_and_column() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(minor(&data, 3, 0, 1), vec![4.0, 6.0, 7.0, 9.0]);
        assert_eq!(minor(&data, 3, 0, 0), vec![5.0, 6.0, 8.0, 9.0]);
    }

    #[test]
    fn test_base_cases() {
        assert_eq!(cofactor_expansion(&[7.5], 1), 7.5);
        assert_eq!(cofactor_expansion(&[1.0, 2.0, 3.0, 4.0], 2), -2.0);
    }

    #[test]
    fn test_sign_alternates_along_first_row() {
        // Permutation matrix for the cycle (0 1 2) has determinant +1.
        let data = [0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0];
        assert_eq!(cofactor_expansion(&data, 3), 1.0);
        // A single swap flips the sign.
        let swapped = [0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
        assert_eq!(cofactor_expansion(&swapped, 3), -1.0);
    }

    #[test]
    fn test_four_by_four() {
        let m = Matrix::from_rows(&[
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ])
        .unwrap();
        assert!((m.determinant().unwrap() - 30.0).abs() < 1e-9);
    }
}
