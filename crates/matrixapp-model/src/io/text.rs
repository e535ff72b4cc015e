//! Parsing of hand-typed matrix text and fixed-precision rendering of results.
use std::error::Error;
use std::fmt;

use anyhow::{Context, Result};

use crate::math::Matrix;

/// A cell whose text is not a finite number. Positions are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidCell {
    pub row: usize,
    pub col: usize,
    pub text: String,
}

impl fmt::Display for InvalidCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid value in cell [{},{}]: '{}'",
            self.row, self.col, self.text
        )
    }
}

impl Error for InvalidCell {}

/// Parse a single cell.
///
/// Blank cells and the partial entries `-` and `.` read as `0.0`.
pub fn parse_cell(text: &str, row: usize, col: usize) -> std::result::Result<f64, InvalidCell> {
    let trimmed = text.trim();
    if matches!(trimmed, "" | "-" | ".") {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InvalidCell {
            row,
            col,
            text: text.to_string(),
        }),
    }
}

/// Split `text` into a grid of numbers.
///
/// Rows are separated by newlines or `;`, cells by `,`, tabs, or runs of
/// whitespace (checked in that order per row). Blank rows are skipped.
/// No shape validation happens here; see [`Matrix::from_rows`].
pub fn parse_grid(text: &str) -> std::result::Result<Vec<Vec<f64>>, InvalidCell> {
    let mut grid = Vec::new();
    for line in text
        .split(|c: char| c == '\n' || c == ';')
        .filter(|line| !line.trim().is_empty())
    {
        let row = grid.len() + 1;
        let cells: Vec<&str> = if line.contains(',') {
            line.split(',').collect()
        } else if line.contains('\t') {
            line.split('\t').collect()
        } else {
            line.split_whitespace().collect()
        };
        let values = cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| parse_cell(cell, row, idx + 1))
            .collect::<std::result::Result<Vec<f64>, InvalidCell>>()?;
        grid.push(values);
    }
    Ok(grid)
}

pub fn parse_matrix(text: &str) -> Result<Matrix> {
    let grid = parse_grid(text)?;
    let matrix = Matrix::from_rows(&grid).context("Failed to build matrix from input text")?;
    Ok(matrix)
}

pub fn format_scalar(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Render one line per row with right-aligned, fixed-precision columns.
pub fn format_matrix(matrix: &Matrix, precision: usize) -> String {
    let cells: Vec<Vec<String>> = matrix
        .to_rows()
        .iter()
        .map(|row| row.iter().map(|&v| format_scalar(v, precision)).collect())
        .collect();
    let width = cells
        .iter()
        .flat_map(|row| row.iter().map(String::len))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in &cells {
        let line = row
            .iter()
            .map(|cell| format!("{:>width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_entries_read_as_zero() {
        for text in ["", "  ", "-", "."] {
            assert_eq!(parse_cell(text, 1, 1), Ok(0.0));
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(parse_cell("NaN", 1, 1).is_err());
        assert!(parse_cell("inf", 1, 1).is_err());
    }

    #[test]
    fn test_grid_separators() {
        assert_eq!(
            parse_grid("1,2;3,4").unwrap(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]]
        );
        assert_eq!(
            parse_grid("1\t2\n3\t4\n").unwrap(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]]
        );
        assert_eq!(
            parse_grid(" 1  -2.5 \n\n 3 4 ").unwrap(),
            vec![vec![1.0, -2.5], vec![3.0, 4.0]]
        );
    }

    #[test]
    fn test_format_matrix_aligns_columns() {
        let m = Matrix::from_rows(&[[-2.0, 1.0], [1.5, -0.5]]).unwrap();
        assert_eq!(format_matrix(&m, 3), "-2.000   1.000\n 1.500  -0.500\n");
    }
}
