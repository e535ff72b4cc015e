//! CSV/TSV matrix files without a header row.
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::io::text::{format_scalar, parse_cell};
use crate::math::Matrix;

/// Field delimiter implied by the file extension (`.csv` or `.tsv`).
pub fn delimiter_for<P: AsRef<Path>>(path: P) -> Result<u8> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("tsv") => Ok(b'\t'),
        Some("csv") => Ok(b','),
        _ => bail!("File must have a .tsv or .csv extension: {}", path.display()),
    }
}

/// Read a matrix from a CSV or TSV file.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let path = path.as_ref();
    let delimiter = delimiter_for(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open matrix file: {}", path.display()))?;

    let mut grid = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        let values = record
            .iter()
            .enumerate()
            .map(|(col_idx, cell)| parse_cell(cell, row_idx + 1, col_idx + 1))
            .collect::<std::result::Result<Vec<f64>, _>>()?;
        grid.push(values);
    }

    log::debug!(
        "[MatrixApp::IO] Read {} rows from {}",
        grid.len(),
        path.display()
    );

    let matrix = Matrix::from_rows(&grid)
        .with_context(|| format!("Invalid matrix in file: {}", path.display()))?;
    Ok(matrix)
}

/// Write `matrix` to a CSV or TSV file with `precision` decimals per value.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &Matrix, precision: usize) -> Result<()> {
    let path = path.as_ref();
    let delimiter = delimiter_for(path)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    for row in matrix.to_rows() {
        let record: Vec<String> = row.iter().map(|&v| format_scalar(v, precision)).collect();
        writer.write_record(&record)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush output file: {}", path.display()))?;
    Ok(())
}
