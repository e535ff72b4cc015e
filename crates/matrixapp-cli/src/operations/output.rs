use std::path::Path;

use anyhow::{Context, Result};

use matrixapp_model::io::{format_matrix, format_scalar, write_matrix};

use crate::operations::run::{Operation, OperationResult};

/// Render a result for the terminal, headed by the operation title.
pub fn render(operation: Operation, result: &OperationResult, precision: usize) -> String {
    match result {
        OperationResult::Matrix(matrix) => {
            format!("{}\n{}", operation.title(), format_matrix(matrix, precision))
        }
        OperationResult::Scalar(value) => {
            format!("{} {}\n", operation.title(), format_scalar(*value, precision))
        }
    }
}

/// Write a result to `path`.
///
/// Matrices go through the CSV/TSV writer, so the extension must be `.csv`
/// or `.tsv`; scalars are written as a single line of text.
pub fn write_result<P: AsRef<Path>>(
    path: P,
    result: &OperationResult,
    precision: usize,
) -> Result<()> {
    let path = path.as_ref();
    match result {
        OperationResult::Matrix(matrix) => write_matrix(path, matrix, precision)?,
        OperationResult::Scalar(value) => {
            std::fs::write(path, format!("{}\n", format_scalar(*value, precision)))
                .with_context(|| format!("Failed to write output file: {}", path.display()))?
        }
    }
    log::info!("[MatrixApp] Result written to {}", path.display());
    Ok(())
}
