use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};

use matrixapp_model::io::InvalidCell;
use matrixapp_model::{Matrix, MatrixError};

use crate::operations::input::CalculatorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Transpose,
    Determinant,
    Inverse,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Transpose => "transpose",
            Operation::Determinant => "determinant",
            Operation::Inverse => "inverse",
        }
    }

    /// Heading printed above a successful result.
    pub fn title(&self) -> &'static str {
        match self {
            Operation::Transpose => "Transposed matrix:",
            Operation::Determinant => "Determinant:",
            Operation::Inverse => "Inverse matrix:",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transpose" => Ok(Operation::Transpose),
            "determinant" | "det" => Ok(Operation::Determinant),
            "inverse" | "inv" => Ok(Operation::Inverse),
            _ => Err(format!("Unknown operation: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult {
    Matrix(Matrix),
    Scalar(f64),
}

/// Run `operation` on `matrix` after checking it against the configured bounds.
///
/// With `verify` set, an inverse is multiplied back against the input and
/// rejected unless the product is the identity within
/// `config.verify_tolerance`.
pub fn run_operation(
    operation: Operation,
    matrix: &Matrix,
    config: &CalculatorConfig,
    verify: bool,
) -> Result<OperationResult> {
    config.check_dimensions(matrix)?;
    log::info!(
        "[MatrixApp::{}] Running on a {}x{} matrix",
        operation,
        matrix.rows(),
        matrix.cols()
    );

    let result = match operation {
        Operation::Transpose => OperationResult::Matrix(matrix.transpose()),
        Operation::Determinant => OperationResult::Scalar(matrix.determinant()?),
        Operation::Inverse => {
            let inverse = matrix.inverse()?;
            if verify {
                verify_inverse(matrix, &inverse, config.verify_tolerance)?;
            }
            OperationResult::Matrix(inverse)
        }
    };
    Ok(result)
}

fn verify_inverse(matrix: &Matrix, inverse: &Matrix, tolerance: f64) -> Result<()> {
    let product = matrix.multiply(inverse)?;
    let identity = Matrix::identity(matrix.rows())?;
    if !product.approx_eq(&identity, tolerance) {
        bail!(
            "Inverse check failed: M * inverse(M) differs from the identity by more than {:e}",
            tolerance
        );
    }
    log::info!(
        "[MatrixApp::inverse] Verified M * inverse(M) = I within {:e}",
        tolerance
    );
    Ok(())
}

/// Message shown to the user for a failed operation.
pub fn user_message(operation: Operation, err: &anyhow::Error) -> String {
    if let Some(cell) = err.downcast_ref::<InvalidCell>() {
        return format!("Error: {}", cell);
    }
    match err.downcast_ref::<MatrixError>() {
        Some(
            e @ (MatrixError::InvalidDimensions { .. }
            | MatrixError::InvalidInput
            | MatrixError::JaggedInput { .. }),
        ) => format!("Error creating matrix: {}", e),
        Some(e) => format!("Error computing {}: {}", operation, e),
        None => format!("Error during {}: {:#}", operation, err),
    }
}
