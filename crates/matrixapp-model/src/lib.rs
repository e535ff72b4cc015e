//! matrixapp-model: the numeric core of the matrix calculator.
//!
//! Provides the [`math::Matrix`] value type (validated construction,
//! bounds-checked element access, transpose, cofactor determinant and
//! Gauss-Jordan inverse), the [`error::MatrixError`] taxonomy, and helpers for
//! reading and writing matrices as text or CSV/TSV files.
pub mod error;
pub mod io;
pub mod math;

pub use error::{MatrixError, Result};
pub use math::Matrix;
