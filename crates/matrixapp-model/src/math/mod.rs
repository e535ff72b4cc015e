//! Dense matrix value type and its operations.
//!
//! `Matrix` owns a row-major `f64` grid. Construction validates the shape,
//! transposition is infallible, and the determinant and inverse live in their
//! own modules since they carry the numeric policy of the crate.
pub mod determinant;
pub mod inverse;
pub mod matrix;

pub use matrix::Matrix;

/// Largest dimension the calculator is expected to handle.
///
/// Cofactor expansion is `O(n!)`, so the determinant logs a warning above this
/// bound. Front ends are expected to reject larger inputs before calling in.
pub const MAX_DIMENSION: usize = 10;

/// Absolute magnitude below which an elimination pivot counts as zero.
pub const SINGULARITY_TOLERANCE: f64 = 1e-10;
