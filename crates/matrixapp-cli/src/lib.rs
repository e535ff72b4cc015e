//! matrixapp-cli: command-line front end for the matrix calculator.
//!
//! Loads a matrix from a CSV/TSV file or inline text, checks it against the
//! configured dimension bounds, runs one operation from `matrixapp-model`, and
//! renders the result.
pub mod operations;
