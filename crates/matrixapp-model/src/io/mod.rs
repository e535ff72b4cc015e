//! Text and delimited-file front door for matrices.
pub mod delimited;
pub mod text;

pub use delimited::{read_matrix, write_matrix};
pub use text::{format_matrix, format_scalar, parse_cell, parse_grid, parse_matrix, InvalidCell};
