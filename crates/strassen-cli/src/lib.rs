//! # strassen-cli
//!
//! Matrix file input, result output, sweep progress, and shell completion.

pub mod completion;
pub mod input;
pub mod output;
pub mod progress;

pub use input::{parse_matrix_pair, read_matrix_pair, InputError};
