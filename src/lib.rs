//! Cross-crate integration tests for the Strassen-rs workspace live in `tests/`.
