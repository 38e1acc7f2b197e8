use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("{field} has {actual} values but the grid has {expected} nodes")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Malformed grid file {path:?}, line {line}: {reason}")]
    MalformedGridFile {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Fail with `LengthMismatch` unless a per-node field matches the grid size.
pub(crate) fn ensure_len(field: &'static str, values: &[f64], expected: usize) -> ModelResult<()> {
    if values.len() != expected {
        return Err(ModelError::LengthMismatch {
            field,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

/// Fail with `InvalidParameter` unless the value is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> ModelResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(ModelError::InvalidParameter {
            name,
            reason: format!("must be positive, got {value}"),
        });
    }
    Ok(())
}
