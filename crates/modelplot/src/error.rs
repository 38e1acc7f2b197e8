use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid log norm [{vmin}, {vmax}]: limits must satisfy 0 < vmin < vmax")]
    InvalidNorm { vmin: f64, vmax: f64 },

    #[error("{field} has {actual} values but the grid has {expected} nodes")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown colormap '{0}'")]
    UnknownColormap(String),

    #[error("Invalid scatter weight {0}: must be positive")]
    InvalidWeight(f64),
}

pub(crate) fn ensure_len(
    field: &'static str,
    values: &[f64],
    expected: usize,
) -> Result<(), PlotError> {
    if values.len() != expected {
        return Err(PlotError::LengthMismatch {
            field,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}
