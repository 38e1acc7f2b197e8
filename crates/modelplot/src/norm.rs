use serde::{Deserialize, Serialize};

use crate::error::PlotError;

/// Logarithmic mapping of `[vmin, vmax]` onto `[0, 1]`.
///
/// Values outside the range are clamped; non-positive and NaN values have no
/// logarithm and are masked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogNorm {
    vmin: f64,
    vmax: f64,
}

impl LogNorm {
    pub fn new(vmin: f64, vmax: f64) -> Result<Self, PlotError> {
        if !(vmin.is_finite() && vmax.is_finite() && vmin > 0.0 && vmax > vmin) {
            return Err(PlotError::InvalidNorm { vmin, vmax });
        }
        Ok(Self { vmin, vmax })
    }

    pub fn vmin(&self) -> f64 {
        self.vmin
    }

    pub fn vmax(&self) -> f64 {
        self.vmax
    }

    /// Position of `value` on the colour scale, or `None` if masked.
    pub fn normalize(&self, value: f64) -> Option<f64> {
        if value.is_nan() || value <= 0.0 {
            return None;
        }
        let t = (value.ln() - self.vmin.ln()) / (self.vmax.ln() - self.vmin.ln());
        Some(t.clamp(0.0, 1.0))
    }
}
