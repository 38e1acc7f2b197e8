//! Molecular abundance and gas-to-dust ratio fields.
//!
//! Both are constant over the grid in the models built here, but are stored
//! per node because that is what the radiative-transfer input expects.

use crate::error::{ModelError, ModelResult};

/// Constant abundance of the traced molecule relative to H2.
pub fn abundance(value: f64, n_points: usize) -> ModelResult<Vec<f64>> {
    constant_field("abundance", value, n_points)
}

/// Constant gas-to-dust mass ratio.
pub fn gas_to_dust(value: f64, n_points: usize) -> ModelResult<Vec<f64>> {
    constant_field("gtd", value, n_points)
}

fn constant_field(name: &'static str, value: f64, n_points: usize) -> ModelResult<Vec<f64>> {
    if !value.is_finite() || value < 0.0 {
        return Err(ModelError::InvalidParameter {
            name,
            reason: format!("must be a non-negative number, got {value}"),
        });
    }
    Ok(vec![value; n_points])
}
