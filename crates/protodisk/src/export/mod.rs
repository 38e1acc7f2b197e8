//! Radiative-transfer input files.
//!
//! [`lime`] writes the regular-grid tables read by LIME's model interface,
//! [`predefined`] handles LIME's point-list ("predefined grid") format.

pub mod lime;
pub mod predefined;

#[cfg(test)]
mod lime_test;
#[cfg(test)]
mod predefined_test;

pub use lime::{write_datatab, write_submodel, Exp, LimeFields, LimeFiles};
pub use predefined::{
    predefined_points, read_predefined_grid, sink_points, write_predefined_grid, PredefinedPoint,
};
