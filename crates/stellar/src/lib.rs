//! Protostar types and mass-scaling relations.

pub mod error;
pub mod protostar;


pub use error::StellarError;
pub use protostar::{Protostar, LUMINOSITY_MASS_EXPONENT, RADIUS_MASS_EXPONENT};
