//! Physical constants in SI units.

pub use units::{GRAVITATIONAL_CONSTANT_SI as G, H2_MASS_KG};

/// Stefan–Boltzmann constant (W m⁻² K⁻⁴)
pub const SIGMA_SB: f64 = 5.670374e-8;

/// Pi
pub const PI: f64 = std::f64::consts::PI;
