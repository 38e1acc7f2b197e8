use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

use crate::volume_density::VolumeDensity;

/// Mass of a hydrogen atom (kg)
pub const HYDROGEN_MASS_KG: f64 = 1.6735575e-27;

/// Mass of a molecular hydrogen molecule (kg)
pub const H2_MASS_KG: f64 = 2.0 * HYDROGEN_MASS_KG;

/// Particle number density with particles per cubic meter as the base unit.
///
/// Radiative-transfer inputs quote molecular hydrogen densities in m⁻³, while
/// plots and papers use cm⁻³.
///
/// # Examples
///
/// ```rust
/// use units::NumberDensity;
///
/// let n = NumberDensity::from_per_m3(1.0e12);
/// assert!((n.to_per_cm3() - 1.0e6).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NumberDensity(f64); // Base unit: m⁻³

impl NumberDensity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_per_m3(value: f64) -> Self {
        Self(value)
    }

    /// Molecular hydrogen number density for a gas mass density.
    pub fn h2_from_mass_density(rho: VolumeDensity) -> Self {
        Self(rho.to_kg_per_m3() / H2_MASS_KG)
    }

    pub fn to_per_m3(&self) -> f64 {
        self.0
    }

    pub fn to_per_cm3(&self) -> f64 {
        self.0 * 1.0e-6
    }
}

impl Add for NumberDensity {
    type Output = NumberDensity;

    fn add(self, rhs: NumberDensity) -> NumberDensity {
        NumberDensity(self.0 + rhs.0)
    }
}

impl Mul<f64> for NumberDensity {
    type Output = NumberDensity;

    fn mul(self, rhs: f64) -> NumberDensity {
        NumberDensity(self.0 * rhs)
    }
}
