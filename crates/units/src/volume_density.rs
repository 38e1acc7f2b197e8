use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A physical volume density (mass per volume) quantity using f64 precision.
///
/// The `VolumeDensity` struct represents mass density with kilograms per cubic meter
/// as the base unit, matching the SI fields written for radiative transfer.
/// Protostellar envelopes sit around 10⁻¹⁵–10⁻¹¹ kg/m³.
///
/// # Examples
///
/// ```rust
/// use units::volume_density::VolumeDensity;
///
/// let rho0 = VolumeDensity::from_kg_per_m3(3.0e-15);
/// assert_eq!((rho0 * 2.0).to_kg_per_m3(), 6.0e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VolumeDensity(f64); // Base unit: kg/m³

impl VolumeDensity {
    /// Creates a new `VolumeDensity` from a value in kilograms per cubic meter.
    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value)
    }

    /// Returns the volume density in kilograms per cubic meter.
    pub fn to_kg_per_m3(&self) -> f64 {
        self.0
    }
}

impl Add for VolumeDensity {
    type Output = VolumeDensity;

    fn add(self, rhs: VolumeDensity) -> VolumeDensity {
        VolumeDensity(self.0 + rhs.0)
    }
}

impl Sub for VolumeDensity {
    type Output = VolumeDensity;

    fn sub(self, rhs: VolumeDensity) -> VolumeDensity {
        VolumeDensity(self.0 - rhs.0)
    }
}

impl Mul<f64> for VolumeDensity {
    type Output = VolumeDensity;

    fn mul(self, rhs: f64) -> VolumeDensity {
        VolumeDensity(self.0 * rhs)
    }
}

impl Div<f64> for VolumeDensity {
    type Output = VolumeDensity;

    fn div(self, rhs: f64) -> VolumeDensity {
        VolumeDensity(self.0 / rhs)
    }
}

/// Allow f64 * VolumeDensity (commutative multiplication)
impl Mul<VolumeDensity> for f64 {
    type Output = VolumeDensity;

    fn mul(self, rhs: VolumeDensity) -> VolumeDensity {
        rhs * self
    }
}
