use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::mass::SOLAR_MASS_KG;
use crate::time::SECONDS_PER_YEAR;

/// A physical mass rate (mass per time) quantity using f64 precision.
///
/// The `MassRate` struct represents mass flow rates with solar masses per year as the base unit.
/// Protostellar infall rates are quoted this way (typically 10⁻⁶–10⁻⁴ M☉/yr), while the
/// envelope density normalisation needs kg/s.
///
/// # Examples
///
/// ```rust
/// use units::mass_rate::MassRate;
///
/// let infall = MassRate::from_solar_masses_per_year(5e-6);
/// let kg_per_s = infall.to_kg_per_sec();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MassRate(f64); // Base unit: Solar Masses per year

impl MassRate {
    /// Creates a new `MassRate` from a value in solar masses per year.
    ///
    /// # Arguments
    ///
    /// * `value` - The mass rate in solar masses per year
    pub fn from_solar_masses_per_year(value: f64) -> Self {
        Self(value)
    }

    /// Returns the mass rate value in solar masses per year.
    pub fn to_solar_masses_per_year(&self) -> f64 {
        self.0
    }

    /// Converts the mass rate to kilograms per second.
    ///
    /// # Returns
    ///
    /// The mass rate in kg/s
    pub fn to_kg_per_sec(&self) -> f64 {
        self.0 * SOLAR_MASS_KG / SECONDS_PER_YEAR
    }

}

impl Add for MassRate {
    type Output = MassRate;

    fn add(self, rhs: MassRate) -> MassRate {
        MassRate(self.0 + rhs.0)
    }
}

impl Sub for MassRate {
    type Output = MassRate;

    fn sub(self, rhs: MassRate) -> MassRate {
        MassRate(self.0 - rhs.0)
    }
}

impl Mul<f64> for MassRate {
    type Output = MassRate;

    fn mul(self, rhs: f64) -> MassRate {
        MassRate(self.0 * rhs)
    }
}

impl Div<f64> for MassRate {
    type Output = MassRate;

    fn div(self, rhs: f64) -> MassRate {
        MassRate(self.0 / rhs)
    }
}

/// Allow f64 * MassRate (commutative multiplication)
impl Mul<MassRate> for f64 {
    type Output = MassRate;

    fn mul(self, rhs: MassRate) -> MassRate {
        rhs * self
    }
}
