use crate::length::Length;
use crate::mass::Mass;
use std::ops::{Add, Div, Mul, Sub};

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²)
pub const GRAVITATIONAL_CONSTANT_SI: f64 = 6.674e-11;

/// Circular Keplerian velocity around a point mass.
///
/// v_K = √(G M / r)
///
/// # Examples
/// ```
/// use units::{keplerian_velocity, Length, Mass};
///
/// // Earth's orbital velocity is ~29.8 km/s
/// let v = keplerian_velocity(Mass::from_solar_masses(1.0), Length::from_au(1.0));
/// assert!((v.to_km_per_sec() - 29.8).abs() < 0.2);
/// ```
pub fn keplerian_velocity(central_mass: Mass, radius: Length) -> Velocity {
    let v = (GRAVITATIONAL_CONSTANT_SI * central_mass.to_kg() / radius.to_m()).sqrt();
    Velocity::from_meters_per_sec(v)
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: m/s

impl Velocity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}
