use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Effective temperature of the Sun used for stellar scaling relations (K)
pub const SOLAR_EFFECTIVE_TEMPERATURE_K: f64 = 5780.0;

/// A physical temperature quantity using f64 precision.
///
/// The `Temperature` struct represents temperature with Kelvin as the base unit,
/// following astrophysical conventions. Kelvin is the natural choice for
/// gas and dust temperatures as it's an absolute scale starting at zero.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let envelope_10au = Temperature::from_kelvin(250.0);
/// let floor = Temperature::from_kelvin(10.0);
///
/// let clamped = Temperature::from_kelvin(4.0).max(floor);
/// assert_eq!(clamped.to_kelvin(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    ///
    /// This is the most direct constructor since Kelvin is the base unit.
    ///
    /// # Arguments
    ///
    /// * `value` - The temperature in Kelvin
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Returns the temperature value in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Effective temperature of the Sun (5780 K).
    pub fn solar_effective() -> Self {
        Self(SOLAR_EFFECTIVE_TEMPERATURE_K)
    }

    /// Returns the higher of two temperatures.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }

    /// Returns the lower of two temperatures.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }

    /// Power function
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }
}

impl Add for Temperature {
    type Output = Temperature;

    fn add(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 + rhs.0)
    }
}

impl Sub for Temperature {
    type Output = Temperature;

    fn sub(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 - rhs.0)
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}

impl Div<f64> for Temperature {
    type Output = Temperature;

    fn div(self, rhs: f64) -> Temperature {
        Temperature(self.0 / rhs)
    }
}

/// Allow f64 * Temperature (commutative multiplication)
impl Mul<Temperature> for f64 {
    type Output = Temperature;

    fn mul(self, rhs: Temperature) -> Temperature {
        rhs * self
    }
}
