use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// Bolometric luminosity with the solar luminosity (L☉) as the base unit.
///
/// # Examples
///
/// ```rust
/// use units::Luminosity;
///
/// let star = Luminosity::from_solar(0.547);
/// assert_eq!((star * 2.0).to_solar(), 1.094);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: L☉

impl Luminosity {
    pub fn from_solar(value: f64) -> Self {
        Self(value)
    }

    pub fn to_solar(&self) -> f64 {
        self.0
    }
}

impl Mul<f64> for Luminosity {
    type Output = Luminosity;

    fn mul(self, rhs: f64) -> Luminosity {
        Luminosity(self.0 * rhs)
    }
}

impl Div<f64> for Luminosity {
    type Output = Luminosity;

    fn div(self, rhs: f64) -> Luminosity {
        Luminosity(self.0 / rhs)
    }
}
