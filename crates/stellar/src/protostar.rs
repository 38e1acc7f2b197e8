//! Central protostar of a star–disc–envelope system.
//!
//! Radius and luminosity follow main-sequence-like power laws in mass, and the
//! effective temperature follows from Stefan–Boltzmann relative to the Sun:
//!
//! | quantity | relation |
//! |----------|----------|
//! | radius | R = R☉ (M/M☉)^0.8 |
//! | luminosity | L = L☉ (M/M☉)^4 |
//! | temperature | T = T☉ ((L/L☉) / (R/R☉)²)^¼ |

use serde::{Deserialize, Serialize};
use std::fmt;
use units::{Length, Luminosity, Mass, Temperature};

use crate::error::StellarError;

/// Exponent of the mass–radius relation
pub const RADIUS_MASS_EXPONENT: f64 = 0.8;

/// Exponent of the mass–luminosity relation
pub const LUMINOSITY_MASS_EXPONENT: f64 = 4.0;

/// Physical parameters of the central star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protostar {
    pub mass: Mass,
    pub radius: Length,
    pub luminosity: Luminosity,
    pub temperature: Temperature,
}

impl Protostar {
    /// Derive radius, luminosity and effective temperature from the mass.
    ///
    /// # Examples
    /// ```
    /// use stellar::Protostar;
    /// use units::Mass;
    ///
    /// let star = Protostar::from_mass(Mass::from_solar_masses(1.0)).unwrap();
    /// assert!((star.temperature.to_kelvin() - 5780.0).abs() < 1e-9);
    /// ```
    pub fn from_mass(mass: Mass) -> Result<Self, StellarError> {
        if !mass.is_positive() {
            return Err(StellarError::NonPositiveMass(mass.to_solar_masses()));
        }

        let m = mass.to_solar_masses();
        let radius = Length::from_solar_radii(m.powf(RADIUS_MASS_EXPONENT));
        let luminosity = Luminosity::from_solar(m.powf(LUMINOSITY_MASS_EXPONENT));

        Self::with_radius_and_luminosity(mass, radius, luminosity)
    }

    /// Build a star from independently known radius and luminosity.
    ///
    /// The effective temperature is still derived from L and R.
    pub fn with_radius_and_luminosity(
        mass: Mass,
        radius: Length,
        luminosity: Luminosity,
    ) -> Result<Self, StellarError> {
        if !mass.is_positive() {
            return Err(StellarError::NonPositiveMass(mass.to_solar_masses()));
        }
        if !radius.is_positive() {
            return Err(StellarError::NonPositiveRadius(radius.to_solar_radii()));
        }

        let r = radius.to_solar_radii();
        let temperature =
            Temperature::solar_effective() * (luminosity.to_solar() / (r * r)).powf(0.25);

        Ok(Self {
            mass,
            radius,
            luminosity,
            temperature,
        })
    }
}

impl fmt::Display for Protostar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RStar: {:.4} R☉, LStar: {:.4} L☉, TStar: {:.1} K",
            self.radius.to_solar_radii(),
            self.luminosity.to_solar(),
            self.temperature.to_kelvin()
        )
    }
}
