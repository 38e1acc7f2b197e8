pub mod length;
pub mod luminosity;
pub mod mass;
pub mod mass_rate;
pub mod number_density;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod volume_density;

#[cfg(test)]
mod length_test;
#[cfg(test)]
mod number_density_test;

pub use length::{Length, AU_TO_M, SOLAR_RADIUS_M};
pub use luminosity::Luminosity;
pub use mass::{Mass, SOLAR_MASS_KG};
pub use mass_rate::MassRate;
pub use number_density::{NumberDensity, H2_MASS_KG, HYDROGEN_MASS_KG};
pub use temperature::Temperature;
pub use time::{Time, SECONDS_PER_YEAR};
pub use velocity::{keplerian_velocity, Velocity, GRAVITATIONAL_CONSTANT_SI};
pub use volume_density::VolumeDensity;
