//! Gas density models.
//!
//! Each component model samples a grid into a raw component
//! ([`EnvelopeDensity`], [`DiscDensity`]); [`DensityField`] wraps components
//! into the aggregate that temperature, velocity and export stages read.
//! Number densities are molecular hydrogen per m³.

mod accretion;
mod composite;
mod hamburger;
mod ulrich;

#[cfg(test)]
mod ulrich_test;

pub use accretion::envelope_reference_density;
pub use composite::DensityField;
pub use hamburger::{DiscDensity, HamburgerDisc};
pub use ulrich::{solve_streamline, streamline_ratio, EnvelopeDensity, UlrichEnvelope};
