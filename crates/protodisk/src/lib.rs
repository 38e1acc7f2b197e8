//! Synthetic star–disc–envelope models.
//!
//! A model is assembled in stages, each consuming the output of the previous
//! one:
//!
//! 1. **Grid** - a cubic Cartesian mesh that always contains the origin
//! 2. **Density** - Ulrich infalling envelope + flared "hamburger" disc
//! 3. **Temperature** - envelope power law and accretion-heated disc,
//!    combined by density weighting
//! 4. **Velocity** - streamline infall and Keplerian rotation
//! 5. **Chemistry** - molecular abundance and gas-to-dust ratio
//! 6. **Export** - LIME radiative-transfer input files
//!
//! All per-node fields are stored as raw SI `Vec<f64>` in the grid's node
//! order; unit types are used at the API boundaries.
//!
//! # References
//! - Ulrich (1976) - "An infalling model for the T Tauri star phenomenon"
//! - Lee et al. (2017) - "First detection of equatorial dark dust lane in a protostellar disk"

pub mod chemistry;
pub mod constants;
pub mod density;
pub mod error;
pub mod export;
pub mod grid;
pub mod properties;
pub mod temperature;
pub mod velocity;

#[cfg(test)]
mod chemistry_test;
#[cfg(test)]
mod properties_test;

pub use chemistry::{abundance, gas_to_dust};
pub use density::{
    envelope_reference_density, DensityField, DiscDensity, EnvelopeDensity, HamburgerDisc,
    UlrichEnvelope,
};
pub use error::{ModelError, ModelResult};
pub use export::{LimeFields, LimeFiles, PredefinedPoint};
pub use grid::{Axis, CartesianGrid, GridNode};
pub use properties::ModelProperties;
pub use temperature::{HamburgerTemperature, TemperatureField};
pub use velocity::VelocityField;
