use units::Length;

use super::hamburger::DiscDensity;
use super::ulrich::EnvelopeDensity;
use crate::error::{ensure_len, ModelResult};

/// Density aggregate over the grid, keeping disc and envelope contributions.
///
/// `total` is always the node-wise sum of `disc` and `envelope`.
#[derive(Debug, Clone)]
pub struct DensityField {
    /// Total H2 number density (m⁻³)
    pub total: Vec<f64>,
    /// Disc contribution (m⁻³)
    pub disc: Vec<f64>,
    /// Envelope contribution (m⁻³)
    pub envelope: Vec<f64>,
    /// Disc scale height per node (m)
    pub scale_height: Vec<f64>,
    /// Disc–envelope transition radius
    pub transition_radius: Length,
    pub disc_flag: bool,
    pub env_flag: bool,
    /// Outer disc radius
    pub r_disc: Length,
    /// Outer envelope radius
    pub r_env: Length,
    /// Envelope streamline μ₀ per node
    pub streamline: Vec<f64>,
}

impl DensityField {
    /// Envelope-only aggregate.
    pub fn from_envelope(envelope: EnvelopeDensity) -> Self {
        let n = envelope.number_density.len();
        Self {
            total: envelope.number_density.clone(),
            disc: vec![0.0; n],
            envelope: envelope.number_density,
            scale_height: vec![0.0; n],
            transition_radius: Length::zero(),
            disc_flag: false,
            env_flag: true,
            r_disc: Length::zero(),
            r_env: envelope.r_max,
            streamline: envelope.streamline,
        }
    }

    /// Disc-only aggregate.
    pub fn from_disc(disc: DiscDensity) -> Self {
        let n = disc.number_density.len();
        Self {
            total: disc.number_density.clone(),
            disc: disc.number_density,
            envelope: vec![0.0; n],
            scale_height: disc.scale_height,
            transition_radius: disc.transition_radius,
            disc_flag: true,
            env_flag: false,
            r_disc: disc.r_max,
            r_env: Length::zero(),
            streamline: vec![0.0; n],
        }
    }

    /// Disc plus envelope aggregate.
    ///
    /// Both components are moved in so the per-node arrays are reused.
    pub fn composite(disc: DiscDensity, envelope: EnvelopeDensity) -> ModelResult<Self> {
        let n = disc.number_density.len();
        ensure_len("disc scale height", &disc.scale_height, n)?;
        ensure_len("envelope density", &envelope.number_density, n)?;
        ensure_len("envelope streamline", &envelope.streamline, n)?;

        let total = disc
            .number_density
            .iter()
            .zip(&envelope.number_density)
            .map(|(d, e)| d + e)
            .collect();

        Ok(Self {
            total,
            disc: disc.number_density,
            envelope: envelope.number_density,
            scale_height: disc.scale_height,
            transition_radius: disc.transition_radius,
            disc_flag: true,
            env_flag: true,
            r_disc: disc.r_max,
            r_env: envelope.r_max,
            streamline: envelope.streamline,
        })
    }

    pub fn len(&self) -> usize {
        self.total.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }

    /// Total density scaled by a constant, e.g. m⁻³ → cm⁻³ for plotting.
    pub fn scaled_total(&self, factor: f64) -> Vec<f64> {
        self.total.iter().map(|n| n * factor).collect()
    }
}
