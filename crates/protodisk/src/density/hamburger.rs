//! Flared "hamburger" disc (Lee et al. 2017).
//!
//! A thick, strongly flared disc in vertical hydrostatic equilibrium. With a
//! surface density Σ ∝ R^(−p) and a temperature T ∝ R^(−q), the scale height
//! grows as H ∝ R^((3−q)/2) and the density is
//!
//! ```text
//! ρ(R, z) = A_ρ ρ₀ (r_d/R)^p (H(r_d)/H(R)) exp(−z²/2H²)
//! ```
//!
//! so that the midplane density at r_d is A_ρ ρ₀ and ρ ∝ Σ/H everywhere.

use tracing::debug;
use units::{Length, NumberDensity, VolumeDensity};

use crate::error::{ensure_positive, ModelError, ModelResult};
use crate::grid::{CartesianGrid, GridNode};

const DEFAULT_SURFACE_DENSITY_EXPONENT: f64 = 1.0;
const DEFAULT_TEMPERATURE_EXPONENT: f64 = 0.5;

/// Disc density sampled on a grid.
#[derive(Debug, Clone)]
pub struct DiscDensity {
    /// H2 number density per node (m⁻³)
    pub number_density: Vec<f64>,

    /// Scale height per node (m), zero on the rotation axis
    pub scale_height: Vec<f64>,

    /// Radius where the disc hands over to the envelope
    pub transition_radius: Length,

    /// Outer disc radius
    pub r_max: Length,
}

/// Hamburger disc parameters.
#[derive(Debug, Clone, Copy)]
pub struct HamburgerDisc {
    stellar_radius: Length,
    scale_height_factor: f64,
    centrifugal_radius: Length,
    rho0: VolumeDensity,
    a_rho: f64,
    r_max: Length,
    surface_density_exponent: f64,
    temperature_exponent: f64,
}

impl HamburgerDisc {
    /// # Arguments
    /// * `stellar_radius` - R★, also the inner disc edge
    /// * `scale_height_factor` - H₀ = factor × R★
    /// * `centrifugal_radius` - r_d, density normalisation radius
    /// * `rho0` - Envelope reference density
    /// * `a_rho` - Disc-to-envelope density contrast at r_d
    /// * `r_max` - Outer disc radius
    pub fn new(
        stellar_radius: Length,
        scale_height_factor: f64,
        centrifugal_radius: Length,
        rho0: VolumeDensity,
        a_rho: f64,
        r_max: Length,
    ) -> ModelResult<Self> {
        ensure_positive("stellar_radius", stellar_radius.to_m())?;
        ensure_positive("scale_height_factor", scale_height_factor)?;
        ensure_positive("centrifugal_radius", centrifugal_radius.to_m())?;
        ensure_positive("rho0", rho0.to_kg_per_m3())?;
        ensure_positive("a_rho", a_rho)?;
        if r_max.to_m() <= stellar_radius.to_m() {
            return Err(ModelError::InvalidParameter {
                name: "rdisc_max",
                reason: format!(
                    "outer disc radius {} AU lies inside the star",
                    r_max.to_au()
                ),
            });
        }

        Ok(Self {
            stellar_radius,
            scale_height_factor,
            centrifugal_radius,
            rho0,
            a_rho,
            r_max,
            surface_density_exponent: DEFAULT_SURFACE_DENSITY_EXPONENT,
            temperature_exponent: DEFAULT_TEMPERATURE_EXPONENT,
        })
    }

    /// Override the surface density (p) and temperature (q) power-law exponents.
    pub fn with_exponents(mut self, surface_density: f64, temperature: f64) -> Self {
        self.surface_density_exponent = surface_density;
        self.temperature_exponent = temperature;
        self
    }

    /// Reference scale height H₀ at the stellar surface.
    pub fn base_scale_height(&self) -> Length {
        self.stellar_radius * self.scale_height_factor
    }

    /// Flaring index of H(R) ∝ R^index.
    pub fn flaring_index(&self) -> f64 {
        0.5 * (3.0 - self.temperature_exponent)
    }

    /// Scale height at cylindrical radius R.
    /// H = H₀ (R/R★)^((3−q)/2)
    pub fn scale_height(&self, cylindrical_radius: Length) -> Length {
        let ratio = cylindrical_radius / self.stellar_radius;
        self.base_scale_height() * ratio.powf(self.flaring_index())
    }

    /// Whether a node lies in the radial extent of the disc.
    pub fn contains(&self, node: &GridNode) -> bool {
        node.cylindrical_radius >= self.stellar_radius.to_m()
            && node.cylindrical_radius <= self.r_max.to_m()
    }

    /// Mass density at a node, or `None` outside the disc.
    pub fn sample(&self, node: &GridNode) -> Option<VolumeDensity> {
        if !self.contains(node) {
            return None;
        }

        let big_r = node.cylindrical_radius;
        let rd = self.centrifugal_radius.to_m();
        let h = self.scale_height(Length::from_m(big_r)).to_m();
        let h_rd = self.scale_height(self.centrifugal_radius).to_m();

        let rho = self.a_rho
            * self.rho0.to_kg_per_m3()
            * (rd / big_r).powf(self.surface_density_exponent)
            * (h_rd / h)
            * (-0.5 * (node.z / h).powi(2)).exp();

        Some(VolumeDensity::from_kg_per_m3(rho))
    }

    /// Sample the disc over every grid node.
    pub fn compute(&self, grid: &CartesianGrid) -> DiscDensity {
        let n = grid.n_points();
        let mut number_density = vec![0.0; n];
        let mut scale_height = vec![0.0; n];

        for node in grid.nodes() {
            if node.cylindrical_radius > 0.0 {
                scale_height[node.index] =
                    self.scale_height(Length::from_m(node.cylindrical_radius)).to_m();
            }
            if let Some(rho) = self.sample(&node) {
                number_density[node.index] = NumberDensity::h2_from_mass_density(rho).to_per_m3();
            }
        }

        debug!(
            h0_au = self.base_scale_height().to_au(),
            h_rd_au = self.scale_height(self.centrifugal_radius).to_au(),
            rdisc_max_au = self.r_max.to_au(),
            "sampled hamburger disc"
        );

        DiscDensity {
            number_density,
            scale_height,
            transition_radius: self.centrifugal_radius,
            r_max: self.r_max,
        }
    }
}
