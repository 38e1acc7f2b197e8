//! Rotating, infalling envelope (Ulrich 1976).
//!
//! Material falls ballistically from large radii, conserving the specific
//! angular momentum it had at polar angle θ₀. A parcel observed at (r, θ)
//! left on the streamline with μ₀ = cos θ₀ satisfying
//!
//! ```text
//! μ₀³ + μ₀ (r/r_d − 1) − μ r/r_d = 0
//! ```
//!
//! and the density along the streamline is
//!
//! ```text
//! ρ = ρ₀ (r/r_d)^(−3/2) (1 + μ/μ₀)^(−1/2) (μ/μ₀ + 2 μ₀² r_d/r)^(−1)
//! ```

use tracing::debug;
use units::{Length, NumberDensity, VolumeDensity};

use crate::error::{ensure_positive, ModelResult};
use crate::grid::{CartesianGrid, GridNode};

/// Below this |μ₀| the ratio μ/μ₀ is replaced by its analytic limit
const STREAMLINE_EPSILON: f64 = 1e-10;

/// Caps the midplane density singularity at r = r_d
const MIN_STREAMLINE_TERM: f64 = 1e-3;

/// Streamline (μ₀) through a point at `r_over_rd = r / r_d` and `mu = cos θ`.
///
/// Returns the real root with the sign of μ and |μ₀| ≤ 1.
pub fn solve_streamline(r_over_rd: f64, mu: f64) -> f64 {
    let p = r_over_rd - 1.0;
    let q = -mu.abs() * r_over_rd;

    let discriminant = (q / 2.0).powi(2) + (p / 3.0).powi(3);
    let root = if discriminant >= 0.0 {
        // One real root (Cardano)
        let s = discriminant.sqrt();
        (-q / 2.0 + s).cbrt() + (-q / 2.0 - s).cbrt()
    } else {
        // Three real roots (only possible inside r_d): take the largest,
        // which is the unique non-negative one for q ≤ 0
        let m = 2.0 * (-p / 3.0).sqrt();
        let arg = (3.0 * q / (p * m)).clamp(-1.0, 1.0);
        m * (arg.acos() / 3.0).cos()
    };

    root.clamp(0.0, 1.0).copysign(if mu < 0.0 { -1.0 } else { 1.0 })
}

/// μ/μ₀, using the limit 1 − r_d/r when μ₀ → 0.
pub fn streamline_ratio(mu: f64, mu0: f64, r_over_rd: f64) -> f64 {
    if mu0.abs() < STREAMLINE_EPSILON {
        (1.0 - 1.0 / r_over_rd).max(0.0)
    } else {
        mu / mu0
    }
}

/// Envelope density sampled on a grid.
#[derive(Debug, Clone)]
pub struct EnvelopeDensity {
    /// H2 number density per node (m⁻³)
    pub number_density: Vec<f64>,

    /// Streamline cosine μ₀ per node (zero outside the envelope)
    pub streamline: Vec<f64>,

    /// Outer envelope radius
    pub r_max: Length,
}

/// Ulrich envelope parameters.
#[derive(Debug, Clone, Copy)]
pub struct UlrichEnvelope {
    stellar_radius: Length,
    centrifugal_radius: Length,
    rho0: VolumeDensity,
    r_max: Length,
}

impl UlrichEnvelope {
    /// # Arguments
    /// * `stellar_radius` - Inner cut; nodes inside the star are empty
    /// * `centrifugal_radius` - r_d
    /// * `rho0` - Reference density, see [`crate::envelope_reference_density`]
    /// * `r_max` - Outer envelope radius
    pub fn new(
        stellar_radius: Length,
        centrifugal_radius: Length,
        rho0: VolumeDensity,
        r_max: Length,
    ) -> ModelResult<Self> {
        ensure_positive("stellar_radius", stellar_radius.to_m())?;
        ensure_positive("centrifugal_radius", centrifugal_radius.to_m())?;
        ensure_positive("rho0", rho0.to_kg_per_m3())?;
        ensure_positive("renv_max", r_max.to_m())?;

        Ok(Self {
            stellar_radius,
            centrifugal_radius,
            rho0,
            r_max,
        })
    }

    /// Whether a node lies inside the envelope shell.
    pub fn contains(&self, node: &GridNode) -> bool {
        node.r >= self.stellar_radius.to_m() && node.r <= self.r_max.to_m()
    }

    /// Mass density and streamline at a node, or `None` outside the envelope.
    pub fn sample(&self, node: &GridNode) -> Option<(VolumeDensity, f64)> {
        if !self.contains(node) {
            return None;
        }

        let r_over_rd = node.r / self.centrifugal_radius.to_m();
        let mu = node.cos_theta();
        let mu0 = solve_streamline(r_over_rd, mu);
        let ratio = streamline_ratio(mu, mu0, r_over_rd);

        let term = (ratio + 2.0 * mu0 * mu0 / r_over_rd).max(MIN_STREAMLINE_TERM);
        let rho = self.rho0.to_kg_per_m3()
            * r_over_rd.powf(-1.5)
            * (1.0 + ratio).max(MIN_STREAMLINE_TERM).powf(-0.5)
            / term;

        Some((VolumeDensity::from_kg_per_m3(rho), mu0))
    }

    /// Sample the envelope over every grid node.
    pub fn compute(&self, grid: &CartesianGrid) -> EnvelopeDensity {
        let n = grid.n_points();
        let mut number_density = vec![0.0; n];
        let mut streamline = vec![0.0; n];

        for node in grid.nodes() {
            if let Some((rho, mu0)) = self.sample(&node) {
                number_density[node.index] = NumberDensity::h2_from_mass_density(rho).to_per_m3();
                streamline[node.index] = mu0;
            }
        }

        debug!(
            rho0_kg_m3 = self.rho0.to_kg_per_m3(),
            rd_au = self.centrifugal_radius.to_au(),
            renv_max_au = self.r_max.to_au(),
            "sampled Ulrich envelope"
        );

        EnvelopeDensity {
            number_density,
            streamline,
            r_max: self.r_max,
        }
    }
}
