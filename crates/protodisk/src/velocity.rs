//! Gas velocity of a star–disc–envelope system.
//!
//! The envelope moves along Ulrich streamlines, conserving the angular
//! momentum it had at μ₀:
//!
//! ```text
//! v_r = −v_k √(1 + μ/μ₀)
//! v_θ =  v_k (μ₀ − μ) / sin θ · √(1 + μ/μ₀)
//! v_φ =  v_k √(1 − μ₀²) / sin θ · √(1 − μ/μ₀)
//! ```
//!
//! with v_k = √(G M★ / r), while the disc rotates at the Keplerian speed
//! √(G M★ / R). Where both components overlap the velocity is the
//! density-weighted mean.

use nalgebra::Vector3;
use tracing::debug;
use units::{Length, Mass, Velocity};

use crate::constants::G;
use crate::density::{streamline_ratio, DensityField};
use crate::error::{ensure_len, ensure_positive, ModelResult};
use crate::grid::{CartesianGrid, GridNode};

/// Cartesian gas velocity per node (m/s).
#[derive(Debug, Clone)]
pub struct VelocityField {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl VelocityField {
    /// Velocity of every grid node for a density aggregate.
    ///
    /// # Arguments
    /// * `stellar_mass` - Central mass driving infall and rotation
    /// * `centrifugal_radius` - r_d of the infalling envelope
    /// * `density` - Disc and envelope number densities used as weights
    /// * `grid` - Grid the density was sampled on
    pub fn compute(
        stellar_mass: Mass,
        centrifugal_radius: Length,
        density: &DensityField,
        grid: &CartesianGrid,
    ) -> ModelResult<Self> {
        let n = grid.n_points();
        ensure_len("disc density", &density.disc, n)?;
        ensure_len("envelope density", &density.envelope, n)?;
        ensure_len("envelope streamline", &density.streamline, n)?;
        ensure_positive("mstar", stellar_mass.to_kg())?;
        ensure_positive("rd", centrifugal_radius.to_m())?;

        let gm = G * stellar_mass.to_kg();
        let rd = centrifugal_radius.to_m();

        let mut x = vec![0.0; n];
        let mut y = vec![0.0; n];
        let mut z = vec![0.0; n];
        let mut max_speed: f64 = 0.0;

        for node in grid.nodes() {
            let i = node.index;
            let n_disc = density.disc[i];
            let n_env = density.envelope[i];
            let weight = n_disc + n_env;
            if weight <= 0.0 {
                continue;
            }

            let mut v = Vector3::zeros();
            if n_env > 0.0 {
                v += n_env * envelope_velocity(gm, rd, density.streamline[i], &node);
            }
            if n_disc > 0.0 {
                v += n_disc * disc_velocity(gm, &node);
            }
            v /= weight;

            max_speed = max_speed.max(v.norm());
            x[i] = v.x;
            y[i] = v.y;
            z[i] = v.z;
        }

        debug!(
            max_speed_km_s = Velocity::from_meters_per_sec(max_speed).to_km_per_sec(),
            "computed velocity field"
        );

        Ok(Self { x, y, z })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Unit vectors (r̂, θ̂, φ̂) at a node.
fn spherical_basis(node: &GridNode) -> [Vector3<f64>; 3] {
    let (sin_t, cos_t) = (node.sin_theta(), node.cos_theta());
    let (sin_p, cos_p) = node.phi.sin_cos();

    [
        Vector3::new(sin_t * cos_p, sin_t * sin_p, cos_t),
        Vector3::new(cos_t * cos_p, cos_t * sin_p, -sin_t),
        Vector3::new(-sin_p, cos_p, 0.0),
    ]
}

/// Ulrich infall velocity in Cartesian components.
fn envelope_velocity(gm: f64, rd: f64, mu0: f64, node: &GridNode) -> Vector3<f64> {
    if node.r <= 0.0 {
        return Vector3::zeros();
    }

    let v_k = (gm / node.r).sqrt();
    let mu = node.cos_theta();
    let sin_t = node.sin_theta();
    let ratio = streamline_ratio(mu, mu0, node.r / rd);

    let infall = (1.0 + ratio).max(0.0).sqrt();
    let v_r = -v_k * infall;
    let (v_theta, v_phi) = if sin_t > 0.0 {
        (
            v_k * (mu0 - mu) / sin_t * infall,
            v_k * (1.0 - mu0 * mu0).max(0.0).sqrt() / sin_t * (1.0 - ratio).max(0.0).sqrt(),
        )
    } else {
        (0.0, 0.0)
    };

    let [e_r, e_theta, e_phi] = spherical_basis(node);
    v_r * e_r + v_theta * e_theta + v_phi * e_phi
}

/// Keplerian rotation about the z axis.
fn disc_velocity(gm: f64, node: &GridNode) -> Vector3<f64> {
    if node.cylindrical_radius <= 0.0 {
        return Vector3::zeros();
    }
    let v_phi = (gm / node.cylindrical_radius).sqrt();
    let [_, _, e_phi] = spherical_basis(node);
    v_phi * e_phi
}
