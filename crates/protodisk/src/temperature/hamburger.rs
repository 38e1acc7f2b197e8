//! Temperature of a star–disc–envelope system.
//!
//! The envelope follows a radial power law normalised at 10 AU, the disc is
//! heated by accretion with a Gaussian vertical modulation, and each node
//! takes the density-weighted mean of the two components:
//!
//! ```text
//! T_env(r)    = T₁₀ 10^0.33 (r / AU)^(−0.33)
//! T_mid(R)    = (B_T · 3 G M★ Ṁ / (8π σ R³) · (1 − √(R★/R)))^¼
//! T_disc(R,z) = max(T_mid exp(∓z² / 8H²), T_min)
//! T           = (n_disc T_disc + n_env T_env) / (n_disc + n_env)
//! ```
//!
//! The inverted variant heats the disc surface (`+z²`) instead of cooling it.

use stellar::Protostar;
use tracing::debug;
use units::{Length, MassRate, Temperature};

use crate::constants::{G, PI, SIGMA_SB};
use crate::density::DensityField;
use crate::error::{ensure_len, ensure_positive, ModelError, ModelResult};
use crate::grid::CartesianGrid;

/// Radial power-law index of the envelope temperature
const ENVELOPE_TEMPERATURE_INDEX: f64 = 0.33;

/// Radius at which the envelope temperature equals T₁₀ (AU)
const ENVELOPE_REFERENCE_RADIUS_AU: f64 = 10.0;

const DEFAULT_MIN_DISC_TEMPERATURE_K: f64 = 10.0;

/// Temperature sampled on a grid (K).
#[derive(Debug, Clone)]
pub struct TemperatureField {
    /// Density-weighted temperature per node
    pub total: Vec<f64>,
    /// Disc temperature per node, zero outside the disc
    pub disc: Vec<f64>,
    /// Envelope temperature per node, zero outside the envelope
    pub envelope: Vec<f64>,
}

impl TemperatureField {
    pub fn len(&self) -> usize {
        self.total.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }
}

/// Accretion-heated disc inside a power-law envelope.
#[derive(Debug, Clone, Copy)]
pub struct HamburgerTemperature {
    stellar_temperature: Temperature,
    stellar_radius: Length,
    accretion_flux: f64,
    t10_env: Temperature,
    t_min_disc: Temperature,
    inverted: bool,
}

impl HamburgerTemperature {
    /// # Arguments
    /// * `star` - Central protostar
    /// * `infall_rate` - Mass accretion rate onto the star
    /// * `t10_env` - Envelope temperature at 10 AU
    /// * `bt` - Dimensionless scaling of the disc accretion heating
    pub fn new(
        star: &Protostar,
        infall_rate: MassRate,
        t10_env: Temperature,
        bt: f64,
    ) -> ModelResult<Self> {
        ensure_positive("infall_rate", infall_rate.to_kg_per_sec())?;
        ensure_positive("t10_env", t10_env.to_kelvin())?;
        ensure_positive("bt", bt)?;

        // B_T · 3 G M Ṁ / (8π σ), multiplied by R⁻³ per node
        let accretion_flux = bt * 3.0 * G * star.mass.to_kg() * infall_rate.to_kg_per_sec()
            / (8.0 * PI * SIGMA_SB);

        Ok(Self {
            stellar_temperature: star.temperature,
            stellar_radius: star.radius,
            accretion_flux,
            t10_env,
            t_min_disc: Temperature::from_kelvin(DEFAULT_MIN_DISC_TEMPERATURE_K),
            inverted: false,
        })
    }

    /// Floor applied to disc temperatures.
    pub fn with_min_disc_temperature(mut self, t_min: Temperature) -> ModelResult<Self> {
        let kelvin = t_min.to_kelvin();
        if !kelvin.is_finite() || kelvin < 0.0 {
            return Err(ModelError::InvalidParameter {
                name: "tmin",
                reason: format!("must be non-negative, got {kelvin} K"),
            });
        }
        self.t_min_disc = t_min;
        Ok(self)
    }

    /// Heat the disc surface instead of the midplane.
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Envelope temperature at spherical radius r.
    pub fn envelope_temperature(&self, r: Length) -> Temperature {
        let scale = ENVELOPE_REFERENCE_RADIUS_AU.powf(ENVELOPE_TEMPERATURE_INDEX);
        self.t10_env * (scale * r.to_au().powf(-ENVELOPE_TEMPERATURE_INDEX))
    }

    /// Accretion-heated midplane temperature at cylindrical radius R.
    ///
    /// Zero at and inside the stellar surface.
    pub fn midplane_temperature(&self, cylindrical_radius: Length) -> Temperature {
        let big_r = cylindrical_radius.to_m();
        let r_star = self.stellar_radius.to_m();
        if big_r <= r_star {
            return Temperature::from_kelvin(0.0);
        }
        let flux = self.accretion_flux / big_r.powi(3) * (1.0 - (r_star / big_r).sqrt());
        Temperature::from_kelvin(flux.powf(0.25))
    }

    /// Disc temperature at height z above the midplane, floored at T_min.
    pub fn disc_temperature(
        &self,
        cylindrical_radius: Length,
        z: Length,
        scale_height: Length,
    ) -> Temperature {
        let sign = if self.inverted { 1.0 } else { -1.0 };
        let h = scale_height.to_m();
        let vertical = if h > 0.0 {
            (sign * z.to_m().powi(2) / (8.0 * h * h)).exp()
        } else {
            1.0
        };
        (self.midplane_temperature(cylindrical_radius) * vertical).max(self.t_min_disc)
    }

    /// Temperature of every grid node for a density aggregate.
    pub fn compute(
        &self,
        density: &DensityField,
        grid: &CartesianGrid,
    ) -> ModelResult<TemperatureField> {
        let n = grid.n_points();
        ensure_len("disc density", &density.disc, n)?;
        ensure_len("envelope density", &density.envelope, n)?;
        ensure_len("scale height", &density.scale_height, n)?;

        let r_star = self.stellar_radius.to_m();
        let t_min = self.t_min_disc.to_kelvin();

        let mut total = vec![t_min; n];
        let mut disc = vec![0.0; n];
        let mut envelope = vec![0.0; n];
        let mut floored = 0usize;

        for node in grid.nodes() {
            let i = node.index;

            if node.r < r_star {
                total[i] = self.stellar_temperature.to_kelvin();
                continue;
            }

            let n_disc = density.disc[i];
            let n_env = density.envelope[i];

            if n_env > 0.0 {
                envelope[i] = self.envelope_temperature(Length::from_m(node.r)).to_kelvin();
            }
            if n_disc > 0.0 {
                let t = self.disc_temperature(
                    Length::from_m(node.cylindrical_radius),
                    Length::from_m(node.z),
                    Length::from_m(density.scale_height[i]),
                );
                if t.to_kelvin() <= t_min {
                    floored += 1;
                }
                disc[i] = t.to_kelvin();
            }

            let weight = n_disc + n_env;
            if weight > 0.0 {
                total[i] = (n_disc * disc[i] + n_env * envelope[i]) / weight;
            }
        }

        debug!(
            t10_env_k = self.t10_env.to_kelvin(),
            tmin_k = t_min,
            inverted = self.inverted,
            floored_disc_nodes = floored,
            "computed hamburger temperature"
        );

        Ok(TemperatureField {
            total,
            disc,
            envelope,
        })
    }
}
