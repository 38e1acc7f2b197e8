//! Integrated properties of a sampled model.

use std::fmt;

use serde::Serialize;
use tracing::debug;
use units::{Mass, MassRate, NumberDensity, Temperature, Time, H2_MASS_KG};

use crate::density::DensityField;
use crate::error::{ensure_len, ModelResult};
use crate::grid::CartesianGrid;
use crate::temperature::TemperatureField;

/// Summary of a density/temperature model over its grid.
///
/// Masses assume every particle is an H2 molecule and every node stands for
/// one grid cell. Temperature statistics only cover occupied nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelProperties {
    pub total_mass: Mass,
    pub disc_mass: Mass,
    pub envelope_mass: Mass,
    /// Density-weighted mean temperature
    pub mean_temperature: Temperature,
    pub min_temperature: Temperature,
    pub max_temperature: Temperature,
    pub peak_density: NumberDensity,
    pub occupied_nodes: usize,
    pub n_points: usize,
}

impl ModelProperties {
    pub fn compute(
        density: &DensityField,
        temperature: &TemperatureField,
        grid: &CartesianGrid,
    ) -> ModelResult<Self> {
        let n = grid.n_points();
        ensure_len("total density", &density.total, n)?;
        ensure_len("disc density", &density.disc, n)?;
        ensure_len("envelope density", &density.envelope, n)?;
        ensure_len("temperature", &temperature.total, n)?;

        let mut disc_particles = 0.0;
        let mut envelope_particles = 0.0;
        let mut weighted_temperature = 0.0;
        let mut t_min = f64::INFINITY;
        let mut t_max = f64::NEG_INFINITY;
        let mut peak: f64 = 0.0;
        let mut occupied = 0usize;

        for i in 0..n {
            let n_total = density.total[i];
            if n_total <= 0.0 {
                continue;
            }
            let t = temperature.total[i];

            disc_particles += density.disc[i];
            envelope_particles += density.envelope[i];
            weighted_temperature += n_total * t;
            t_min = t_min.min(t);
            t_max = t_max.max(t);
            peak = peak.max(n_total);
            occupied += 1;
        }

        let dv = grid.cell_volume();
        let disc_mass = Mass::from_kg(disc_particles * H2_MASS_KG * dv);
        let envelope_mass = Mass::from_kg(envelope_particles * H2_MASS_KG * dv);
        let total_particles = disc_particles + envelope_particles;

        let (mean, t_min, t_max) = if occupied > 0 {
            (weighted_temperature / total_particles, t_min, t_max)
        } else {
            (0.0, 0.0, 0.0)
        };

        debug!(occupied, n_points = n, "integrated model properties");

        Ok(Self {
            total_mass: disc_mass + envelope_mass,
            disc_mass,
            envelope_mass,
            mean_temperature: Temperature::from_kelvin(mean),
            min_temperature: Temperature::from_kelvin(t_min),
            max_temperature: Temperature::from_kelvin(t_max),
            peak_density: NumberDensity::from_per_m3(peak),
            occupied_nodes: occupied,
            n_points: n,
        })
    }

    /// Time for the envelope to fall in at a constant rate.
    pub fn infall_timescale(&self, infall_rate: MassRate) -> Time {
        let years = self.envelope_mass.to_solar_masses() / infall_rate.to_solar_masses_per_year();
        Time::from_years(years)
    }
}

impl fmt::Display for ModelProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total mass (M☉): {:.5e}", self.total_mass.to_solar_masses())?;
        writeln!(f, "  disc:     {:.5e}", self.disc_mass.to_solar_masses())?;
        writeln!(f, "  envelope: {:.5e}", self.envelope_mass.to_solar_masses())?;
        writeln!(
            f,
            "Mass-weighted mean temperature (K): {:.3}",
            self.mean_temperature.to_kelvin()
        )?;
        writeln!(
            f,
            "Temperature range (K): {:.3} - {:.3}",
            self.min_temperature.to_kelvin(),
            self.max_temperature.to_kelvin()
        )?;
        writeln!(
            f,
            "Peak H2 number density (cm^-3): {:.5e}",
            self.peak_density.to_per_cm3()
        )?;
        write!(f, "Occupied nodes: {} of {}", self.occupied_nodes, self.n_points)
    }
}
