//! Run configuration.
//!
//! Every field has a default, and the defaults reproduce the reference
//! hamburger run: a 0.86 M☉ protostar accreting 5×10⁻⁶ M☉/yr from an
//! envelope with r_d = 264 AU, sampled on a 201³ grid spanning ±500 AU.
//! A JSON file only needs the fields it changes:
//!
//! ```json
//! { "grid": { "divisions": 100 }, "temperature": { "inverted": true } }
//! ```
//!
//! Lengths are in AU, masses in M☉, rates in M☉/yr and temperatures in K.

use std::path::Path;

use modelplot::Colormap;
use protodisk::Axis;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use units::{Length, Mass, MassRate, Temperature};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for '{key}': {value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &str, value: impl ToString, reason: &str) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarConfig {
    /// Stellar mass (M☉)
    pub mass: Mass,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            mass: Mass::from_solar_masses(0.86),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Half edge of the cubic box (AU)
    pub half_extent: Length,
    /// Divisions per axis; even counts gain one node so the origin is sampled
    pub divisions: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            half_extent: Length::from_au(500.0),
            divisions: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvelopeConfig {
    /// Mass infall rate (M☉/yr)
    pub infall_rate: MassRate,
    /// Centrifugal radius r_d (AU)
    pub centrifugal_radius: Length,
    /// Outer envelope radius in units of r_d
    pub outer_radius_factor: f64,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            infall_rate: MassRate::from_solar_masses_per_year(5e-6),
            centrifugal_radius: Length::from_au(264.0),
            outer_radius_factor: 2.5,
        }
    }
}

impl EnvelopeConfig {
    pub fn outer_radius(&self) -> Length {
        self.centrifugal_radius * self.outer_radius_factor
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiscConfig {
    /// H₀ in units of the stellar radius
    pub scale_height_factor: f64,
    /// Disc-to-envelope density contrast at r_d (A_ρ)
    pub density_contrast: f64,
    /// Outer disc radius in units of r_d
    pub outer_radius_factor: f64,
    /// Surface density power-law index p
    pub surface_density_exponent: f64,
    /// Temperature power-law index q, sets the flaring
    pub temperature_exponent: f64,
}

impl Default for DiscConfig {
    fn default() -> Self {
        Self {
            scale_height_factor: 0.03,
            density_contrast: 5.25,
            outer_radius_factor: 1.5,
            surface_density_exponent: 1.0,
            temperature_exponent: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemperatureConfig {
    /// Envelope temperature at 10 AU (K)
    pub t10_env: Temperature,
    /// Lowest disc temperature (K)
    pub min_disc: Temperature,
    /// Scaling of the disc accretion heating
    pub bt: f64,
    /// Heat the disc surface rather than the midplane
    pub inverted: bool,
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        Self {
            t10_env: Temperature::from_kelvin(250.0),
            min_disc: Temperature::from_kelvin(10.0),
            bt: 60.0,
            inverted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChemistryConfig {
    /// Molecular abundance relative to H2
    pub abundance: f64,
    /// Gas-to-dust mass ratio
    pub gas_to_dust: f64,
}

impl Default for ChemistryConfig {
    fn default() -> Self {
        Self {
            abundance: 5e-8,
            gas_to_dust: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    /// Suffix of every plot file name
    pub tag: String,
    /// Also write the occupied nodes with positions to `submodel_<tag>.dat`
    pub submodel: bool,
    /// Also write a LIME predefined grid to `pregrid_<tag>.dat`
    pub predefined_grid: bool,
    /// Sink points appended to the predefined grid
    pub sink_points: usize,
    /// Temperature of sink points (K)
    pub background_temperature: Temperature,
    /// Seed for sink point placement
    pub seed: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            tag: "Burger".to_string(),
            submodel: false,
            predefined_grid: false,
            sink_points: 0,
            background_temperature: Temperature::from_kelvin(2.725),
            seed: 6611304,
        }
    }
}

/// Quantity shown in a plane plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlotQuantity {
    /// H2 number density (cm⁻³)
    Density,
    /// Gas temperature (K)
    Temperature,
    /// Density × temperature (K cm⁻³)
    Emissivity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanePlotConfig {
    /// File stem; the plot is written to `<name>_<tag>.png`
    pub name: String,
    pub quantity: PlotQuantity,
    /// Axis normal to the plane
    pub normal: Axis,
    /// Plane position along `normal` (AU)
    pub coordinate: Length,
    pub vmin: f64,
    pub vmax: f64,
    pub colormap: Colormap,
}

impl PlanePlotConfig {
    fn new(name: &str, quantity: PlotQuantity, normal: Axis, vmin: f64, vmax: f64) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            normal,
            coordinate: Length::zero(),
            vmin,
            vmax,
            colormap: Colormap::OceanR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScatterPlotConfig {
    /// Points drawn
    pub n_rand: usize,
    /// Sampling weight in units of T₁₀; nodes at least this hot are always accepted
    pub weight_factor: f64,
    /// Density colour limits (cm⁻³)
    pub vmin: f64,
    pub vmax: f64,
    pub colormap: Colormap,
    pub seed: u64,
}

impl Default for ScatterPlotConfig {
    fn default() -> Self {
        Self {
            n_rand: 4000,
            weight_factor: 10.0,
            vmin: 5e11 / 1e6,
            vmax: 5e15 / 1e6,
            colormap: Colormap::Hot,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlotsConfig {
    pub enabled: bool,
    /// Approximate edge of the plot area (px)
    pub size: u32,
    pub scatter: ScatterPlotConfig,
    pub planes: Vec<PlanePlotConfig>,
}

impl Default for PlotsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size: 600,
            scatter: ScatterPlotConfig::default(),
            planes: vec![
                PlanePlotConfig::new(
                    "DensMidplane",
                    PlotQuantity::Density,
                    Axis::Z,
                    1e12 / 1e6,
                    1e17 / 1e6,
                ),
                PlanePlotConfig::new(
                    "DensVertical",
                    PlotQuantity::Density,
                    Axis::Y,
                    1e11 / 1e6,
                    5e15 / 1e6,
                ),
                PlanePlotConfig::new("TempMidplane", PlotQuantity::Temperature, Axis::Z, 5e1, 3e3),
                PlanePlotConfig::new("TempVertical", PlotQuantity::Temperature, Axis::Y, 5e1, 2e3),
                PlanePlotConfig::new("Emissivity", PlotQuantity::Emissivity, Axis::Y, 3e7, 5e12),
            ],
        }
    }
}

/// Complete configuration of a model run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelConfig {
    pub star: StarConfig,
    pub grid: GridConfig,
    pub envelope: EnvelopeConfig,
    pub disc: DiscConfig,
    pub temperature: TemperatureConfig,
    pub chemistry: ChemistryConfig,
    pub output: OutputConfig,
    pub plots: PlotsConfig,
}

impl ModelConfig {
    /// Load from a JSON file and validate.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: ModelConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("star.mass", self.star.mass.to_solar_masses()),
            ("grid.halfExtent", self.grid.half_extent.to_au()),
            ("envelope.infallRate", self.envelope.infall_rate.to_solar_masses_per_year()),
            ("envelope.centrifugalRadius", self.envelope.centrifugal_radius.to_au()),
            ("envelope.outerRadiusFactor", self.envelope.outer_radius_factor),
            ("disc.scaleHeightFactor", self.disc.scale_height_factor),
            ("disc.densityContrast", self.disc.density_contrast),
            ("disc.outerRadiusFactor", self.disc.outer_radius_factor),
            ("temperature.t10Env", self.temperature.t10_env.to_kelvin()),
            ("temperature.bt", self.temperature.bt),
            ("plots.scatter.weightFactor", self.plots.scatter.weight_factor),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(key, value, "must be positive"));
            }
        }

        let non_negative = [
            ("temperature.minDisc", self.temperature.min_disc.to_kelvin()),
            ("chemistry.abundance", self.chemistry.abundance),
            ("chemistry.gasToDust", self.chemistry.gas_to_dust),
            ("output.backgroundTemperature", self.output.background_temperature.to_kelvin()),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(key, value, "must not be negative"));
            }
        }

        if self.grid.divisions == 0 {
            return Err(ConfigError::invalid("grid.divisions", 0, "needs at least one division"));
        }
        if self.output.tag.is_empty() {
            return Err(ConfigError::invalid("output.tag", "\"\"", "must not be empty"));
        }

        let scatter = &self.plots.scatter;
        let limits = self
            .plots
            .planes
            .iter()
            .map(|p| (p.name.as_str(), p.vmin, p.vmax))
            .chain(std::iter::once(("scatter", scatter.vmin, scatter.vmax)));
        for (name, vmin, vmax) in limits {
            if !(vmin > 0.0 && vmax > vmin && vmax.is_finite()) {
                return Err(ConfigError::invalid(
                    &format!("plots.{name}"),
                    format!("[{vmin}, {vmax}]"),
                    "colour limits must satisfy 0 < vmin < vmax",
                ));
            }
        }

        Ok(())
    }
}
