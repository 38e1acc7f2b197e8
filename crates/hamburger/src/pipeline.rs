//! The model run, stage by stage.
//!
//! Stellar parameters → grid → envelope and disc density → temperature →
//! velocity → abundance and gas-to-dust → LIME files → property report →
//! plots. Each stage consumes the previous ones; any failure aborts the run.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use protodisk::export::{
    predefined_points, read_predefined_grid, sink_points, write_datatab, write_predefined_grid,
    write_submodel,
};
use protodisk::{
    abundance, envelope_reference_density, gas_to_dust, CartesianGrid, DensityField,
    HamburgerDisc, HamburgerTemperature, LimeFields, LimeFiles, ModelProperties,
    TemperatureField, UlrichEnvelope, VelocityField,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stellar::Protostar;
use tracing::{debug, info};

use crate::config::ModelConfig;
use crate::plots;

/// Every field of a built model.
#[derive(Debug, Clone)]
pub struct Model {
    pub star: Protostar,
    pub grid: CartesianGrid,
    pub density: DensityField,
    pub temperature: TemperatureField,
    pub velocity: VelocityField,
    pub abundance: Vec<f64>,
    pub gas_to_dust: Vec<f64>,
}

impl Model {
    pub fn lime_fields(&self) -> LimeFields<'_> {
        LimeFields::new(
            &self.density,
            &self.temperature,
            &self.velocity,
            &self.abundance,
            &self.gas_to_dust,
        )
    }
}

/// What a run produced.
#[derive(Debug)]
pub struct RunReport {
    pub properties: ModelProperties,
    pub lime_files: LimeFiles,
    /// Submodel and predefined-grid files, when requested
    pub extra_files: Vec<PathBuf>,
    pub plots: Vec<PathBuf>,
    /// Time to build, export and report the model, excluding plots
    pub elapsed: Duration,
}

/// Compute density, temperature, velocity and chemistry on the grid.
pub fn build_model(config: &ModelConfig) -> Result<Model> {
    let star = Protostar::from_mass(config.star.mass).context("deriving stellar parameters")?;
    info!(
        mstar_msun = star.mass.to_solar_masses(),
        rstar_rsun = star.radius.to_solar_radii(),
        tstar_k = star.temperature.to_kelvin(),
        "protostar"
    );

    let half = config.grid.half_extent;
    let divisions = config.grid.divisions;
    let grid = CartesianGrid::new([half; 3], [divisions; 3]).context("building grid")?;
    info!(
        half_extent_au = half.to_au(),
        divisions = ?grid.divisions(),
        n_points = grid.n_points(),
        "grid"
    );

    let env_cfg = &config.envelope;
    let rd = env_cfg.centrifugal_radius;
    let rho0 = envelope_reference_density(env_cfg.infall_rate, rd, star.mass);
    debug!(rho0_kg_m3 = rho0.to_kg_per_m3(), "reference density");

    let envelope = UlrichEnvelope::new(star.radius, rd, rho0, env_cfg.outer_radius())
        .context("configuring envelope")?
        .compute(&grid);

    let disc_cfg = &config.disc;
    let disc = HamburgerDisc::new(
        star.radius,
        disc_cfg.scale_height_factor,
        rd,
        rho0,
        disc_cfg.density_contrast,
        rd * disc_cfg.outer_radius_factor,
    )
    .context("configuring disc")?
    .with_exponents(disc_cfg.surface_density_exponent, disc_cfg.temperature_exponent)
    .compute(&grid);

    let density = DensityField::composite(disc, envelope)
        .context("combining disc and envelope density")?;
    info!("density done");

    let t_cfg = &config.temperature;
    let temperature = HamburgerTemperature::new(
        &star,
        env_cfg.infall_rate,
        t_cfg.t10_env,
        t_cfg.bt,
    )
    .and_then(|model| model.with_min_disc_temperature(t_cfg.min_disc))
    .map(|model| model.inverted(t_cfg.inverted))
    .and_then(|model| model.compute(&density, &grid))
    .context("computing temperature")?;
    info!(inverted = t_cfg.inverted, "temperature done");

    let velocity = VelocityField::compute(star.mass, rd, &density, &grid)
        .context("computing velocity")?;
    info!("velocity done");

    let n = grid.n_points();
    let abundance = abundance(config.chemistry.abundance, n).context("filling abundance")?;
    let gas_to_dust = gas_to_dust(config.chemistry.gas_to_dust, n).context("filling gas-to-dust")?;

    Ok(Model {
        star,
        grid,
        density,
        temperature,
        velocity,
        abundance,
        gas_to_dust,
    })
}

/// Write the LIME input for a built model into `dir`.
///
/// Returns the regular-grid tables and any optional extra files.
pub fn export_model(
    model: &Model,
    config: &ModelConfig,
    dir: &Path,
) -> Result<(LimeFiles, Vec<PathBuf>)> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let fields = model.lime_fields();
    let tag = &config.output.tag;

    let lime_files = write_datatab(dir, &fields, &model.grid).context("writing LIME datatab")?;
    let mut extra = Vec::new();

    if config.output.submodel {
        let path = dir.join(format!("submodel_{tag}.dat"));
        write_submodel(&path, &fields, &model.grid).context("writing submodel")?;
        extra.push(path);
    }

    if config.output.predefined_grid {
        let path = dir.join(format!("pregrid_{tag}.dat"));
        let mut points =
            predefined_points(&fields, &model.grid).context("collecting grid points")?;

        // Sinks enclose the whole box
        let radius = config.grid.half_extent * 3.0_f64.sqrt();
        let mut rng = ChaCha8Rng::seed_from_u64(config.output.seed);
        let sinks = sink_points(
            config.output.sink_points,
            radius,
            config.output.background_temperature,
            points.len(),
            &mut rng,
        );
        points.extend(sinks);

        write_predefined_grid(&path, &points).context("writing predefined grid")?;
        // LIME rejects malformed grids outright, so check the file reads back
        read_predefined_grid(&path, points.len()).context("verifying predefined grid")?;
        extra.push(path);
    }

    Ok((lime_files, extra))
}

/// Build, export, report and plot a model.
///
/// Stellar parameters, the property report and the elapsed time are
/// printed to stdout.
pub fn run(config: &ModelConfig, output_dir: &Path) -> Result<RunReport> {
    let t0 = Instant::now();

    let model = build_model(config)?;
    println!("{}", model.star);

    let (lime_files, extra_files) = export_model(&model, config, output_dir)?;

    let properties = ModelProperties::compute(&model.density, &model.temperature, &model.grid)
        .context("computing model properties")?;
    println!("{properties}");
    println!(
        "Envelope infall timescale (yr): {:.4e}",
        properties
            .infall_timescale(config.envelope.infall_rate)
            .to_years()
    );

    let elapsed = t0.elapsed();
    println!("Elapsed time: {:.3}s", elapsed.as_secs_f64());
    println!("{}", "-".repeat(49));
    println!("{}\n", "-".repeat(49));

    let plots = if config.plots.enabled {
        plots::render_all(&model, config, output_dir)?
    } else {
        info!("plots disabled");
        Vec::new()
    };

    Ok(RunReport {
        properties,
        lime_files,
        extra_files,
        plots,
        elapsed,
    })
}
