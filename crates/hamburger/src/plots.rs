//! Diagnostic plots of a built model.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use modelplot::{plane2d, scatter3d, LogNorm, PlaneSpec, PlotStyle, ScatterSpec};

use crate::config::{ModelConfig, PlotQuantity};
use crate::pipeline::Model;

/// m⁻³ → cm⁻³
const PER_M3_TO_PER_CM3: f64 = 1e-6;

/// Render the scatter plot and every configured plane into `dir`.
pub fn render_all(model: &Model, config: &ModelConfig, dir: &Path) -> Result<Vec<PathBuf>> {
    let plots = &config.plots;
    let tag = &config.output.tag;
    let mut written = Vec::with_capacity(plots.planes.len() + 1);

    let density = model.density.scaled_total(PER_M3_TO_PER_CM3);
    let temperature = &model.temperature.total;
    let emissivity: Vec<f64> = density.iter().zip(temperature).map(|(n, t)| n * t).collect();

    // Hot gas is sampled preferentially, coloured by density
    let scatter = &plots.scatter;
    let style = PlotStyle::new(scatter.colormap, LogNorm::new(scatter.vmin, scatter.vmax)?)
        .with_size(plots.size);
    let weight = scatter.weight_factor * config.temperature.t10_env.to_kelvin();
    let sampling = ScatterSpec::new(weight, scatter.n_rand, scatter.seed);
    let path = dir.join(format!("3Dpoints{tag}.png"));
    scatter3d(&model.grid, temperature, &density, &sampling, &style, &path)
        .with_context(|| format!("rendering {}", path.display()))?;
    written.push(path);

    for plane in &plots.planes {
        let values: &[f64] = match plane.quantity {
            PlotQuantity::Density => &density,
            PlotQuantity::Temperature => temperature,
            PlotQuantity::Emissivity => &emissivity,
        };
        let style = PlotStyle::new(plane.colormap, LogNorm::new(plane.vmin, plane.vmax)?)
            .with_size(plots.size);
        let path = dir.join(format!("{}_{tag}.png", plane.name));

        plane2d(
            &model.grid,
            values,
            PlaneSpec::new(plane.normal, plane.coordinate),
            &style,
            &path,
        )
        .with_context(|| format!("rendering {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
