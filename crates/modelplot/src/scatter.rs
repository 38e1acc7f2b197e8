//! Rejection-sampled 3D point clouds.
//!
//! Nodes are drawn uniformly and accepted with probability
//! `min(property / weight, 1)`, so dense or hot regions dominate the cloud.
//! Accepted nodes are projected orthographically from a camera at fixed
//! elevation and azimuth (matplotlib's default 30°, −60°) and painted back
//! to front inside the wireframe of the grid box.

use std::f64::consts::FRAC_PI_2;
use std::path::Path;

use image::RgbImage;
use nalgebra::{Rotation3, Vector3};
use protodisk::{Axis, CartesianGrid};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::error::{ensure_len, PlotError};
use crate::raster::{canvas, draw_colourbar, draw_line, fill_rect, save_png, MARGIN};
use crate::style::PlotStyle;

/// Total attempts allowed, per requested sample
const ATTEMPTS_PER_SAMPLE: usize = 100;

/// Side of the square drawn for each point (px)
const POINT_SIZE: u32 = 3;

const EDGE_COLOUR: [u8; 3] = [160, 160, 160];

/// Sampling and camera settings of a scatter plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterSpec {
    /// Property value accepted with certainty
    pub weight: f64,
    /// Number of points to draw
    pub n_rand: usize,
    pub seed: u64,
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
}

impl ScatterSpec {
    pub fn new(weight: f64, n_rand: usize, seed: u64) -> Self {
        Self {
            weight,
            n_rand,
            seed,
            elevation_deg: 30.0,
            azimuth_deg: -60.0,
        }
    }

    /// World-to-view rotation; the view z axis points at the camera.
    pub fn view_rotation(&self) -> Rotation3<f64> {
        let elevation = self.elevation_deg.to_radians();
        let azimuth = self.azimuth_deg.to_radians();
        let tilt = Rotation3::from_axis_angle(&Vector3::x_axis(), elevation - FRAC_PI_2);
        let spin = Rotation3::from_axis_angle(&Vector3::z_axis(), -azimuth - FRAC_PI_2);
        tilt * spin
    }
}

/// Rejection-sample up to `n_rand` node indices weighted by `property`.
///
/// Nodes may be drawn more than once. The attempt budget is shared by the
/// whole draw: `n_rand × 100` attempts in total, so rare nodes can borrow
/// attempts left over by common ones. Fewer than `n_rand` indices come back
/// when the budget runs out, e.g. for an all-zero property.
pub fn sample_nodes<R: Rng>(
    property: &[f64],
    weight: f64,
    n_rand: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut accepted = Vec::with_capacity(n_rand);
    if property.is_empty() {
        return accepted;
    }

    let max_attempts = n_rand.saturating_mul(ATTEMPTS_PER_SAMPLE);
    let mut attempts = 0;
    while accepted.len() < n_rand && attempts < max_attempts {
        attempts += 1;
        let index = rng.random_range(0..property.len());
        let p = (property[index] / weight).min(1.0);
        if p > 0.0 && rng.random::<f64>() < p {
            accepted.push(index);
        }
    }

    if accepted.len() < n_rand {
        warn!(
            requested = n_rand,
            accepted = accepted.len(),
            attempts,
            "scatter sampling ran out of attempts"
        );
    }
    accepted
}

/// Render a point cloud of `property`-weighted nodes coloured by `colour`.
///
/// Returns the image and the number of points painted.
pub fn render_scatter(
    grid: &CartesianGrid,
    property: &[f64],
    colour: &[f64],
    sampling: &ScatterSpec,
    style: &PlotStyle,
) -> Result<(RgbImage, usize), PlotError> {
    let n = grid.n_points();
    ensure_len("property", property, n)?;
    ensure_len("colour", colour, n)?;
    if !(sampling.weight.is_finite() && sampling.weight > 0.0) {
        return Err(PlotError::InvalidWeight(sampling.weight));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(sampling.seed);
    let samples = sample_nodes(property, sampling.weight, sampling.n_rand, &mut rng);

    let half = [Axis::X, Axis::Y, Axis::Z].map(|axis| grid.half_extent(axis).to_m());
    let extent = half.iter().cloned().fold(f64::MIN_POSITIVE, f64::max);
    let rotation = sampling.view_rotation();

    let size = style.size;
    let centre = MARGIN as f64 + size as f64 / 2.0;
    let scale = (size as f64 / 2.0 - POINT_SIZE as f64) / 3.0_f64.sqrt();
    let project = |p: Vector3<f64>| -> (Vector3<f64>, i64, i64) {
        let v = rotation * (p / extent);
        let px = (centre + v.x * scale).round() as i64;
        let py = (centre - v.y * scale).round() as i64;
        (v, px, py)
    };

    let mut img = canvas(size, size, style.background);

    // Box wireframe: join corners that differ in exactly one coordinate
    let corners: Vec<Vector3<f64>> = (0..8)
        .map(|bits: u32| {
            let sign = |bit: u32| if bits & (1 << bit) == 0 { -1.0 } else { 1.0 };
            Vector3::new(sign(0) * half[0], sign(1) * half[1], sign(2) * half[2])
        })
        .collect();
    for a in 0..8usize {
        for bit in 0..3 {
            let b = a | (1 << bit);
            if b != a {
                let (_, x0, y0) = project(corners[a]);
                let (_, x1, y1) = project(corners[b]);
                draw_line(&mut img, (x0, y0), (x1, y1), EDGE_COLOUR);
            }
        }
    }

    let mut points: Vec<(f64, i64, i64, [u8; 3])> = samples
        .iter()
        .filter_map(|&index| {
            style.norm.normalize(colour[index])?;
            let node = grid.node(index);
            let (view, px, py) = project(Vector3::new(node.x, node.y, node.z));
            Some((view.z, px, py, style.colour(colour[index])))
        })
        .collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));

    let offset = (POINT_SIZE / 2) as i64;
    for &(_, px, py, rgb) in &points {
        let (x, y) = (px - offset, py - offset);
        if x >= 0 && y >= 0 {
            fill_rect(&mut img, x as u32, y as u32, POINT_SIZE, POINT_SIZE, rgb);
        }
    }

    draw_colourbar(&mut img, size, size, style.colormap);

    debug!(
        sampled = samples.len(),
        painted = points.len(),
        weight = sampling.weight,
        "rendered scatter"
    );
    Ok((img, points.len()))
}

/// Render a point cloud and write it as PNG; returns the number of points painted.
pub fn scatter3d(
    grid: &CartesianGrid,
    property: &[f64],
    colour: &[f64],
    sampling: &ScatterSpec,
    style: &PlotStyle,
    output: &Path,
) -> Result<usize, PlotError> {
    let (img, painted) = render_scatter(grid, property, colour, sampling, style)?;
    save_png(&img, output)?;
    info!(path = %output.display(), points = painted, "wrote scatter plot");
    Ok(painted)
}
