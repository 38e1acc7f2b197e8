//! LIME predefined-grid point lists.
//!
//! Each line holds `id x y z dens temp vx vy vz` (positions in m, density in
//! H2 m⁻³, velocities in m/s). LIME refuses files with rows of any other
//! width or with ids outside `0..=n_cells`, and so does the reader here.
//! Sink points close the domain on a sphere surrounding the model.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rand::Rng;
use tracing::{debug, info};
use units::{Length, Temperature};

use super::lime::{Exp, LimeFields};
use crate::error::{ModelError, ModelResult};
use crate::grid::CartesianGrid;

/// Number of columns in a predefined-grid row
const COLUMNS: usize = 9;

/// Placeholder density of sink points (m⁻³)
const SINK_DENSITY: f64 = 1e-30;

/// One point of a predefined grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredefinedPoint {
    pub id: usize,
    /// Position (m)
    pub position: [f64; 3],
    /// H2 number density (m⁻³)
    pub density: f64,
    /// Temperature (K)
    pub temperature: f64,
    /// Velocity (m/s)
    pub velocity: [f64; 3],
}

/// Occupied grid nodes as predefined-grid points, numbered from zero.
pub fn predefined_points(
    fields: &LimeFields,
    grid: &CartesianGrid,
) -> ModelResult<Vec<PredefinedPoint>> {
    fields.validate(grid.n_points())?;

    let points = grid
        .nodes()
        .filter(|node| fields.density[node.index] > 0.0)
        .enumerate()
        .map(|(id, node)| {
            let i = node.index;
            PredefinedPoint {
                id,
                position: [node.x, node.y, node.z],
                density: fields.density[i],
                temperature: fields.temperature[i],
                velocity: [fields.vx[i], fields.vy[i], fields.vz[i]],
            }
        })
        .collect();

    Ok(points)
}

/// Sink points spread uniformly in direction over a sphere.
///
/// Directions come from rejection sampling in the unit cube. Sinks carry a
/// negligible density, the background temperature and no velocity.
pub fn sink_points<R: Rng>(
    count: usize,
    radius: Length,
    background: Temperature,
    first_id: usize,
    rng: &mut R,
) -> Vec<PredefinedPoint> {
    let radius = radius.to_m();
    let mut points = Vec::with_capacity(count);

    while points.len() < count {
        let x = 2.0 * rng.random::<f64>() - 1.0;
        let y = 2.0 * rng.random::<f64>() - 1.0;
        let z = 2.0 * rng.random::<f64>() - 1.0;
        let r2 = x * x + y * y + z * z;
        if r2 >= 1.0 || r2 == 0.0 {
            continue;
        }

        let scale = radius / r2.sqrt();
        points.push(PredefinedPoint {
            id: first_id + points.len(),
            position: [scale * x, scale * y, scale * z],
            density: SINK_DENSITY,
            temperature: background.to_kelvin(),
            velocity: [0.0; 3],
        });
    }

    points
}

pub fn write_predefined_grid(path: &Path, points: &[PredefinedPoint]) -> ModelResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut out = BufWriter::new(File::create(path)?);
    for p in points {
        let values = [
            p.position[0],
            p.position[1],
            p.position[2],
            p.density,
            p.temperature,
            p.velocity[0],
            p.velocity[1],
            p.velocity[2],
        ];
        write!(out, "{}", p.id)?;
        for value in values {
            write!(out, " {}", Exp(value))?;
        }
        writeln!(out)?;
    }
    out.flush()?;

    info!(path = %path.display(), points = points.len(), "wrote predefined grid");
    Ok(())
}

/// Read a predefined grid, rejecting malformed rows.
///
/// # Arguments
/// * `path` - Grid file
/// * `n_cells` - Total cell count (grid points plus sinks); ids above it are invalid
pub fn read_predefined_grid(path: &Path, n_cells: usize) -> ModelResult<Vec<PredefinedPoint>> {
    let reader = BufReader::new(File::open(path)?);
    let mut points = Vec::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = line_index + 1;
        let malformed = |reason: String| ModelError::MalformedGridFile {
            path: path.to_path_buf(),
            line: line_no,
            reason,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != COLUMNS {
            return Err(malformed(format!(
                "expected {COLUMNS} columns, found {}",
                fields.len()
            )));
        }

        let id: i64 = fields[0]
            .parse()
            .map_err(|_| malformed(format!("invalid id '{}'", fields[0])))?;
        if id < 0 || id as u64 > n_cells as u64 {
            return Err(malformed(format!("id {id} outside 0..={n_cells}")));
        }

        let mut values = [0.0; COLUMNS - 1];
        for (value, text) in values.iter_mut().zip(&fields[1..]) {
            *value = text
                .parse()
                .map_err(|_| malformed(format!("invalid number '{text}'")))?;
        }

        points.push(PredefinedPoint {
            id: id as usize,
            position: [values[0], values[1], values[2]],
            density: values[3],
            temperature: values[4],
            velocity: [values[5], values[6], values[7]],
        });
    }

    debug!(path = %path.display(), points = points.len(), "read predefined grid");
    Ok(points)
}
