//! Regular-grid LIME input.
//!
//! | file | content |
//! |------|---------|
//! | `datatab.dat` | `id dens temp vx vy vz abund gtd`, one row per node |
//! | `x.dat`, `y.dat`, `z.dat` | axis coordinates (m), one per line |
//! | `npoints.dat` | `nx ny nz npoints` |
//!
//! Rows follow the grid's x-major node order. Densities are H2 per m³,
//! temperatures in K and velocities in m/s.

use std::fmt::{self, Write as _};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::density::DensityField;
use crate::error::{ensure_len, ModelResult};
use crate::grid::{Axis, CartesianGrid};
use crate::temperature::TemperatureField;
use crate::velocity::VelocityField;

/// Per-node arrays written to LIME, borrowed from the model stages.
#[derive(Debug, Clone, Copy)]
pub struct LimeFields<'a> {
    pub density: &'a [f64],
    pub temperature: &'a [f64],
    pub vx: &'a [f64],
    pub vy: &'a [f64],
    pub vz: &'a [f64],
    pub abundance: &'a [f64],
    pub gas_to_dust: &'a [f64],
}

impl<'a> LimeFields<'a> {
    pub fn new(
        density: &'a DensityField,
        temperature: &'a TemperatureField,
        velocity: &'a VelocityField,
        abundance: &'a [f64],
        gas_to_dust: &'a [f64],
    ) -> Self {
        Self {
            density: &density.total,
            temperature: &temperature.total,
            vx: &velocity.x,
            vy: &velocity.y,
            vz: &velocity.z,
            abundance,
            gas_to_dust,
        }
    }

    /// Every array must hold one value per grid node.
    pub fn validate(&self, n_points: usize) -> ModelResult<()> {
        ensure_len("density", self.density, n_points)?;
        ensure_len("temperature", self.temperature, n_points)?;
        ensure_len("vx", self.vx, n_points)?;
        ensure_len("vy", self.vy, n_points)?;
        ensure_len("vz", self.vz, n_points)?;
        ensure_len("abundance", self.abundance, n_points)?;
        ensure_len("gas-to-dust", self.gas_to_dust, n_points)?;
        Ok(())
    }
}

/// Paths of the files produced by [`write_datatab`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimeFiles {
    pub datatab: PathBuf,
    pub x: PathBuf,
    pub y: PathBuf,
    pub z: PathBuf,
    pub npoints: PathBuf,
}

impl LimeFiles {
    fn in_dir(dir: &Path) -> Self {
        Self {
            datatab: dir.join("datatab.dat"),
            x: dir.join("x.dat"),
            y: dir.join("y.dat"),
            z: dir.join("z.dat"),
            npoints: dir.join("npoints.dat"),
        }
    }

    pub fn all(&self) -> [&Path; 5] {
        [&self.datatab, &self.x, &self.y, &self.z, &self.npoints]
    }
}

/// A float rendered like C's `%e`: six decimals and an exponent of at
/// least two digits, e.g. `1.234560e+05`.
///
/// Formats straight into the destination so large tables are written
/// without a heap allocation per value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exp(pub f64);

impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if !value.is_finite() {
            return write!(f, "{value}");
        }

        let mut buf = DigitBuf::default();
        write!(buf, "{value:.6e}")?;
        let text = buf.as_str()?;
        let Some((mantissa, exponent)) = text.split_once('e') else {
            return f.write_str(text);
        };

        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        let pad = if digits.len() < 2 { "0" } else { "" };
        write!(f, "{mantissa}e{sign}{pad}{digits}")
    }
}

/// Fixed stack buffer for one `{:.6e}` rendering.
struct DigitBuf {
    bytes: [u8; 32],
    len: usize,
}

impl Default for DigitBuf {
    fn default() -> Self {
        Self {
            bytes: [0; 32],
            len: 0,
        }
    }
}

impl DigitBuf {
    fn as_str(&self) -> Result<&str, fmt::Error> {
        std::str::from_utf8(&self.bytes[..self.len]).map_err(|_| fmt::Error)
    }
}

impl fmt::Write for DigitBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > self.bytes.len() {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Write the regular-grid LIME tables into `dir`, creating it if needed.
pub fn write_datatab(
    dir: &Path,
    fields: &LimeFields,
    grid: &CartesianGrid,
) -> ModelResult<LimeFiles> {
    let n = grid.n_points();
    fields.validate(n)?;
    fs::create_dir_all(dir)?;

    let files = LimeFiles::in_dir(dir);

    let mut out = BufWriter::new(File::create(&files.datatab)?);
    for i in 0..n {
        writeln!(
            out,
            "{} {} {} {} {} {} {} {}",
            i,
            Exp(fields.density[i]),
            Exp(fields.temperature[i]),
            Exp(fields.vx[i]),
            Exp(fields.vy[i]),
            Exp(fields.vz[i]),
            Exp(fields.abundance[i]),
            Exp(fields.gas_to_dust[i]),
        )?;
    }
    out.flush()?;

    for (axis, path) in [(Axis::X, &files.x), (Axis::Y, &files.y), (Axis::Z, &files.z)] {
        let mut out = BufWriter::new(File::create(path)?);
        for &coord in grid.axis(axis) {
            writeln!(out, "{}", Exp(coord))?;
        }
        out.flush()?;
    }

    let [nx, ny, nz] = grid.divisions();
    fs::write(&files.npoints, format!("{nx} {ny} {nz} {n}\n"))?;

    info!(dir = %dir.display(), n_points = n, "wrote LIME datatab");
    Ok(files)
}

/// Write occupied nodes with their positions,
/// `id x y z dens temp vx vy vz abund gtd` per line.
///
/// Returns the number of rows written.
pub fn write_submodel(
    path: &Path,
    fields: &LimeFields,
    grid: &CartesianGrid,
) -> ModelResult<usize> {
    fields.validate(grid.n_points())?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut out = BufWriter::new(File::create(path)?);
    let mut rows = 0;
    for node in grid.nodes().filter(|node| fields.density[node.index] > 0.0) {
        let i = node.index;
        let values = [
            node.x,
            node.y,
            node.z,
            fields.density[i],
            fields.temperature[i],
            fields.vx[i],
            fields.vy[i],
            fields.vz[i],
            fields.abundance[i],
            fields.gas_to_dust[i],
        ];
        write!(out, "{i}")?;
        for value in values {
            write!(out, " {}", Exp(value))?;
        }
        writeln!(out)?;
        rows += 1;
    }
    out.flush()?;

    info!(path = %path.display(), rows, "wrote LIME submodel");
    Ok(rows)
}
