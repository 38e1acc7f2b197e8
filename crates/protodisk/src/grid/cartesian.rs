//! Regular Cartesian grid centred on the star.
//!
//! Each axis spans `[-s, s]` with an odd number of nodes so that the origin is
//! always sampled. Nodes are flattened in x-major order, which is the order
//! every per-node field in this crate uses:
//!
//! ```text
//! index = (i * ny + j) * nz + k
//! ```
//!
//! Spherical and cylindrical coordinates are derived on demand rather than
//! cached, since a 201³ grid already holds 8 million nodes.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use units::Length;

use crate::error::{ModelError, ModelResult};

/// Cartesian axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Position of a single grid node in Cartesian, spherical and cylindrical form.
///
/// All lengths are in meters and angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridNode {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Spherical radius
    pub r: f64,
    /// Cylindrical radius
    pub cylindrical_radius: f64,
    /// Polar angle from +z, θ = 0 at the origin
    pub theta: f64,
    /// Azimuth in [0, 2π)
    pub phi: f64,
}

impl GridNode {
    fn from_cartesian(index: usize, x: f64, y: f64, z: f64) -> Self {
        let cylindrical_radius = x.hypot(y);
        let r = cylindrical_radius.hypot(z);
        let theta = if r > 0.0 { (z / r).clamp(-1.0, 1.0).acos() } else { 0.0 };
        let mut phi = y.atan2(x);
        if phi < 0.0 {
            phi += TAU;
        }

        Self {
            index,
            x,
            y,
            z,
            r,
            cylindrical_radius,
            theta,
            phi,
        }
    }

    /// Cosine of the polar angle (μ).
    pub fn cos_theta(&self) -> f64 {
        if self.r > 0.0 {
            self.z / self.r
        } else {
            1.0
        }
    }

    pub fn sin_theta(&self) -> f64 {
        if self.r > 0.0 {
            self.cylindrical_radius / self.r
        } else {
            0.0
        }
    }
}

/// A cubic-style Cartesian grid with per-axis extents and resolutions.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianGrid {
    /// Half-extent of each axis (m)
    half_extent: [f64; 3],

    /// Node count along each axis (always odd)
    divisions: [usize; 3],

    /// Node coordinates along each axis (m)
    axes: [Vec<f64>; 3],

    /// Node spacing along each axis (m)
    step: [f64; 3],

    n_points: usize,
}

impl CartesianGrid {
    /// Build a grid spanning `[-s, s]` on each axis.
    ///
    /// Even division counts are bumped by one so the origin is a node.
    ///
    /// # Arguments
    /// * `half_extent` - Half size of the box along x, y, z
    /// * `divisions` - Requested number of divisions along x, y, z
    ///
    /// # Example
    /// ```
    /// use protodisk::CartesianGrid;
    /// use units::Length;
    ///
    /// let size = Length::from_au(500.0);
    /// let grid = CartesianGrid::new([size; 3], [200; 3]).unwrap();
    /// assert_eq!(grid.divisions(), [201, 201, 201]);
    /// ```
    pub fn new(half_extent: [Length; 3], divisions: [usize; 3]) -> ModelResult<Self> {
        let mut half = [0.0; 3];
        let mut counts = [0usize; 3];
        let mut step = [0.0; 3];

        for d in 0..3 {
            let s = half_extent[d].to_m();
            if !(s.is_finite() && s > 0.0) {
                return Err(ModelError::InvalidGrid(format!(
                    "half extent along axis {d} must be positive, got {} AU",
                    half_extent[d].to_au()
                )));
            }
            if divisions[d] == 0 {
                return Err(ModelError::InvalidGrid(format!(
                    "axis {d} needs at least one division"
                )));
            }

            let n = if divisions[d] % 2 == 0 {
                divisions[d] + 1
            } else {
                divisions[d]
            };

            half[d] = s;
            counts[d] = n;
            step[d] = if n > 1 { 2.0 * s / (n - 1) as f64 } else { 2.0 * s };
        }

        let n_points = counts
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or_else(|| {
                ModelError::InvalidGrid(format!("{counts:?} nodes overflow the node index"))
            })?;

        let axes = [0, 1, 2].map(|d| linspace(-half[d], half[d], counts[d]));

        Ok(Self {
            half_extent: half,
            divisions: counts,
            axes,
            step,
            n_points,
        })
    }

    /// Node count along x, y, z.
    pub fn divisions(&self) -> [usize; 3] {
        self.divisions
    }

    /// Total number of nodes.
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Half-extent along an axis.
    pub fn half_extent(&self, axis: Axis) -> Length {
        Length::from_m(self.half_extent[axis.index()])
    }

    /// Node coordinates along an axis (m).
    pub fn axis(&self, axis: Axis) -> &[f64] {
        &self.axes[axis.index()]
    }

    /// Node spacing along x, y, z (m).
    pub fn step(&self) -> [f64; 3] {
        self.step
    }

    /// Volume represented by a single node (m³).
    pub fn cell_volume(&self) -> f64 {
        self.step.iter().product()
    }

    /// Flatten an (i, j, k) triple into a node index.
    pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
        let [_, ny, nz] = self.divisions;
        (i * ny + j) * nz + k
    }

    /// Inverse of [`CartesianGrid::index`].
    pub fn unravel(&self, index: usize) -> (usize, usize, usize) {
        let [_, ny, nz] = self.divisions;
        let k = index % nz;
        let j = (index / nz) % ny;
        let i = index / (ny * nz);
        (i, j, k)
    }

    /// Geometry of the node at a flat index.
    pub fn node(&self, index: usize) -> GridNode {
        let (i, j, k) = self.unravel(index);
        GridNode::from_cartesian(index, self.axes[0][i], self.axes[1][j], self.axes[2][k])
    }

    /// Iterate over every node in storage order.
    pub fn nodes(&self) -> impl Iterator<Item = GridNode> + '_ {
        (0..self.n_points()).map(move |index| self.node(index))
    }

    /// Index along `axis` of the node closest to `value` (m).
    pub fn nearest_index(&self, axis: Axis, value: f64) -> usize {
        let coords = self.axis(axis);
        let d = axis.index();
        let raw = ((value + self.half_extent[d]) / self.step[d]).round();
        (raw.max(0.0) as usize).min(coords.len() - 1)
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![0.5 * (start + end)];
    }
    let step = (end - start) / (n - 1) as f64;
    let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    // Keep the centre node at exactly zero for symmetric axes
    values[n / 2] = 0.5 * (start + end);
    values
}
