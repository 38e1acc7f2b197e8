//! Planar slices through a grid field.

use std::path::Path;

use image::RgbImage;
use protodisk::{Axis, CartesianGrid};
use tracing::{debug, info, warn};
use units::Length;

use crate::error::{ensure_len, PlotError};
use crate::raster::{canvas, draw_colourbar, fill_rect, frame_plot, save_png, MARGIN};
use crate::style::PlotStyle;

/// A plane perpendicular to one grid axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneSpec {
    pub normal: Axis,
    /// Position of the plane along `normal`
    pub coordinate: Length,
}

impl PlaneSpec {
    pub fn new(normal: Axis, coordinate: Length) -> Self {
        Self { normal, coordinate }
    }

    /// Horizontal and vertical image axes, right-handed and with z up where possible.
    pub fn image_axes(&self) -> (Axis, Axis) {
        match self.normal {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

/// Render the slice of `values` nearest to the plane.
///
/// Each node becomes a square block of pixels, scaled so the longer side
/// approaches `style.size`.
pub fn render_plane(
    grid: &CartesianGrid,
    values: &[f64],
    plane: PlaneSpec,
    style: &PlotStyle,
) -> Result<RgbImage, PlotError> {
    ensure_len("values", values, grid.n_points())?;

    let (u_axis, v_axis) = plane.image_axes();
    let slice = grid.nearest_index(plane.normal, plane.coordinate.to_m());
    let nu = grid.axis(u_axis).len();
    let nv = grid.axis(v_axis).len();

    let scale = ((style.size as f64 / nu.max(nv) as f64).round() as u32).max(1);
    let width = nu as u32 * scale;
    let height = nv as u32 * scale;
    let mut img = canvas(width, height, style.background);

    let mut masked = 0usize;
    let mut ijk = [0usize; 3];
    ijk[plane.normal.index()] = slice;

    for a in 0..nu {
        for b in 0..nv {
            ijk[u_axis.index()] = a;
            ijk[v_axis.index()] = b;
            let value = values[grid.index(ijk[0], ijk[1], ijk[2])];
            if style.norm.normalize(value).is_none() {
                masked += 1;
            }

            let row = (nv - 1 - b) as u32;
            fill_rect(
                &mut img,
                MARGIN + a as u32 * scale,
                MARGIN + row * scale,
                scale,
                scale,
                style.colour(value),
            );
        }
    }

    if masked == nu * nv {
        warn!(
            plane = plane.normal.name(),
            coordinate_au = plane.coordinate.to_au(),
            "slice holds no positive values"
        );
    }

    frame_plot(&mut img, width, height);
    draw_colourbar(&mut img, width, height, style.colormap);

    debug!(
        plane = plane.normal.name(),
        slice,
        masked,
        width = img.width(),
        height = img.height(),
        "rendered plane"
    );
    Ok(img)
}

/// Render a slice and write it as PNG.
pub fn plane2d(
    grid: &CartesianGrid,
    values: &[f64],
    plane: PlaneSpec,
    style: &PlotStyle,
    output: &Path,
) -> Result<(), PlotError> {
    let img = render_plane(grid, values, plane, style)?;
    save_png(&img, output)?;
    info!(path = %output.display(), "wrote plane plot");
    Ok(())
}
