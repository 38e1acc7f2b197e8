//! Rendering of grid models to PNG.
//!
//! - [`plane2d`] - a planar slice through the grid, log-scaled and coloured
//! - [`scatter3d`] - a rejection-sampled 3D point cloud seen from an oblique camera
//!
//! Both draw a vertical colourbar on the right. Plots carry no text: the
//! colour limits live in the caller's configuration.

pub mod colormap;
pub mod error;
pub mod norm;
pub mod plane;
mod raster;
pub mod scatter;
pub mod style;

#[cfg(test)]
mod colormap_test;

pub use colormap::Colormap;
pub use error::PlotError;
pub use norm::LogNorm;
pub use plane::{plane2d, render_plane, PlaneSpec};
pub use scatter::{render_scatter, sample_nodes, scatter3d, ScatterSpec};
pub use style::PlotStyle;
