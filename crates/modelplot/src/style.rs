use crate::colormap::Colormap;
use crate::norm::LogNorm;

/// Colour settings shared by every plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
    pub colormap: Colormap,
    pub norm: LogNorm,
    /// Colour of masked pixels and the canvas
    pub background: [u8; 3],
    /// Approximate edge length of the plot area (px)
    pub size: u32,
}

impl PlotStyle {
    pub fn new(colormap: Colormap, norm: LogNorm) -> Self {
        Self {
            colormap,
            norm,
            background: [255, 255, 255],
            size: 600,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size.max(1);
        self
    }

    /// Map a value through the norm and colormap; masked values get the background.
    pub fn colour(&self, value: f64) -> [u8; 3] {
        match self.norm.normalize(value) {
            Some(t) => self.colormap.rgb(t),
            None => self.background,
        }
    }
}
