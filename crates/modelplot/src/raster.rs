//! Pixel-level drawing shared by the renderers.

use std::fs;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::colormap::Colormap;
use crate::error::PlotError;

/// Blank space around the plot area (px)
pub(crate) const MARGIN: u32 = 10;
/// Gap between plot area and colourbar (px)
pub(crate) const COLOURBAR_GAP: u32 = 10;
pub(crate) const COLOURBAR_WIDTH: u32 = 30;

const FRAME: [u8; 3] = [0, 0, 0];

/// Canvas for a square-ish plot area of `width × height` plus colourbar.
pub(crate) fn canvas(width: u32, height: u32, background: [u8; 3]) -> RgbImage {
    let total_width = MARGIN + width + COLOURBAR_GAP + COLOURBAR_WIDTH + MARGIN;
    let total_height = MARGIN + height + MARGIN;
    RgbImage::from_pixel(total_width, total_height, Rgb(background))
}

pub(crate) fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, rgb: [u8; 3]) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, Rgb(rgb));
        }
    }
}

/// Set a pixel if it lies on the canvas.
pub(crate) fn plot(img: &mut RgbImage, x: i64, y: i64, rgb: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u64) < img.width() as u64 && (y as u64) < img.height() as u64 {
        img.put_pixel(x as u32, y as u32, Rgb(rgb));
    }
}

/// Bresenham line between two pixel positions.
pub(crate) fn draw_line(img: &mut RgbImage, from: (i64, i64), to: (i64, i64), rgb: [u8; 3]) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(img, x, y, rgb);
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn draw_frame(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32) {
    let (x0, y0) = (x as i64 - 1, y as i64 - 1);
    let (x1, y1) = ((x + w) as i64, (y + h) as i64);
    draw_line(img, (x0, y0), (x1, y0), FRAME);
    draw_line(img, (x1, y0), (x1, y1), FRAME);
    draw_line(img, (x1, y1), (x0, y1), FRAME);
    draw_line(img, (x0, y1), (x0, y0), FRAME);
}

/// Vertical colourbar to the right of a plot area of the given size,
/// the top of the bar mapping to t = 1.
pub(crate) fn draw_colourbar(
    img: &mut RgbImage,
    plot_width: u32,
    plot_height: u32,
    cmap: Colormap,
) {
    let x = MARGIN + plot_width + COLOURBAR_GAP;
    let y = MARGIN;
    let span = plot_height.saturating_sub(1).max(1) as f64;

    for row in 0..plot_height {
        let t = 1.0 - row as f64 / span;
        fill_rect(img, x, y + row, COLOURBAR_WIDTH, 1, cmap.rgb(t));
    }
    draw_frame(img, x, y, COLOURBAR_WIDTH, plot_height);
}

/// Outline of the plot area.
pub(crate) fn frame_plot(img: &mut RgbImage, plot_width: u32, plot_height: u32) {
    draw_frame(img, MARGIN, MARGIN, plot_width, plot_height);
}

/// Write a PNG, creating parent directories as needed.
pub(crate) fn save_png(img: &RgbImage, path: &Path) -> Result<(), PlotError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
