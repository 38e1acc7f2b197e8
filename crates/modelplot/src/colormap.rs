//! Colormaps with the same names and ramps as matplotlib's.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlotError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Colormap {
    /// Black → red → yellow → white
    #[serde(rename = "hot")]
    Hot,
    /// Green → blue → white
    #[serde(rename = "ocean")]
    Ocean,
    /// `Ocean` reversed
    #[serde(rename = "ocean_r")]
    OceanR,
    /// White → black
    #[serde(rename = "Greys")]
    Greys,
}

impl Colormap {
    pub fn name(self) -> &'static str {
        match self {
            Colormap::Hot => "hot",
            Colormap::Ocean => "ocean",
            Colormap::OceanR => "ocean_r",
            Colormap::Greys => "Greys",
        }
    }

    /// RGB colour for `t` in [0, 1]; values outside are clamped.
    pub fn rgb(self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let [r, g, b] = match self {
            Colormap::Hot => hot(t),
            Colormap::Ocean => ocean(t),
            Colormap::OceanR => ocean(1.0 - t),
            Colormap::Greys => {
                let v = 1.0 - t;
                [v, v, v]
            }
        };
        [to_byte(r), to_byte(g), to_byte(b)]
    }
}

fn hot(t: f64) -> [f64; 3] {
    const RED_END: f64 = 0.365079;
    const GREEN_END: f64 = 0.746032;
    [
        t / RED_END,
        (t - RED_END) / (GREEN_END - RED_END),
        (t - GREEN_END) / (1.0 - GREEN_END),
    ]
}

fn ocean(t: f64) -> [f64; 3] {
    [3.0 * t - 2.0, ((3.0 * t - 1.0) / 2.0).abs(), t]
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl FromStr for Colormap {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hot" => Ok(Colormap::Hot),
            "ocean" => Ok(Colormap::Ocean),
            "ocean_r" => Ok(Colormap::OceanR),
            "Greys" | "greys" => Ok(Colormap::Greys),
            other => Err(PlotError::UnknownColormap(other.to_string())),
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
