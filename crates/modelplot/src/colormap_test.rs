use crate::colormap::Colormap;
use crate::error::PlotError;

#[test]
fn hot_runs_black_to_white() {
    assert_eq!(Colormap::Hot.rgb(0.0), [0, 0, 0]);
    assert_eq!(Colormap::Hot.rgb(1.0), [255, 255, 255]);

    // Red saturates first, then green, then blue
    let [r, g, b] = Colormap::Hot.rgb(0.5);
    assert_eq!(r, 255);
    assert!(g > 0 && g < 255);
    assert_eq!(b, 0);
}

#[test]
fn ocean_and_reverse() {
    assert_eq!(Colormap::Ocean.rgb(0.0), [0, 128, 0]);
    assert_eq!(Colormap::Ocean.rgb(1.0), [255, 255, 255]);
    assert_eq!(Colormap::OceanR.rgb(0.0), [255, 255, 255]);
    assert_eq!(Colormap::OceanR.rgb(0.25), Colormap::Ocean.rgb(0.75));
}

#[test]
fn greys_runs_white_to_black() {
    assert_eq!(Colormap::Greys.rgb(0.0), [255, 255, 255]);
    assert_eq!(Colormap::Greys.rgb(1.0), [0, 0, 0]);
}

#[test]
fn out_of_range_is_clamped() {
    assert_eq!(Colormap::Hot.rgb(-3.0), Colormap::Hot.rgb(0.0));
    assert_eq!(Colormap::Hot.rgb(7.0), Colormap::Hot.rgb(1.0));
    assert_eq!(Colormap::Hot.rgb(f64::NAN), Colormap::Hot.rgb(0.0));
}

#[test]
fn parses_matplotlib_names() {
    for cmap in [Colormap::Hot, Colormap::Ocean, Colormap::OceanR, Colormap::Greys] {
        assert_eq!(cmap.name().parse::<Colormap>().unwrap(), cmap);
        assert_eq!(cmap.to_string(), cmap.name());
    }
    assert!(matches!(
        "viridis".parse::<Colormap>(),
        Err(PlotError::UnknownColormap(name)) if name == "viridis"
    ));
}
