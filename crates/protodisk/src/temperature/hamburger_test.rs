use approx::assert_relative_eq;
use stellar::Protostar;
use units::{Length, Mass, MassRate, Temperature, VolumeDensity};

use super::HamburgerTemperature;
use crate::density::{DensityField, HamburgerDisc, UlrichEnvelope};
use crate::error::ModelError;
use crate::grid::CartesianGrid;

fn star() -> Protostar {
    Protostar::from_mass(Mass::from_solar_masses(1.0)).unwrap()
}

fn model() -> HamburgerTemperature {
    HamburgerTemperature::new(
        &star(),
        MassRate::from_solar_masses_per_year(5e-6),
        Temperature::from_kelvin(250.0),
        60.0,
    )
    .unwrap()
    .with_min_disc_temperature(Temperature::from_kelvin(10.0))
    .unwrap()
}

fn density(grid: &CartesianGrid) -> DensityField {
    let rho0 = VolumeDensity::from_kg_per_m3(1e-15);
    let r_star = star().radius;
    let rd = Length::from_au(100.0);

    let disc = HamburgerDisc::new(r_star, 0.03, rd, rho0, 5.25, rd * 1.5)
        .unwrap()
        .compute(grid);
    let env = UlrichEnvelope::new(r_star, rd, rho0, rd * 2.5)
        .unwrap()
        .compute(grid);

    DensityField::composite(disc, env).unwrap()
}

#[test]
fn envelope_power_law() {
    let model = model();

    let t10 = model.envelope_temperature(Length::from_au(10.0));
    assert_relative_eq!(t10.to_kelvin(), 250.0, max_relative = 1e-12);

    let t100 = model.envelope_temperature(Length::from_au(100.0));
    assert_relative_eq!(t100.to_kelvin(), 250.0 * 10.0_f64.powf(-0.33), max_relative = 1e-12);
}

#[test]
fn midplane_accretion_profile() {
    let model = model();
    let star = star();

    assert_eq!(model.midplane_temperature(star.radius).to_kelvin(), 0.0);

    let t1 = model.midplane_temperature(Length::from_au(10.0)).to_kelvin();
    let t2 = model.midplane_temperature(Length::from_au(40.0)).to_kelvin();
    assert!(t1 > t2 && t2 > 0.0);

    // Far from the star T ∝ R^(-3/4)
    assert_relative_eq!(t1 / t2, 4.0_f64.powf(0.75), max_relative = 1e-2);
}

#[test]
fn disc_temperature_respects_floor() {
    let model = model();
    let h = Length::from_au(5.0);
    let big_r = Length::from_au(100.0);

    let midplane = model.disc_temperature(big_r, Length::zero(), h);
    let high = model.disc_temperature(big_r, Length::from_au(50.0), h);

    assert_relative_eq!(midplane.to_kelvin(), model.midplane_temperature(big_r).to_kelvin().max(10.0));
    assert_relative_eq!(high.to_kelvin(), 10.0);

    let inverted = model.inverted(true);
    let surface = inverted.disc_temperature(big_r, Length::from_au(5.0), h);
    assert!(surface.to_kelvin() > inverted.disc_temperature(big_r, Length::zero(), h).to_kelvin());
}

#[test]
fn field_combines_components() {
    let grid = CartesianGrid::new([Length::from_au(300.0); 3], [10; 3]).unwrap();
    let density = density(&grid);
    let model = model();
    let field = model.compute(&density, &grid).unwrap();

    assert_eq!(field.len(), grid.n_points());

    // The origin sits inside the star
    let centre = grid.index(5, 5, 5);
    assert_relative_eq!(field.total[centre], star().temperature.to_kelvin());

    for node in grid.nodes() {
        let i = node.index;
        if node.r < star().radius.to_m() {
            continue;
        }

        let (n_disc, n_env) = (density.disc[i], density.envelope[i]);
        if n_disc > 0.0 {
            assert!(field.disc[i] >= 10.0);
        }
        if n_env > 0.0 && n_disc == 0.0 {
            let expected = model.envelope_temperature(Length::from_m(node.r)).to_kelvin();
            assert_relative_eq!(field.total[i], expected, max_relative = 1e-12);
        }
        if n_env > 0.0 && n_disc > 0.0 {
            let lo = field.disc[i].min(field.envelope[i]);
            let hi = field.disc[i].max(field.envelope[i]);
            assert!(field.total[i] >= lo * (1.0 - 1e-12) && field.total[i] <= hi * (1.0 + 1e-12));
        }
        if n_env == 0.0 && n_disc == 0.0 {
            assert_eq!(field.total[i], 10.0);
        }
    }
}

#[test]
fn field_rejects_mismatched_density() {
    let grid = CartesianGrid::new([Length::from_au(300.0); 3], [4; 3]).unwrap();
    let finer = CartesianGrid::new([Length::from_au(300.0); 3], [6; 3]).unwrap();
    let density = density(&finer);

    assert!(matches!(
        model().compute(&density, &grid),
        Err(ModelError::LengthMismatch { .. })
    ));
}

#[test]
fn negative_floor_is_rejected() {
    let result = model().with_min_disc_temperature(Temperature::from_kelvin(-1.0));
    assert!(matches!(result, Err(ModelError::InvalidParameter { name: "tmin", .. })));
}
