use approx::assert_relative_eq;
use units::{Length, MassRate, H2_MASS_KG, SOLAR_MASS_KG};

use crate::density::DensityField;
use crate::grid::CartesianGrid;
use crate::properties::ModelProperties;
use crate::temperature::TemperatureField;

fn two_node_model() -> (CartesianGrid, DensityField, TemperatureField) {
    let grid = CartesianGrid::new([Length::from_au(1.0); 3], [2; 3]).unwrap();
    let n = grid.n_points();

    let mut disc = vec![0.0; n];
    let mut envelope = vec![0.0; n];
    disc[0] = 1.0e10;
    envelope[1] = 3.0e10;
    let total = disc.iter().zip(&envelope).map(|(d, e)| d + e).collect();

    let density = DensityField {
        total,
        disc,
        envelope,
        scale_height: vec![0.0; n],
        transition_radius: Length::from_au(0.5),
        disc_flag: true,
        env_flag: true,
        r_disc: Length::from_au(1.0),
        r_env: Length::from_au(2.0),
        streamline: vec![0.0; n],
    };

    let mut t = vec![10.0; n];
    t[0] = 20.0;
    t[1] = 40.0;
    let temperature = TemperatureField {
        total: t,
        disc: vec![0.0; n],
        envelope: vec![0.0; n],
    };

    (grid, density, temperature)
}

#[test]
fn integrates_masses_and_temperatures() {
    let (grid, density, temperature) = two_node_model();
    let props = ModelProperties::compute(&density, &temperature, &grid).unwrap();

    let dv = grid.cell_volume();
    assert_relative_eq!(dv, Length::from_au(1.0).to_m().powi(3), max_relative = 1e-12);

    let disc_kg = 1.0e10 * H2_MASS_KG * dv;
    assert_relative_eq!(props.disc_mass.to_kg(), disc_kg, max_relative = 1e-12);
    assert_relative_eq!(props.envelope_mass.to_kg(), 3.0 * disc_kg, max_relative = 1e-12);
    assert_relative_eq!(props.total_mass.to_kg(), 4.0 * disc_kg, max_relative = 1e-12);

    assert_relative_eq!(props.mean_temperature.to_kelvin(), 35.0, max_relative = 1e-12);
    assert_eq!(props.min_temperature.to_kelvin(), 20.0);
    assert_eq!(props.max_temperature.to_kelvin(), 40.0);
    assert_eq!(props.peak_density.to_per_m3(), 3.0e10);
    assert_eq!(props.occupied_nodes, 2);
    assert_eq!(props.n_points, 27);
}

#[test]
fn infall_timescale_from_envelope_mass() {
    let (grid, density, temperature) = two_node_model();
    let props = ModelProperties::compute(&density, &temperature, &grid).unwrap();

    let rate = MassRate::from_solar_masses_per_year(1e-6);
    let expected = props.envelope_mass.to_kg() / SOLAR_MASS_KG / 1e-6;
    assert_relative_eq!(props.infall_timescale(rate).to_years(), expected, max_relative = 1e-12);
}

#[test]
fn empty_model_reports_zeros() {
    let (grid, mut density, temperature) = two_node_model();
    for field in [&mut density.total, &mut density.disc, &mut density.envelope] {
        field.iter_mut().for_each(|n| *n = 0.0);
    }
    let props = ModelProperties::compute(&density, &temperature, &grid).unwrap();

    assert_eq!(props.occupied_nodes, 0);
    assert_eq!(props.total_mass.to_kg(), 0.0);
    assert_eq!(props.mean_temperature.to_kelvin(), 0.0);
}

#[test]
fn report_lists_every_quantity() {
    let (grid, density, temperature) = two_node_model();
    let report = ModelProperties::compute(&density, &temperature, &grid)
        .unwrap()
        .to_string();

    assert!(report.contains("Total mass"));
    assert!(report.contains("envelope"));
    assert!(report.contains("Temperature range (K): 20.000 - 40.000"));
    assert!(report.contains("Occupied nodes: 2 of 27"));
}
