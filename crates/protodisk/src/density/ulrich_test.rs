use approx::assert_relative_eq;
use units::{Length, Mass, MassRate, NumberDensity, VolumeDensity, H2_MASS_KG};

use super::{envelope_reference_density, solve_streamline, streamline_ratio, UlrichEnvelope};
use crate::grid::CartesianGrid;

fn cubic(mu0: f64, mu: f64, r_over_rd: f64) -> f64 {
    mu0.powi(3) + mu0 * (r_over_rd - 1.0) - mu * r_over_rd
}

fn envelope(rho0: f64, r_max_au: f64) -> UlrichEnvelope {
    UlrichEnvelope::new(
        Length::from_solar_radii(1.0),
        Length::from_au(100.0),
        VolumeDensity::from_kg_per_m3(rho0),
        Length::from_au(r_max_au),
    )
    .unwrap()
}

#[test]
fn streamline_satisfies_cubic() {
    for &r_over_rd in &[0.05, 0.5, 0.99, 1.0, 1.01, 2.0, 25.0] {
        for &mu in &[-0.9, -0.3, 0.1, 0.5, 0.99] {
            let mu0 = solve_streamline(r_over_rd, mu);
            assert!(mu0.abs() <= 1.0);
            assert_eq!(mu0.signum(), mu.signum());
            assert!(
                cubic(mu0, mu, r_over_rd).abs() < 1e-9,
                "r/rd = {r_over_rd}, mu = {mu}, mu0 = {mu0}"
            );
        }
    }
}

#[test]
fn streamline_is_radial_far_away() {
    // Far outside r_d the angular momentum is negligible: μ₀ → μ
    let mu0 = solve_streamline(1.0e6, 0.4);
    assert_relative_eq!(mu0, 0.4, max_relative = 1e-4);
}

#[test]
fn streamline_on_the_pole() {
    assert_relative_eq!(solve_streamline(0.3, 1.0), 1.0, max_relative = 1e-9);
    assert_relative_eq!(solve_streamline(3.0, 1.0), 1.0, max_relative = 1e-9);
    assert_relative_eq!(solve_streamline(3.0, -1.0), -1.0, max_relative = 1e-9);
}

#[test]
fn streamline_in_the_midplane() {
    // Outside r_d the midplane is fed by the θ₀ = π/2 streamline
    assert_eq!(solve_streamline(2.0, 0.0), 0.0);
    // Inside r_d midplane material comes from higher latitudes
    let mu0 = solve_streamline(0.5, 0.0);
    assert_relative_eq!(mu0, 0.5_f64.sqrt(), max_relative = 1e-9);
}

#[test]
fn streamline_ratio_limit() {
    assert_relative_eq!(streamline_ratio(0.2, 0.4, 2.0), 0.5);
    assert_relative_eq!(streamline_ratio(0.0, 0.0, 2.0), 0.5);
    assert_eq!(streamline_ratio(0.0, 0.0, 0.5), 0.0);
}

#[test]
fn reference_density_scaling() {
    let mass = Mass::from_solar_masses(1.0);
    let rate = MassRate::from_solar_masses_per_year(1e-5);
    let rd = Length::from_au(100.0);

    let rho0 = envelope_reference_density(rate, rd, mass).to_kg_per_m3();
    assert!(rho0 > 0.0);

    // ρ₀ ∝ Ṁ r_d^(-3/2) M^(-1/2)
    let doubled_rate = envelope_reference_density(rate * 2.0, rd, mass).to_kg_per_m3();
    assert_relative_eq!(doubled_rate / rho0, 2.0, max_relative = 1e-12);

    let wider = envelope_reference_density(rate, rd * 4.0, mass).to_kg_per_m3();
    assert_relative_eq!(wider / rho0, 0.125, max_relative = 1e-12);

    let heavier = envelope_reference_density(rate, rd, mass * 4.0).to_kg_per_m3();
    assert_relative_eq!(heavier / rho0, 0.5, max_relative = 1e-12);
}

#[test]
fn envelope_is_empty_outside_shell() {
    let grid = CartesianGrid::new([Length::from_au(400.0); 3], [8; 3]).unwrap();
    let env = envelope(1e-15, 250.0).compute(&grid);

    assert_eq!(env.number_density.len(), grid.n_points());
    for node in grid.nodes() {
        let n = env.number_density[node.index];
        if node.r > Length::from_au(250.0).to_m() || node.r < Length::from_solar_radii(1.0).to_m() {
            assert_eq!(n, 0.0);
            assert_eq!(env.streamline[node.index], 0.0);
        } else {
            assert!(n > 0.0, "node {} at r = {} m is empty", node.index, node.r);
        }
    }
}

#[test]
fn envelope_matches_free_fall_far_out() {
    // At r ≫ r_d the profile tends to ρ₀ (r/r_d)^(-3/2) (1 + 1)^(-1/2)
    let model = envelope(1e-15, 1.0e6);
    let grid = CartesianGrid::new([Length::from_au(2.0e4); 3], [2; 3]).unwrap();
    let node = grid.node(grid.index(2, 1, 1));
    let (rho, mu0) = model.sample(&node).unwrap();

    let r_over_rd = node.r / Length::from_au(100.0).to_m();
    let expected = 1e-15 * r_over_rd.powf(-1.5) / 2.0_f64.sqrt();
    assert_relative_eq!(rho.to_kg_per_m3(), expected, max_relative = 1e-2);
    assert!(mu0.abs() < 1e-2);

    let n = NumberDensity::h2_from_mass_density(rho);
    assert_relative_eq!(n.to_per_m3() * H2_MASS_KG, rho.to_kg_per_m3(), max_relative = 1e-12);
}

#[test]
fn envelope_rejects_bad_parameters() {
    let result = UlrichEnvelope::new(
        Length::from_solar_radii(1.0),
        Length::zero(),
        VolumeDensity::from_kg_per_m3(1e-15),
        Length::from_au(100.0),
    );
    assert!(result.is_err());
}
