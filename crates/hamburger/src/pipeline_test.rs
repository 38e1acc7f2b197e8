use std::fs;

use tempfile::tempdir;

use crate::config::ModelConfig;
use crate::pipeline::{build_model, export_model, run};

fn coarse_config() -> ModelConfig {
    let mut config = ModelConfig::default();
    config.grid.divisions = 16;
    config.plots.size = 80;
    config.plots.scatter.n_rand = 100;
    config
}

#[test]
fn coarse_run_writes_every_file() {
    let dir = tempdir().unwrap();
    let report = run(&coarse_config(), dir.path()).unwrap();

    for path in report.lime_files.all() {
        assert!(path.exists(), "{path:?} missing");
    }

    let expected = [
        "3DpointsBurger.png",
        "DensMidplane_Burger.png",
        "DensVertical_Burger.png",
        "TempMidplane_Burger.png",
        "TempVertical_Burger.png",
        "Emissivity_Burger.png",
    ];
    assert_eq!(report.plots.len(), expected.len());
    for name in expected {
        let path = dir.path().join(name);
        assert!(report.plots.contains(&path));
        assert!(fs::metadata(&path).unwrap().len() > 0, "{name} is empty");
    }

    assert_eq!(report.properties.n_points, 17 * 17 * 17);
    assert!(report.properties.total_mass.to_solar_masses() > 0.0);
    assert!(report.extra_files.is_empty());
}

#[test]
fn plots_can_be_disabled() {
    let dir = tempdir().unwrap();
    let mut config = coarse_config();
    config.plots.enabled = false;

    let report = run(&config, dir.path()).unwrap();
    assert!(report.plots.is_empty());
    assert!(!dir.path().join("3DpointsBurger.png").exists());
}

#[test]
fn optional_exports() {
    let dir = tempdir().unwrap();
    let mut config = coarse_config();
    config.grid.divisions = 8;
    config.output.submodel = true;
    config.output.predefined_grid = true;
    config.output.sink_points = 25;

    let model = build_model(&config).unwrap();
    let (_, extra) = export_model(&model, &config, dir.path()).unwrap();

    assert_eq!(extra.len(), 2);
    let occupied = model.density.total.iter().filter(|&&n| n > 0.0).count();

    let submodel = fs::read_to_string(dir.path().join("submodel_Burger.dat")).unwrap();
    assert_eq!(submodel.lines().count(), occupied);

    let pregrid = fs::read_to_string(dir.path().join("pregrid_Burger.dat")).unwrap();
    assert_eq!(pregrid.lines().count(), occupied + 25);
}

#[test]
fn model_fields_share_the_grid() {
    let mut config = coarse_config();
    config.grid.divisions = 6;
    let model = build_model(&config).unwrap();
    let n = model.grid.n_points();

    assert_eq!(model.density.len(), n);
    assert_eq!(model.temperature.len(), n);
    assert_eq!(model.velocity.len(), n);
    assert_eq!(model.abundance.len(), n);
    assert_eq!(model.gas_to_dust.len(), n);
    model.lime_fields().validate(n).unwrap();
}
