use std::fs;

use approx::assert_relative_eq;
use tempfile::tempdir;
use units::Length;

use super::lime::{write_datatab, write_submodel, Exp, LimeFields};
use crate::error::ModelError;
use crate::grid::{Axis, CartesianGrid};

struct Arrays {
    density: Vec<f64>,
    temperature: Vec<f64>,
    velocity: [Vec<f64>; 3],
    abundance: Vec<f64>,
    gtd: Vec<f64>,
}

impl Arrays {
    fn new(n: usize) -> Self {
        let mut density = vec![0.0; n];
        density[4] = 2.5e12;
        density[13] = 1.0e14;
        Self {
            density,
            temperature: (0..n).map(|i| 10.0 + i as f64).collect(),
            velocity: [vec![-150.0; n], vec![0.0; n], vec![1.0e3; n]],
            abundance: vec![5e-8; n],
            gtd: vec![100.0; n],
        }
    }

    fn fields(&self) -> LimeFields<'_> {
        LimeFields {
            density: &self.density,
            temperature: &self.temperature,
            vx: &self.velocity[0],
            vy: &self.velocity[1],
            vz: &self.velocity[2],
            abundance: &self.abundance,
            gas_to_dust: &self.gtd,
        }
    }
}

fn grid() -> CartesianGrid {
    CartesianGrid::new([Length::from_au(10.0); 3], [2; 3]).unwrap()
}

#[test]
fn c_style_exponent_format() {
    assert_eq!(Exp(123456.0).to_string(), "1.234560e+05");
    assert_eq!(Exp(0.0).to_string(), "0.000000e+00");
    assert_eq!(Exp(-1.5e-3).to_string(), "-1.500000e-03");
    assert_eq!(Exp(5e-8).to_string(), "5.000000e-08");
    assert_eq!(Exp(2.0e120).to_string(), "2.000000e+120");
    assert_eq!(Exp(9.9999996e5).to_string(), "1.000000e+06");
    assert_eq!(Exp(-f64::MAX).to_string(), "-1.797693e+308");
    assert_eq!(format!("{} {}", Exp(1.0), Exp(-2.5)), "1.000000e+00 -2.500000e+00");
}

#[test]
fn datatab_has_one_row_per_node() {
    let dir = tempdir().unwrap();
    let grid = grid();
    let arrays = Arrays::new(grid.n_points());

    let files = write_datatab(dir.path(), &arrays.fields(), &grid).unwrap();
    for path in files.all() {
        assert!(path.exists(), "{path:?} missing");
    }

    let datatab = fs::read_to_string(&files.datatab).unwrap();
    let rows: Vec<&str> = datatab.lines().collect();
    assert_eq!(rows.len(), grid.n_points());

    let row: Vec<&str> = rows[13].split_whitespace().collect();
    assert_eq!(row.len(), 8);
    assert_eq!(row[0], "13");
    assert_eq!(row[1], "1.000000e+14");
    assert_eq!(row[2], "2.300000e+01");
    assert_eq!(row[3], "-1.500000e+02");
    assert_eq!(row[6], "5.000000e-08");
    assert_eq!(row[7], "1.000000e+02");

    let npoints = fs::read_to_string(&files.npoints).unwrap();
    assert_eq!(npoints.trim(), "3 3 3 27");

    let x: Vec<f64> = fs::read_to_string(&files.x)
        .unwrap()
        .lines()
        .map(|l| l.parse().unwrap())
        .collect();
    assert_eq!(x.len(), 3);
    assert_relative_eq!(x[2], grid.axis(Axis::X)[2], max_relative = 1e-6);
    assert_eq!(x[1], 0.0);
}

#[test]
fn submodel_lists_occupied_nodes() {
    let dir = tempdir().unwrap();
    let grid = grid();
    let arrays = Arrays::new(grid.n_points());
    let path = dir.path().join("sub").join("submodel.dat");

    let rows = write_submodel(&path, &arrays.fields(), &grid).unwrap();
    assert_eq!(rows, 2);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<Vec<&str>> = content.lines().map(|l| l.split_whitespace().collect()).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0][0], "4");
    assert_eq!(lines[1][0], "13");
    assert!(lines.iter().all(|l| l.len() == 11));

    // Node 13 is the origin
    assert_eq!(lines[1][1], "0.000000e+00");
    assert_eq!(lines[1][4], "1.000000e+14");
}

#[test]
fn mismatched_arrays_are_rejected() {
    let dir = tempdir().unwrap();
    let grid = grid();
    let mut arrays = Arrays::new(grid.n_points());
    arrays.gtd.pop();

    let result = write_datatab(dir.path(), &arrays.fields(), &grid);
    assert!(matches!(
        result,
        Err(ModelError::LengthMismatch { field: "gas-to-dust", expected: 27, actual: 26 })
    ));
    assert!(!dir.path().join("datatab.dat").exists());
}
