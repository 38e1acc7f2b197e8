use std::fs;

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tempfile::tempdir;
use units::{Length, Temperature};

use super::lime::LimeFields;
use super::predefined::{
    predefined_points, read_predefined_grid, sink_points, write_predefined_grid, PredefinedPoint,
};
use crate::error::ModelError;
use crate::grid::CartesianGrid;

fn points() -> Vec<PredefinedPoint> {
    vec![
        PredefinedPoint {
            id: 0,
            position: [1.5e13, -2.0e12, 0.0],
            density: 3.2e13,
            temperature: 45.0,
            velocity: [-1200.0, 350.0, 0.0],
        },
        PredefinedPoint {
            id: 1,
            position: [0.0, 7.5e12, -7.5e12],
            density: 8.0e11,
            temperature: 120.5,
            velocity: [0.0, -800.0, 800.0],
        },
    ]
}

#[test]
fn written_grid_reads_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grid.dat");
    let written = points();

    write_predefined_grid(&path, &written).unwrap();
    let read = read_predefined_grid(&path, written.len()).unwrap();

    assert_eq!(read.len(), written.len());
    for (a, b) in read.iter().zip(&written) {
        assert_eq!(a.id, b.id);
        for d in 0..3 {
            assert_relative_eq!(a.position[d], b.position[d], max_relative = 1e-6);
            assert_relative_eq!(a.velocity[d], b.velocity[d], max_relative = 1e-6);
        }
        assert_relative_eq!(a.density, b.density, max_relative = 1e-6);
        assert_relative_eq!(a.temperature, b.temperature, max_relative = 1e-6);
    }
}

#[test]
fn short_rows_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grid.dat");
    fs::write(&path, "0 1 2 3 4 5 6 7 8\n1 1 2 3 4 5 6 7\n").unwrap();

    match read_predefined_grid(&path, 10) {
        Err(ModelError::MalformedGridFile { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected malformed grid error, got {other:?}"),
    }
}

#[test]
fn out_of_range_ids_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grid.dat");

    fs::write(&path, "11 1 2 3 4 5 6 7 8\n").unwrap();
    assert!(matches!(
        read_predefined_grid(&path, 10),
        Err(ModelError::MalformedGridFile { line: 1, .. })
    ));

    fs::write(&path, "-1 1 2 3 4 5 6 7 8\n").unwrap();
    assert!(matches!(
        read_predefined_grid(&path, 10),
        Err(ModelError::MalformedGridFile { .. })
    ));

    // The upper bound itself is accepted
    fs::write(&path, "10 1 2 3 4 5 6 7 8\n").unwrap();
    assert_eq!(read_predefined_grid(&path, 10).unwrap().len(), 1);
}

#[test]
fn unparsable_numbers_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grid.dat");
    fs::write(&path, "0 1 2 three 4 5 6 7 8\n").unwrap();

    assert!(matches!(
        read_predefined_grid(&path, 10),
        Err(ModelError::MalformedGridFile { .. })
    ));
}

#[test]
fn occupied_nodes_become_points() {
    let grid = CartesianGrid::new([Length::from_au(1.0); 3], [2; 3]).unwrap();
    let n = grid.n_points();
    let mut density = vec![0.0; n];
    density[5] = 1.0e10;
    density[20] = 2.0e10;
    let temperature = vec![30.0; n];
    let zeros = vec![0.0; n];

    let fields = LimeFields {
        density: &density,
        temperature: &temperature,
        vx: &zeros,
        vy: &zeros,
        vz: &zeros,
        abundance: &zeros,
        gas_to_dust: &zeros,
    };
    let points = predefined_points(&fields, &grid).unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].id, 0);
    assert_eq!(points[1].id, 1);
    assert_eq!(points[1].density, 2.0e10);

    let node = grid.node(20);
    assert_eq!(points[1].position, [node.x, node.y, node.z]);
}

#[test]
fn sinks_lie_on_the_sphere() {
    let mut rng = ChaCha8Rng::seed_from_u64(6611304);
    let radius = Length::from_au(500.0);
    let sinks = sink_points(50, radius, Temperature::from_kelvin(2.725), 100, &mut rng);

    assert_eq!(sinks.len(), 50);
    for (k, sink) in sinks.iter().enumerate() {
        assert_eq!(sink.id, 100 + k);
        let [x, y, z] = sink.position;
        assert_relative_eq!((x * x + y * y + z * z).sqrt(), radius.to_m(), max_relative = 1e-12);
        assert_eq!(sink.velocity, [0.0; 3]);
        assert_eq!(sink.temperature, 2.725);
    }
}
